use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::pages::{about::About, contact::Contact, home::Home, not_found::NotFound};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
      <Routes fallback=NotFound>
        <Route path=path!("")         view=Home    />
        <Route path=path!("/about")   view=About   />
        <Route path=path!("/contact") view=Contact />
      </Routes>
    }
}
