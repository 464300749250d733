use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;

use crate::components::layout::Shell;
use crate::config::SiteConfig;
use crate::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
      <Router>
        <Shell>
          <AppRoutes/>
        </Shell>
      </Router>
    }
}
