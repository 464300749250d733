use leptos::prelude::*;

use super::footer::Footer;
use super::navbar::Navbar;
use super::toaster::{Toaster, provide_toasts};
use crate::config::use_config;
use crate::nav::browser::{provide_menu, use_page_shell};

/// Header, footer and toasts around the routed page. Must sit inside the
/// router.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let cfg = use_config();
    let menu = provide_menu();
    provide_toasts(cfg.toast_ttl_ms);
    use_page_shell(menu);

    view! {
        <div class="min-h-screen flex flex-col">
            <Navbar/>
            <main class="flex-grow">{children()}</main>
            <Footer/>
            <Toaster/>
        </div>
    }
}
