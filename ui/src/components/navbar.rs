use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::Icon;
use crate::content::Glyph;
use crate::nav::browser::{use_current_location, use_follow_link, use_menu, use_scrolled_past_threshold};
use crate::nav::{NAV_LINKS, NavLink};

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <span class="flex items-center gap-2">
            <span class="w-10 h-10 rounded-xl bg-gradient-primary flex items-center justify-center shadow-soft">
                <span class="text-primary-foreground font-bold text-3xl -mb-1">O</span>
            </span>
            <span class="text-2xl font-bold">Care</span>
        </span>
    }
}

#[derive(Clone, Copy)]
struct LinkStyle {
    base: &'static str,
    idle: &'static str,
    underline: bool,
}

const DESKTOP: LinkStyle = LinkStyle {
    base: "relative text-sm font-medium transition-colors duration-300 hover:text-primary",
    idle: "text-muted-foreground",
    underline: true,
};

const MOBILE: LinkStyle = LinkStyle {
    base: "block py-2 text-lg font-medium transition-colors",
    idle: "text-muted-foreground hover:text-primary",
    underline: false,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = use_scrolled_past_threshold();
    let menu = use_menu();
    let location = use_current_location();
    let follow = use_follow_link();

    let link = move |link: NavLink, style: LinkStyle| {
        let active = move || link.is_active(&location.get());
        view! {
            <a
                href=link.target.href()
                class=move || {
                    format!("{} {}", style.base, if active() { "text-primary" } else { style.idle })
                }
                aria-current=move || active().then_some("page")
                on:click=move |e: ev::MouseEvent| {
                    e.prevent_default();
                    follow(link.target);
                }
            >
                {link.label}
                <Show when=move || style.underline && active()>
                    <span class="absolute -bottom-1 left-0 right-0 h-0.5 bg-primary rounded-full"/>
                </Show>
            </a>
        }
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 {}",
                if scrolled.get() { "glass shadow-card py-3" } else { "bg-transparent py-5" },
            )
        }>
            <div class="container mx-auto px-4">
                <nav class="flex items-center justify-between">
                    <A href="/" attr:class="flex items-center gap-2">
                        <Logo/>
                    </A>

                    <div class="hidden md:flex items-center gap-8">
                        {NAV_LINKS
                            .into_iter()
                            .map(|l| link(l, DESKTOP))
                            .collect_view()}
                    </div>

                    <div class="hidden md:block">
                        <A
                            href="/contact"
                            attr:class="inline-flex items-center rounded-md bg-primary text-primary-foreground px-3 py-2 text-sm font-medium hover:bg-primary/90"
                        >
                            "Get in Touch"
                        </A>
                    </div>

                    <button
                        class="md:hidden p-2 text-foreground"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=move |_| menu.update(|m| m.toggle())
                    >
                        {move || {
                            let glyph = if menu.get().is_open() { Glyph::X } else { Glyph::Menu };
                            view! { <Icon glyph=glyph/> }
                        }}
                    </button>
                </nav>

                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden overflow-hidden">
                        <div class="py-6 flex flex-col gap-4">
                            {NAV_LINKS
                                .into_iter()
                                .map(|l| link(l, MOBILE))
                                .collect_view()}
                            <A
                                href="/contact"
                                attr:class="block w-full mt-4 rounded-md bg-primary text-primary-foreground px-4 py-2 text-center font-medium"
                            >
                                "Get in Touch"
                            </A>
                        </div>
                    </div>
                </Show>
            </div>
        </header>
    }
}
