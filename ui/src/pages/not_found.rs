use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    log::warn!("no route for {path}");

    view! {
        <Title text="Page Not Found | OCare"/>
        <section class="min-h-[70vh] flex items-center justify-center pt-32 pb-16">
            <div class="text-center">
                <h1 class="text-6xl font-bold mb-4">"404"</h1>
                <p class="text-xl text-muted-foreground mb-6">"Oops! Page not found"</p>
                <A href="/" attr:class="text-primary underline underline-offset-4 hover:text-primary/80">
                    "Return to Home"
                </A>
            </div>
        </section>
    }
}
