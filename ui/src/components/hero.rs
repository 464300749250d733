use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::Icon;
use crate::content::Glyph;
use crate::nav::LinkTarget;
use crate::nav::browser::use_follow_link;

#[component]
fn Trust(badge: &'static str, title: &'static str, note: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2">
            <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center">
                <span class="text-primary font-bold">{badge}</span>
            </div>
            <div>
                <p class="font-semibold text-sm">{title}</p>
                <p class="text-xs text-muted-foreground">{note}</p>
            </div>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let follow = use_follow_link();

    view! {
        <section class="relative min-h-screen flex items-center overflow-hidden bg-gradient-hero">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-40 -right-40 w-96 h-96 rounded-full bg-primary/10 blur-3xl"/>
                <div class="absolute bottom-0 -left-20 w-80 h-80 rounded-full bg-accent/10 blur-3xl"/>
            </div>

            <div class="container mx-auto px-4 py-32 relative z-10">
                <div class="max-w-3xl">
                    <span class="inline-flex items-center gap-2 px-4 py-2 mb-6 rounded-full bg-primary/10 text-primary text-sm font-medium">
                        <Icon glyph=Glyph::Sparkles size=16/>
                        "Premium Dental Care Solutions"
                    </span>

                    <h1 class="text-5xl md:text-6xl lg:text-7xl font-bold leading-tight mb-6">
                        "Transform Your " <span class="text-gradient">"Oral Health"</span> " Journey"
                    </h1>

                    <p class="text-lg md:text-xl text-muted-foreground mb-8 max-w-xl">
                        "Experience the future of dental hygiene with OCare's innovative water flossers and oral care equipment. Clinically proven, beautifully designed."
                    </p>

                    <div class="flex flex-wrap gap-4">
                        <button
                            class="group inline-flex items-center gap-2 rounded-md bg-gradient-primary text-primary-foreground px-8 py-3 font-semibold shadow-soft"
                            on:click=move |_| follow(LinkTarget::Anchor("products"))
                        >
                            "Explore Products"
                            <Icon glyph=Glyph::ArrowRight class="group-hover:translate-x-1 transition-transform"/>
                        </button>
                        <A
                            href="/contact"
                            attr:class="inline-flex items-center rounded-md border border-border px-8 py-3 font-semibold hover:bg-muted"
                        >
                            "Learn More"
                        </A>
                    </div>

                    <div class="mt-12 flex items-center gap-8 flex-wrap">
                        <Trust badge="5★" title="Rated Excellent" note="2,000+ reviews"/>
                        <Trust badge="✓" title="Clinically Tested" note="Dentist approved"/>
                    </div>
                </div>
            </div>
        </section>
    }
}
