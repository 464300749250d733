use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::Icon;
use crate::content::Glyph;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="py-24 bg-foreground text-background relative overflow-hidden">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-1/2 -right-1/4 w-[800px] h-[800px] rounded-full border border-background/10 animate-spin-slow"/>
                <div class="absolute -bottom-1/2 -left-1/4 w-[600px] h-[600px] rounded-full border border-background/5 animate-spin-slow"/>
            </div>

            <div class="container mx-auto px-4 relative z-10">
                <div class="max-w-3xl mx-auto text-center">
                    <span class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-background/10 text-primary text-sm font-medium mb-6">
                        <Icon glyph=Glyph::Mail size=16/>
                        "Get in Touch"
                    </span>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">
                        "Ready to Transform Your " <span class="text-primary">"Oral Care"</span> " Routine?"
                    </h2>
                    <p class="text-background/70 text-lg mb-10 max-w-2xl mx-auto">
                        "Join thousands of satisfied customers who have made the switch to OCare. Experience the difference professional-grade dental equipment can make."
                    </p>
                    <div class="flex flex-wrap justify-center gap-4">
                        <A
                            href="/contact"
                            attr:class="group inline-flex items-center gap-2 rounded-md bg-gradient-primary text-primary-foreground px-8 py-3 font-semibold"
                        >
                            "Contact Us Today"
                            <Icon glyph=Glyph::ArrowRight class="group-hover:translate-x-1 transition-transform"/>
                        </A>
                        <A
                            href="/about"
                            attr:class="inline-flex items-center rounded-md border border-background/30 px-8 py-3 font-semibold hover:bg-background/10"
                        >
                            "Learn About Us"
                        </A>
                    </div>
                </div>
            </div>
        </section>
    }
}
