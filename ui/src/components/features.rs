use leptos::prelude::*;

use super::icon::Icon;
use super::section::SectionHeading;
use crate::content::FEATURES;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="py-24 bg-background">
            <div class="container mx-auto px-4">
                <SectionHeading
                    eyebrow="Why Choose OCare"
                    lead="Technology That "
                    accent="Cares"
                    blurb="Every OCare product is engineered with cutting-edge technology to deliver professional-grade oral care at home."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <div class="group p-8 rounded-2xl bg-card border border-border hover:border-primary/30 hover:shadow-card transition-all duration-300">
                                <div class="w-14 h-14 rounded-xl bg-primary/10 flex items-center justify-center mb-6 group-hover:bg-primary group-hover:scale-110 transition-all duration-300">
                                    <Icon glyph=f.glyph size=28 class="text-primary group-hover:text-primary-foreground transition-colors"/>
                                </div>
                                <h3 class="text-xl font-semibold mb-3">{f.title}</h3>
                                <p class="text-muted-foreground">{f.body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
