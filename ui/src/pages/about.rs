use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icon::Icon;
use crate::components::section::PageIntro;
use crate::content::{Glyph, MILESTONES, MISSION, MISSION_POINTS, STATS, STORY, VALUES};

#[component]
fn Stats() -> impl IntoView {
    view! {
        <section class="py-16 bg-background">
            <div class="container mx-auto px-4">
                <div class="flex flex-wrap justify-center gap-8 max-w-2xl mx-auto">
                    {STATS
                        .iter()
                        .map(|&(value, label)| view! {
                            <div class="text-center w-48">
                                <div class="text-4xl md:text-5xl font-bold text-primary mb-2">{value}</div>
                                <div class="text-muted-foreground">{label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Story() -> impl IntoView {
    view! {
        <section class="py-24 bg-muted/30">
            <div class="container mx-auto px-4">
                <div class="grid lg:grid-cols-2 gap-16 items-start">
                    <div>
                        <span class="text-primary font-semibold text-sm uppercase tracking-wider">"Our Story"</span>
                        <h2 class="text-3xl md:text-4xl font-bold mt-3 mb-6">"From Vision to Reality"</h2>
                        <div class="space-y-4 text-muted-foreground">
                            {STORY.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                        </div>
                    </div>

                    <ol class="relative border-l-2 border-primary/20 space-y-8 pl-8">
                        {MILESTONES
                            .iter()
                            .map(|&(year, event)| view! {
                                <li class="relative">
                                    <span class="absolute -left-[2.55rem] top-1 w-4 h-4 rounded-full bg-primary"/>
                                    <span class="text-primary font-bold">{year}</span>
                                    <p class="text-muted-foreground">{event}</p>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Values() -> impl IntoView {
    view! {
        <section class="py-24 bg-background">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <span class="text-primary font-semibold text-sm uppercase tracking-wider">"Our Values"</span>
                    <h2 class="text-3xl md:text-4xl font-bold mt-3 mb-4">"What Drives Us Forward"</h2>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {VALUES
                        .iter()
                        .map(|v| view! {
                            <div class="text-center group">
                                <div class="w-16 h-16 rounded-2xl bg-primary/10 flex items-center justify-center mx-auto mb-6 group-hover:bg-primary transition-colors duration-300">
                                    <Icon glyph=v.glyph size=32 class="text-primary group-hover:text-primary-foreground transition-colors"/>
                                </div>
                                <h3 class="text-xl font-semibold mb-3">{v.title}</h3>
                                <p class="text-muted-foreground">{v.body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Mission() -> impl IntoView {
    view! {
        <section class="py-24 bg-foreground text-background">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto text-center">
                    <h2 class="text-3xl md:text-4xl font-bold mb-6">"Our Mission"</h2>
                    <p class="text-xl text-background/80 mb-10">{format!("\u{201c}{MISSION}\u{201d}")}</p>
                    <div class="flex flex-wrap justify-center gap-6">
                        {MISSION_POINTS
                            .iter()
                            .map(|point| view! {
                                <div class="flex items-center gap-2 text-primary">
                                    <Icon glyph=Glyph::CheckCircle size=20/>
                                    <span class="font-medium">{*point}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Title text="About Us | OCare"/>
        <PageIntro
            eyebrow="About OCare"
            lead="On a Mission to Create "
            accent="Healthier Smiles"
            blurb="Founded with a vision to make professional-grade oral care accessible to everyone, OCare has grown to become a trusted name in dental hygiene products across the globe."
        />
        <Stats/>
        <Story/>
        <Values/>
        <Mission/>
    }
}
