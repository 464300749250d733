use leptos::prelude::*;

/// Eyebrow, two-tone title and optional blurb on top of a section.
#[component]
pub fn SectionHeading(
    eyebrow: &'static str,
    lead: &'static str,
    #[prop(optional)] accent: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-16">
            <span class="text-primary font-semibold text-sm uppercase tracking-wider">{eyebrow}</span>
            <h2 class="text-4xl md:text-5xl font-bold mt-3 mb-4">
                {lead}
                <span class="text-gradient">{accent}</span>
            </h2>
            {blurb.map(|b| view! { <p class="text-muted-foreground max-w-2xl mx-auto text-lg">{b}</p> })}
        </div>
    }
}

/// Page-top banner for the inner pages.
#[component]
pub fn PageIntro(
    eyebrow: &'static str,
    lead: &'static str,
    accent: &'static str,
    blurb: &'static str,
) -> impl IntoView {
    view! {
        <section class="pt-32 pb-16 bg-gradient-hero">
            <div class="container mx-auto px-4">
                <div class="max-w-3xl mx-auto text-center">
                    <span class="text-primary font-semibold text-sm uppercase tracking-wider">{eyebrow}</span>
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold mt-3 mb-6">
                        {lead}
                        <span class="text-gradient">{accent}</span>
                    </h1>
                    <p class="text-muted-foreground text-lg">{blurb}</p>
                </div>
            </div>
        </section>
    }
}
