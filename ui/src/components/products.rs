use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::Icon;
use super::section::SectionHeading;
use crate::content::{Glyph, PRODUCTS, Product};

#[component]
fn ProductCard(product: &'static Product) -> impl IntoView {
    let media = match product.image {
        Some(src) => view! {
            <img
                src=src
                alt=product.name
                class="w-full h-full object-contain p-4 group-hover:scale-105 transition-transform duration-500"
            />
        }
        .into_any(),
        None => view! {
            <div class="text-center text-muted-foreground">
                <Icon glyph=Glyph::Clock size=48 class="mx-auto mb-3 opacity-50"/>
                <span class="text-sm uppercase tracking-wider">"Coming Soon"</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <article class="group relative bg-card rounded-2xl overflow-hidden shadow-card hover:shadow-elevated transition-all duration-500 h-full flex flex-col">
            <div class=format!("relative h-72 {} overflow-hidden flex items-center justify-center", product.backdrop)>
                {media}
                {product.upcoming.then(|| view! {
                    <div class="absolute top-4 right-4 px-3 py-1 bg-primary text-primary-foreground text-xs font-semibold rounded-full">
                        "Upcoming"
                    </div>
                })}
            </div>

            <div class="p-6 flex flex-col flex-grow">
                <span class="text-primary text-sm font-medium">{product.tagline}</span>
                <h3 class="text-2xl font-bold mt-1 mb-3">{product.name}</h3>
                <p class="text-muted-foreground text-sm mb-6 flex-grow">{product.description}</p>

                <div class="grid grid-cols-2 gap-2 mb-6">
                    {product
                        .chips()
                        .map(|(label, glyph)| view! {
                            <div class="flex items-center gap-2 text-xs text-muted-foreground">
                                <Icon glyph=glyph size=14 class="text-primary"/>
                                <span>{label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>

                {(!product.upcoming).then(|| view! {
                    <A
                        href="/contact"
                        attr:class="group/btn w-full inline-flex items-center justify-center gap-2 rounded-md border border-border px-4 py-2 font-medium hover:bg-muted"
                    >
                        "Learn More"
                        <Icon glyph=Glyph::ArrowRight size=16 class="group-hover/btn:translate-x-1 transition-transform"/>
                    </A>
                })}
            </div>
        </article>
    }
}

/// Anchor target `#products`.
#[component]
pub fn Products() -> impl IntoView {
    view! {
        <section id="products" class="py-24 bg-muted/30">
            <div class="container mx-auto px-4">
                <SectionHeading
                    eyebrow="Our Products"
                    lead="Designed for Your "
                    accent="Perfect Smile"
                    blurb="Discover our range of innovative dental care products, engineered with precision and designed for everyday use."
                />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    {PRODUCTS.iter().map(|product| view! { <ProductCard product=product/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}
