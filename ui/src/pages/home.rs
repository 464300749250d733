use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::cta::CallToAction;
use crate::components::features::Features;
use crate::components::hero::Hero;
use crate::components::products::Products;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <Title text="OCare | Premium Dental Care Solutions"/>
        <Hero/>
        <Products/>
        <Features/>
        <CallToAction/>
    }
}
