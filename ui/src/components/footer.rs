use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;

use super::icon::Icon;
use super::navbar::Logo;
use crate::content::{
    ADDRESS, COPYRIGHT_YEAR, FOOTER_EMAIL, FOOTER_GROUPS, FOOTER_PHONE, FooterGroup, Glyph, SOCIALS,
};
use crate::nav::LinkTarget;
use crate::nav::browser::use_follow_link;

const LINK: &str = "text-background/70 hover:text-primary transition-colors text-sm";

#[component]
fn LinkGroup(group: &'static FooterGroup) -> impl IntoView {
    let follow = use_follow_link();

    view! {
        <div>
            <h4 class="font-semibold mb-4">{group.title}</h4>
            <ul class="space-y-3">
                {group
                    .links
                    .iter()
                    .map(move |&(label, href)| {
                        let item = match href.strip_prefix("/#") {
                            Some(id) => view! {
                                <a
                                    href=href
                                    class=LINK
                                    on:click=move |e: ev::MouseEvent| {
                                        e.prevent_default();
                                        follow(LinkTarget::Anchor(id));
                                    }
                                >
                                    {label}
                                </a>
                            }
                            .into_any(),
                            // no page yet
                            None if href == "#" => view! { <a href="#" class=LINK>{label}</a> }.into_any(),
                            None => view! { <A href=href attr:class=LINK>{label}</A> }.into_any(),
                        };
                        view! { <li>{item}</li> }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-foreground text-background">
            <div class="container mx-auto px-4 py-16">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-12">
                    <div class="lg:col-span-2">
                        <A href="/" attr:class="inline-flex mb-6">
                            <Logo/>
                        </A>
                        <p class="text-background/70 mb-6 max-w-sm">
                            "Revolutionizing oral care with innovative dental equipment designed for healthier smiles."
                        </p>

                        <div class="space-y-3 text-background/70">
                            <div class="flex items-start gap-3">
                                <Icon glyph=Glyph::MapPin size=20 class="mt-1 flex-shrink-0 text-primary"/>
                                <span class="text-sm">{ADDRESS}</span>
                            </div>
                            <div class="flex items-center gap-3">
                                <Icon glyph=Glyph::Phone size=20 class="text-primary"/>
                                <span class="text-sm">{FOOTER_PHONE}</span>
                            </div>
                            <div class="flex items-center gap-3">
                                <Icon glyph=Glyph::Mail size=20 class="text-primary"/>
                                <span class="text-sm">{FOOTER_EMAIL}</span>
                            </div>
                        </div>
                    </div>

                    {FOOTER_GROUPS.iter().map(|group| view! { <LinkGroup group=group/> }).collect_view()}
                </div>

                <div class="mt-12 pt-8 border-t border-background/10 flex flex-col md:flex-row justify-between items-center gap-4">
                    <p class="text-background/50 text-sm">
                        {format!("© {COPYRIGHT_YEAR} OCare. All rights reserved.")}
                    </p>
                    <div class="flex gap-4">
                        {SOCIALS
                            .iter()
                            .map(|&(glyph, name)| view! {
                                <a
                                    href="#"
                                    aria-label=name
                                    class="w-10 h-10 rounded-full bg-background/10 flex items-center justify-center hover:bg-primary transition-colors"
                                >
                                    <Icon glyph=glyph size=18/>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
