use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::icon::Icon;
use crate::components::section::PageIntro;
use crate::components::toaster::use_toasts;
use crate::config::use_config;
use crate::contact::{ContactFlow, ContactForm, FormField, SubmissionState};
use crate::content::{CONTACT_DETAILS, Glyph, MAP_EMBED};
use crate::scheduler::BrowserScheduler;

const INPUT: &str = "w-full rounded-md border border-input bg-background px-3 py-2 text-sm \
                     placeholder:text-muted-foreground focus:outline-none focus:ring-2 \
                     focus:ring-primary";

#[component]
fn Field(field: FormField, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_owned());
    let on_input = move |e: ev::Event| form.update(|f| f.set(field, event_target_value(&e)));

    let control = match field {
        FormField::Message => view! {
            <textarea
                id=field.id()
                rows="5"
                placeholder=field.placeholder()
                required=field.is_required()
                class=INPUT
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
        _ => view! {
            <input
                id=field.id()
                type=field.input_type()
                placeholder=field.placeholder()
                required=field.is_required()
                class=INPUT
                prop:value=value
                on:input=on_input
            />
        }
        .into_any(),
    };

    view! {
        <div class="space-y-2">
            <label for=field.id() class="text-sm font-medium">{field.label()}</label>
            {control}
        </div>
    }
}

#[component]
fn Details() -> impl IntoView {
    view! {
        <div class="lg:col-span-2">
            <h2 class="text-2xl font-bold mb-8">"Get in Touch"</h2>
            <div class="space-y-8">
                {CONTACT_DETAILS
                    .iter()
                    .map(|d| view! {
                        <div class="flex gap-4">
                            <div class="w-12 h-12 rounded-xl bg-primary/10 flex items-center justify-center flex-shrink-0">
                                <Icon glyph=d.glyph class="text-primary"/>
                            </div>
                            <div>
                                <h3 class="font-semibold mb-2">{d.title}</h3>
                                <div class="space-y-1">
                                    {d.lines
                                        .iter()
                                        .map(|line| view! { <p class="text-muted-foreground text-sm">{*line}</p> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let cfg = use_config();
    let form = RwSignal::new(ContactForm::default());
    let (state, set_state) = signal(SubmissionState::Idle);

    let flow = StoredValue::new_local(ContactFlow::new(
        Rc::new(BrowserScheduler),
        Rc::new(use_toasts()),
        cfg.submit_delay_ms,
        move |s| set_state.set(s),
    ));

    let on_submit = move |e: ev::SubmitEvent| {
        e.prevent_default();
        let current = form.get_untracked();
        flow.with_value(|f| {
            if let Err(err) = f.submit(&current) {
                log::debug!("contact form not sent: {err}");
            }
        });
    };

    let send_another = move |_: ev::MouseEvent| {
        flow.with_value(|f| f.reset());
        form.update(ContactForm::clear);
    };

    let fields = move |pair: [FormField; 2]| {
        view! {
            <div class="grid md:grid-cols-2 gap-6">
                {pair.into_iter().map(|field| view! { <Field field=field form=form/> }).collect_view()}
            </div>
        }
    };

    let thank_you = move || {
        view! {
            <div class="text-center py-12">
                <div class="w-16 h-16 rounded-full bg-primary/10 flex items-center justify-center mx-auto mb-4">
                    <Icon glyph=Glyph::CheckCircle size=32 class="text-primary"/>
                </div>
                <h3 class="text-xl font-semibold mb-2">"Thank You!"</h3>
                <p class="text-muted-foreground mb-6">
                    "Your message has been sent successfully. We'll get back to you soon."
                </p>
                <button
                    class="inline-flex items-center rounded-md border border-border px-4 py-2 font-medium hover:bg-muted"
                    on:click=send_another
                >
                    "Send Another Message"
                </button>
            </div>
        }
    };

    let form_view = move || {
        view! {
            <form class="space-y-6" on:submit=on_submit>
                {fields([FormField::FirstName, FormField::LastName])}
                {fields([FormField::Email, FormField::Phone])}
                <Field field=FormField::Subject form=form/>
                <Field field=FormField::Message form=form/>
                <button
                    type="submit"
                    class="w-full inline-flex items-center justify-center rounded-md bg-gradient-primary text-primary-foreground px-8 py-3 font-semibold disabled:opacity-70"
                    disabled=move || state.get().is_submitting()
                >
                    <Show
                        when=move || state.get().is_submitting()
                        fallback=|| view! {
                            <span class="flex items-center gap-2">
                                "Send Message"
                                <Icon glyph=Glyph::Send size=18/>
                            </span>
                        }
                    >
                        <span class="flex items-center gap-2">
                            <span class="w-5 h-5 border-2 border-primary-foreground border-t-transparent rounded-full animate-spin"/>
                            "Sending..."
                        </span>
                    </Show>
                </button>
            </form>
        }
    };

    view! {
        <Title text="Contact Us | OCare"/>
        <PageIntro
            eyebrow="Contact Us"
            lead="We'd Love to "
            accent="Hear From You"
            blurb="Have questions about our products or need support? Our team is here to help. Reach out to us and we'll respond as soon as possible."
        />

        <section class="py-24 bg-background">
            <div class="container mx-auto px-4">
                <div class="grid lg:grid-cols-5 gap-12">
                    <Details/>
                    <div class="lg:col-span-3">
                        <div class="bg-card rounded-2xl p-8 shadow-card">
                            <h2 class="text-2xl font-bold mb-2">"Send Us a Message"</h2>
                            <p class="text-muted-foreground mb-8">
                                "Fill out the form below and we'll get back to you within 24 hours."
                            </p>
                            <Show when=move || state.get().is_submitted() fallback=form_view>
                                {thank_you()}
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </section>

        <section class="pb-24 bg-background">
            <div class="container mx-auto px-4">
                <div class="rounded-2xl overflow-hidden shadow-card">
                    <iframe
                        src=MAP_EMBED
                        width="100%"
                        height="400"
                        style="border:0"
                        allowfullscreen=true
                        referrerpolicy="no-referrer-when-downgrade"
                        title="OCare Location"
                        class="w-full"
                    />
                </div>
            </div>
        </section>
    }
}
