use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::site_config;
use crate::contact::{self, Budget, ContactFlow, Field, Timeline};
use crate::content::{CONTACT_CHANNELS, CONTACT_SECTION};
use crate::dom;

#[component]
pub fn Contact() -> impl IntoView {
    let timing = site_config().contact;
    let flow = RwSignal::new(ContactFlow::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = flow.try_update(ContactFlow::submit).flatten() else {
            return;
        };
        set_timeout(
            move || {
                flow.update(|f| f.delivered(contact::deliver(&request)));
                if flow.with_untracked(ContactFlow::is_submitted) {
                    set_timeout(move || flow.update(ContactFlow::reset), timing.success_reset());
                }
            },
            timing.submit_delay(),
        );
    };

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Let's " <span class="accent">"Work Together"</span></h2>
                    <p class="section-description">
                        "Ready to transform your business? Get in touch and let's discuss your project requirements"
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="card contact-card">
                        <h3 class="card-title">
                            {move || {
                                if flow.with(ContactFlow::is_submitted) {
                                    "✓ Message Sent Successfully!"
                                } else {
                                    "Send us a message"
                                }
                            }}
                        </h3>
                        <Show
                            when=move || flow.with(ContactFlow::is_submitted)
                            fallback=move || {
                                view! {
                                    <form class="contact-form" on:submit=on_submit novalidate=true>
                                        <div class="form-row">
                                            <TextField flow=flow field=Field::Name placeholder="Your Name *" />
                                            <TextField flow=flow field=Field::Email placeholder="Email Address *" kind="email" />
                                        </div>
                                        <div class="form-row">
                                            <TextField flow=flow field=Field::Phone placeholder="Phone Number *" kind="tel" />
                                            <TextField flow=flow field=Field::Company placeholder="Company (Optional)" />
                                        </div>
                                        <div class="form-field">
                                            <textarea
                                                rows="4"
                                                placeholder="Project Requirements *"
                                                class=move || input_class(flow, Field::Requirements)
                                                prop:value=move || flow.with(|f| f.data.requirements.clone())
                                                on:input=move |ev| {
                                                    flow.update(|f| f.edit(Field::Requirements, event_target_value(&ev)))
                                                }
                                            ></textarea>
                                            <FieldError flow=flow field=Field::Requirements />
                                        </div>
                                        <div class="form-row">
                                            <SelectField
                                                flow=flow
                                                field=Field::Budget
                                                placeholder="Budget Range *"
                                                options=Budget::ALL.iter().map(|b| (b.value(), b.label())).collect()
                                            />
                                            <SelectField
                                                flow=flow
                                                field=Field::Timeline
                                                placeholder="Timeline *"
                                                options=Timeline::ALL.iter().map(|t| (t.value(), t.label())).collect()
                                            />
                                        </div>
                                        {move || flow.with(ContactFlow::failure).map(|msg| view! { <p class="form-failure">{msg}</p> })}
                                        <button
                                            type="submit"
                                            class="btn btn-primary btn-block"
                                            disabled=move || !flow.with(ContactFlow::can_submit)
                                        >
                                            {move || if flow.with(ContactFlow::is_submitting) { "Sending..." } else { "Send Message" }}
                                        </button>
                                    </form>
                                }
                            }
                        >
                            <div class="form-success pop-in">
                                <div class="success-badge">"✓"</div>
                                <p>"Thank you for your message! We'll get back to you within 24 hours."</p>
                            </div>
                        </Show>
                    </div>

                    <div class="contact-info">
                        <h3>"Get in Touch"</h3>
                        <p class="contact-lead">
                            "We're here to help bring your ideas to life. Contact us through any of the channels below, "
                            "and our team will get back to you promptly."
                        </p>
                        <div class="channel-grid">
                            {CONTACT_CHANNELS
                                .iter()
                                .map(|channel| {
                                    view! {
                                        <div class=format!("channel {}", channel.accent.class())>
                                            <div class="channel-icon">{channel.icon}</div>
                                            <div>
                                                <h4>{channel.title}</h4>
                                                <p>{channel.info}</p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="cta-panel">
                            <h4>"Ready to Start Your Project?"</h4>
                            <p>"Schedule a free consultation call to discuss your requirements and get a custom quote."</p>
                            <button
                                class="btn btn-primary"
                                on:click=move |_| {
                                    dom::scroll_to_section(CONTACT_SECTION);
                                }
                            >
                                "Schedule Free Consultation"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn input_class(flow: RwSignal<ContactFlow>, field: Field) -> &'static str {
    if flow.with(|f| f.errors().get(field).is_some()) { "input invalid" } else { "input" }
}

#[component]
fn TextField(
    flow: RwSignal<ContactFlow>,
    field: Field,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <input
                type=kind
                name=field.to_string()
                placeholder=placeholder
                class=move || input_class(flow, field)
                prop:value=move || flow.with(|f| f.data.get(field).to_owned())
                on:input=move |ev| flow.update(|f| f.edit(field, event_target_value(&ev)))
            />
            <FieldError flow=flow field=field />
        </div>
    }
}

#[component]
fn SelectField(
    flow: RwSignal<ContactFlow>,
    field: Field,
    placeholder: &'static str,
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <select
                name=field.to_string()
                class=move || input_class(flow, field)
                prop:value=move || flow.with(|f| f.data.get(field).to_owned())
                on:change=move |ev| flow.update(|f| f.edit(field, event_target_value(&ev)))
            >
                <option value="" disabled=true>{placeholder}</option>
                {options
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
            <FieldError flow=flow field=field />
        </div>
    }
}

#[component]
fn FieldError(flow: RwSignal<ContactFlow>, field: Field) -> impl IntoView {
    move || {
        flow.with(|f| f.errors().get(field))
            .map(|msg| view! { <p class="field-error">{msg}</p> })
    }
}
