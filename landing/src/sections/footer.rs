use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::site_config;
use crate::content::{FOOTER_LINKS, FOOTER_SERVICES, OPERATIONS_EMAIL, OPERATIONS_PHONE, SOCIAL_LINKS};
use crate::dom;
use crate::newsletter::{NewsletterFlow, SignupPhase};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-title">"DevAgency"</span>
                        <p class="footer-about">
                            "We're a leading software development agency specializing in custom solutions, "
                            "SaaS platforms, and digital transformation for businesses worldwide."
                        </p>
                        <div class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a href=link.href class="social-link" aria-label=link.label>
                                            {link.label.chars().next().unwrap_or('?').to_string()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="footer-column">
                        <h4>"Quick Links"</h4>
                        <ul>
                            {FOOTER_LINKS
                                .iter()
                                .map(|item| {
                                    let id = item.id;
                                    view! {
                                        <li>
                                            <button
                                                class="footer-link"
                                                on:click=move |_| {
                                                    dom::scroll_to_section(id);
                                                }
                                            >
                                                {item.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>"Services"</h4>
                        <ul>
                            {FOOTER_SERVICES.iter().map(|name| view! { <li class="footer-text">{*name}</li> }).collect_view()}
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>"Contact Info"</h4>
                        <ul>
                            <li>
                                <a class="footer-link" href=format!("mailto:{OPERATIONS_EMAIL}")>{OPERATIONS_EMAIL}</a>
                            </li>
                            <li>
                                <a class="footer-link" href=format!("tel:{OPERATIONS_PHONE}")>{OPERATIONS_PHONE}</a>
                            </li>
                        </ul>
                    </div>
                </div>

                <Newsletter />

                <div class="footer-bottom">
                    <p class="footer-copyright">"© 2025 DevAgency. All rights reserved."</p>
                    <div class="footer-legal">
                        <a href="#" class="footer-link">"Privacy Policy"</a>
                        <a href="#" class="footer-link">"Terms of Service"</a>
                        <a href="#" class="footer-link">"Cookie Policy"</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    let timing = site_config().newsletter;
    let flow = RwSignal::new(NewsletterFlow::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if flow.try_update(NewsletterFlow::submit).flatten().is_none() {
            return;
        }
        set_timeout(
            move || {
                flow.update(NewsletterFlow::subscribed);
                set_timeout(move || flow.update(NewsletterFlow::reset), timing.success_reset());
            },
            timing.submit_delay(),
        );
    };

    let phase = move || flow.with(NewsletterFlow::phase);

    view! {
        <div class="newsletter">
            <div class="newsletter-copy">
                <h4>"Stay Updated"</h4>
                <p>"Subscribe to our newsletter for the latest tech insights and company updates."</p>
            </div>
            <form class="newsletter-form" on:submit=on_submit novalidate=true>
                <input
                    type="email"
                    class="input"
                    placeholder="Enter your email"
                    prop:value=move || flow.with(|f| f.email.clone())
                    on:input=move |ev| flow.update(|f| f.set_email(event_target_value(&ev)))
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || phase() != SignupPhase::Idle
                >
                    {move || match phase() {
                        SignupPhase::Submitting => "Subscribing...",
                        _ => "Subscribe",
                    }}
                </button>
            </form>
            {move || flow.with(NewsletterFlow::error).map(|msg| view! { <p class="field-error">{msg}</p> })}
            <Show when=move || phase() == SignupPhase::Subscribed>
                <p class="newsletter-success pop-in">"Successfully subscribed!"</p>
            </Show>
        </div>
    }
}
