use leptos::prelude::*;

use crate::content::{CONTACT_SECTION, SERVICES, Service};
use crate::dom;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our " <span class="accent">"Services"</span></h2>
                    <p class="section-description">
                        "We offer comprehensive technology solutions to help your business thrive in the digital age"
                    </p>
                </div>
                <div class="card-grid three">
                    {SERVICES
                        .iter()
                        .map(|service| view! { <ServiceCard service=*service cta="Learn More →" /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Card shared by the services and specialized grids. The CTA scrolls to the contact form.
#[component]
pub(super) fn ServiceCard(service: Service, cta: &'static str) -> impl IntoView {
    view! {
        <article class=format!("service-card {}", service.accent.class())>
            <div class="service-icon">{service.icon}</div>
            <h3 class="service-title">{service.title}</h3>
            <p class="service-description">{service.description}</p>
            <button
                class="service-cta"
                on:click=move |_| {
                    dom::scroll_to_section(CONTACT_SECTION);
                }
            >
                {cta}
            </button>
        </article>
    }
}
