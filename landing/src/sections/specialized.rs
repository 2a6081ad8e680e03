use leptos::prelude::*;

use super::services::ServiceCard;
use crate::content::SPECIALIZED_SERVICES;

#[component]
pub fn SpecializedServices() -> impl IntoView {
    view! {
        <section id="specialized-services" class="specialized">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title"><span class="accent">"Specialized"</span> " Solutions"</h2>
                    <p class="section-description">
                        "Expert implementation and customization of industry-leading platforms and frameworks"
                    </p>
                </div>
                <div class="card-grid two">
                    {SPECIALIZED_SERVICES
                        .iter()
                        .map(|service| view! { <ServiceCard service=*service cta="Contact Us" /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
