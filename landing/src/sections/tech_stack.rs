use leptos::prelude::*;

use crate::content::{TECHNOLOGIES, Technology, marquee_track};

#[component]
pub fn TechStack() -> impl IntoView {
    view! {
        <section id="tech-stack" class="tech-stack">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our " <span class="accent">"Technology Stack"</span></h2>
                    <p class="section-description">
                        "We work with cutting-edge technologies to deliver robust and scalable solutions"
                    </p>
                </div>

                // Desktop: endless marquee
                <div class="tech-marquee">
                    <div class="tech-track">
                        {marquee_track(TECHNOLOGIES)
                            .into_iter()
                            .map(|tech| view! { <TechTile tech=tech /> })
                            .collect_view()}
                    </div>
                </div>

                // Mobile/tablet: static grid
                <div class="tech-grid">
                    {TECHNOLOGIES.iter().map(|tech| view! { <TechTile tech=*tech /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TechTile(tech: Technology) -> impl IntoView {
    view! {
        <div class="tech-tile">
            <img src=tech.logo_url() alt=tech.name loading="lazy" />
            <span class="tech-name">{tech.name}</span>
        </div>
    }
}
