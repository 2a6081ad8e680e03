use leptos::prelude::*;

use crate::content::{CONTACT_SECTION, HERO_STATS};
use crate::dom;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-inner">
                <h1 class="hero-title fade-up">
                    "Your Partner for "
                    <span class="hero-title-accent">"Business Solutions"</span>
                </h1>
                <p class="hero-description fade-up delay-1">
                    "We transform your ideas into powerful digital solutions. From custom "
                    "software development to comprehensive business automation, we "
                    "deliver excellence at every step."
                </p>
                <div class="hero-actions fade-up delay-2">
                    <button
                        class="btn btn-primary btn-lg"
                        on:click=move |_| {
                            dom::scroll_to_section(CONTACT_SECTION);
                        }
                    >
                        "Start Your Project →"
                    </button>
                    <button
                        class="btn btn-secondary btn-lg"
                        on:click=move |_| {
                            dom::scroll_to_section("services");
                        }
                    >
                        "▶ Explore Services"
                    </button>
                </div>
                <div class="hero-stats fade-up delay-3">
                    {HERO_STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="hero-stat">
                                    <div class="hero-stat-value">{stat.value}</div>
                                    <div class="hero-stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
