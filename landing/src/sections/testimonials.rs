use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;

use super::site_config;
use crate::carousel::Carousel;
use crate::content::TESTIMONIALS;

#[component]
pub fn Testimonials() -> impl IntoView {
    let interval = site_config().carousel.autoplay_interval();
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));

    autoplay(carousel, carousel.with_untracked(Carousel::epoch), interval);

    let resume = move |_: ev::MouseEvent| {
        if carousel.try_update(|c| c.set_hovered(false)) == Some(true) {
            autoplay(carousel, carousel.with_untracked(Carousel::epoch), interval);
        }
    };

    let current = move || {
        TESTIMONIALS.get(carousel.with(Carousel::index)).map(|t| {
            view! {
                <article class="testimonial-card slide-in">
                    <img class="testimonial-avatar" src=t.avatar alt=t.name loading="lazy" />
                    <div class="testimonial-stars">{t.stars()}</div>
                    <blockquote class="testimonial-quote">"\u{201c}" {t.quote} "\u{201d}"</blockquote>
                    <div class="testimonial-name">{t.name}</div>
                    <div class="testimonial-role">{format!("{} at {}", t.position, t.company)}</div>
                </article>
            }
        })
    };

    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What Our " <span class="accent">"Clients Say"</span></h2>
                    <p class="section-description">
                        "Don't just take our word for it - hear from the businesses we've helped transform"
                    </p>
                </div>

                <div
                    class="carousel"
                    on:mouseenter=move |_| {
                        carousel.update(|c| {
                            c.set_hovered(true);
                        })
                    }
                    on:mouseleave=resume
                >
                    {current}
                    <button
                        class="carousel-nav prev"
                        aria-label="Previous testimonial"
                        on:click=move |_| carousel.update(Carousel::prev)
                    >
                        "‹"
                    </button>
                    <button
                        class="carousel-nav next"
                        aria-label="Next testimonial"
                        on:click=move |_| carousel.update(Carousel::next)
                    >
                        "›"
                    </button>
                </div>

                <div class="carousel-dots">
                    {(0..TESTIMONIALS.len())
                        .map(|index| {
                            view! {
                                <button
                                    class=move || {
                                        if carousel.with(|c| c.index() == index) { "dot active" } else { "dot" }
                                    }
                                    aria-label=format!("Go to testimonial {}", index + 1)
                                    on:click=move |_| carousel.update(|c| c.go_to(index))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Advance every `interval` until `epoch` goes stale or the carousel is disposed.
fn autoplay(carousel: RwSignal<Carousel>, epoch: u64, interval: Duration) {
    set_timeout(
        move || {
            if carousel.try_update(|c| c.tick(epoch)) == Some(true) {
                autoplay(carousel, epoch, interval);
            }
        },
        interval,
    );
}
