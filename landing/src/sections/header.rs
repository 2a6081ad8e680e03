use leptos::ev;
use leptos::prelude::*;

use super::site_config;
use crate::content::{CONTACT_SECTION, NAV_ITEMS, nav_ids};
use crate::dom;
use crate::scroll::ScrollState;

/// Rail height in px; each nav item gets an equal slice.
const RAIL_HEIGHT: f64 = 384.0;

#[component]
pub fn Header() -> impl IntoView {
    let scroll_config = site_config().scroll;
    let (state, set_state) = signal(ScrollState::initial(&nav_ids()));
    let (menu_open, set_menu_open) = signal(false);

    let refresh = move || match dom::sample_scroll_state(&nav_ids(), &scroll_config) {
        Ok(next) => {
            if state.with_untracked(|s| s.active_section != next.active_section) {
                tracing::debug!(section = next.active_section, "active section changed");
            }
            set_state.set(next);
        }
        Err(e) => tracing::warn!("{e}"),
    };

    // once after mount, then on every scroll
    Effect::new(move || refresh());
    let listener = window_event_listener(ev::scroll, move |_| refresh());
    on_cleanup(move || listener.remove());

    let go_to = move |id: &'static str| {
        if dom::scroll_to_section(id) {
            set_menu_open.set(false);
        }
    };

    let is_active = move |id: &'static str| state.with(|s| s.active_section == id);

    view! {
        <ProgressRail state=state />

        <header class=move || {
            if state.with(|s| s.is_scrolled) { "site-header scrolled" } else { "site-header" }
        }>
            <div class="container header-inner">
                <button class="brand" on:click=move |_| go_to("hero")>
                    <img src="assets/logo.png" alt="Xperts Global Logo" class="brand-logo" />
                </button>

                <nav class="desktop-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <button
                                    class=move || if is_active(id) { "nav-link active" } else { "nav-link" }
                                    on:click=move |_| go_to(id)
                                >
                                    {item.label}
                                    <Show when=move || is_active(id)>
                                        <span class="nav-underline"></span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="header-actions">
                    <button class="btn btn-primary quote-btn" on:click=move |_| go_to(CONTACT_SECTION)>
                        "Get Quote"
                    </button>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle mobile menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    <nav class="container mobile-nav">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let id = item.id;
                                view! {
                                    <button
                                        class=move || if is_active(id) { "mobile-link active" } else { "mobile-link" }
                                        on:click=move |_| go_to(id)
                                    >
                                        {item.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button class="btn btn-primary mobile-quote" on:click=move |_| go_to(CONTACT_SECTION)>
                            "Get Quote"
                        </button>
                    </nav>
                </div>
            </Show>
        </header>
    }
}

/// Fixed side rail: one fill segment and one dot per section.
#[component]
fn ProgressRail(state: ReadSignal<ScrollState>) -> impl IntoView {
    let slice = RAIL_HEIGHT / NAV_ITEMS.len() as f64;

    view! {
        <div class="progress-rail" aria-hidden="true">
            <div class="rail-track"></div>
            {NAV_ITEMS
                .iter()
                .enumerate()
                .map(|(index, _)| {
                    let style = move || {
                        let progress = state.with(|s| s.section_progress.get(index).copied().unwrap_or(0.0));
                        format!("top: {}px; height: {}px;", index as f64 * slice, progress / 100.0 * slice)
                    };
                    view! { <div class="rail-fill" style=style></div> }
                })
                .collect_view()}
            <div class="rail-dots">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        let id = item.id;
                        view! {
                            <button
                                class=move || {
                                    if state.with(|s| s.active_section == id) { "rail-dot active" } else { "rail-dot" }
                                }
                                on:click=move |_| {
                                    dom::scroll_to_section(id);
                                }
                            >
                                <span class="rail-label">{item.label}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
