use leptos::prelude::*;

use crate::content::{CONTACT_SECTION, PROJECTS, PortfolioFilter, Project, filter_projects};
use crate::dom;

#[component]
pub fn Portfolio() -> impl IntoView {
    let (filter, set_filter) = signal(PortfolioFilter::All);

    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our " <span class="accent">"Portfolio"</span></h2>
                    <p class="section-description">
                        "Explore our recent projects and see how we've helped businesses transform their digital presence"
                    </p>
                </div>

                <div class="filter-bar">
                    {PortfolioFilter::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == option { "btn btn-primary" } else { "btn btn-outline" }
                                    }
                                    on:click=move |_| set_filter.set(option)
                                >
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="card-grid three">
                    {move || {
                        filter_projects(filter.get(), PROJECTS)
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project /> })
                            .collect_view()
                    }}
                </div>

                <div class="cta-panel">
                    <h3>"Ready to Start Your Project?"</h3>
                    <p>
                        "Let's discuss your ideas and create something amazing together. "
                        "Our team is ready to bring your vision to life."
                    </p>
                    <button
                        class="btn btn-primary btn-lg"
                        on:click=move |_| {
                            dom::scroll_to_section(CONTACT_SECTION);
                        }
                    >
                        "Start Your Project"
                    </button>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article class="project-card pop-in">
            <div class="project-media">
                <img src=project.image alt=project.title loading="lazy" />
                <div class="project-links">
                    <a href=project.live_url aria-label="View live project">"↗"</a>
                    <a href=project.source_url aria-label="View source code">"{ }"</a>
                </div>
            </div>
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="badges">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="badge">{*tech}</span> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
