// Xperts Global site — Leptos 0.8 Edition
// Developed by the Xperts Global team (c)2025

use leptos::prelude::*;
use xperts_landing::SiteConfig;
use xperts_landing::logging;
use xperts_landing::sections::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = SiteConfig::load();
    let config = loaded.clone().unwrap_or_default();
    logging::init(config.level());
    if let Err(e) = loaded {
        tracing::warn!("{e}; using built-in defaults");
    }
    tracing::info!("mounting site");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Header />
        <main>
            <Hero />
            <Services />
            <TechStack />
            <SpecializedServices />
            <Portfolio />
            <Testimonials />
            <Contact />
        </main>
        <Footer />
    }
}
