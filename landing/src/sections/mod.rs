// Page sections, top to bottom
// Developed by the Xperts Global team (c)2025

mod contact;
mod footer;
mod header;
mod hero;
mod portfolio;
mod services;
mod specialized;
mod tech_stack;
mod testimonials;

pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use portfolio::Portfolio;
pub use services::Services;
pub use specialized::SpecializedServices;
pub use tech_stack::TechStack;
pub use testimonials::Testimonials;

use crate::config::SiteConfig;
use leptos::prelude::*;

/// Config provided by `App`, or defaults when rendered standalone.
pub(crate) fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
