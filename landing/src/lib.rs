//! # xperts-landing
//!
//! Single-page site for the Xperts Global software agency, rendered
//! client-side with Leptos 0.8.
//!
//! The stateful bits are plain structs with explicit transitions, kept apart
//! from the view code so they can be tested without a browser:
//!
//! - [`scroll`] - active section, header opacity and progress rail
//! - [`contact`] - contact form rules and submission flow
//! - [`newsletter`] - footer signup flow
//! - [`carousel`] - testimonial rotation
//! - [`content`] - static copy, portfolio filtering
//!
//! [`sections`] holds the components, [`dom`] the few browser calls they need.
//!
//! ---
//!
//! Developed by the Xperts Global team (c)2025

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod dom;
pub mod error;
pub mod logging;
pub mod newsletter;
pub mod scroll;
pub mod sections;

pub use config::SiteConfig;
pub use error::{Result, SiteError};
