//! Error types for the site.
//!
//! Form validation failures are not errors here: they are
//! [`FieldErrors`](crate::contact::FieldErrors) rendered inline next to each
//! input. `SiteError` covers the things that can actually go wrong while the
//! page runs.

use thiserror::Error;

/// Errors raised by configuration loading, DOM access and (simulated) delivery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    /// `site.toml` could not be parsed or holds an out-of-range value
    #[error("invalid site config: {0}")]
    Config(String),
    /// A browser API the page relies on is unavailable
    #[error("dom unavailable: {0}")]
    Dom(&'static str),
    /// A form message could not be handed off
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SiteError>;
