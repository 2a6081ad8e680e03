//! Site configuration.
//!
//! Timing and threshold knobs live in `site.toml`, which is embedded at
//! compile time. Every field has a default, so a partial file is fine; the
//! binary falls back to [`SiteConfig::default`] when the file is broken.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, SiteError};

/// Embedded copy of `landing/site.toml`.
pub const EMBEDDED_CONFIG: &str = include_str!("../site.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Max level forwarded to the browser console ("error" .. "trace")
    pub log_level: String,
    pub scroll: ScrollConfig,
    pub contact: FormTiming,
    pub newsletter: FormTiming,
    pub carousel: CarouselConfig,
}

/// Header scroll tracking.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Header turns opaque once `scrollY` exceeds this
    pub scrolled_threshold_px: f64,
    /// Fraction of the viewport height added to `scrollY` to get the reference point
    pub reference_fraction: f64,
}

/// Simulated submission delays for a form.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormTiming {
    pub submit_delay_ms: u64,
    pub success_reset_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            scroll: ScrollConfig::default(),
            contact: FormTiming {
                submit_delay_ms: 2000,
                success_reset_ms: 5000,
            },
            newsletter: FormTiming {
                submit_delay_ms: 1500,
                success_reset_ms: 3000,
            },
            carousel: CarouselConfig::default(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold_px: 20.0,
            reference_fraction: 1.0 / 3.0,
        }
    }
}

impl Default for FormTiming {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            success_reset_ms: 5000,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
        }
    }
}

impl FormTiming {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }
}

impl CarouselConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| SiteError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse the embedded `site.toml`.
    pub fn load() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    /// Level filter for the console subscriber. Unknown names mean `INFO`.
    pub fn level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    fn validate(&self) -> Result<()> {
        let fraction = self.scroll.reference_fraction;
        if !(0.0..=1.0).contains(&fraction) {
            return Err(SiteError::Config(format!(
                "scroll.reference_fraction must be within [0, 1], got {fraction}"
            )));
        }
        if !self.scroll.scrolled_threshold_px.is_finite() || self.scroll.scrolled_threshold_px < 0.0 {
            return Err(SiteError::Config(
                "scroll.scrolled_threshold_px must be a non-negative number".into(),
            ));
        }

        let durations = [
            ("contact.submit_delay_ms", self.contact.submit_delay_ms),
            ("contact.success_reset_ms", self.contact.success_reset_ms),
            ("newsletter.submit_delay_ms", self.newsletter.submit_delay_ms),
            ("newsletter.success_reset_ms", self.newsletter.success_reset_ms),
            ("carousel.autoplay_interval_ms", self.carousel.autoplay_interval_ms),
        ];
        if let Some((name, _)) = durations.iter().find(|(_, ms)| *ms == 0) {
            return Err(SiteError::Config(format!("{name} must be greater than zero")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_matches_defaults() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [carousel]
            autoplay_interval_ms = 8000
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.autoplay_interval(), Duration::from_secs(8));
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(2000));
        assert_eq!(config.newsletter.success_reset(), Duration::from_millis(3000));
    }

    #[test]
    fn rejects_out_of_range_fraction() {
        let err = SiteConfig::from_toml_str("[scroll]\nreference_fraction = 1.5\n").unwrap_err();
        assert!(matches!(err, SiteError::Config(msg) if msg.contains("reference_fraction")));
    }

    #[test]
    fn rejects_zero_durations() {
        let err = SiteConfig::from_toml_str("[contact]\nsubmit_delay_ms = 0\n").unwrap_err();
        assert_eq!(
            err,
            SiteError::Config("contact.submit_delay_ms must be greater than zero".into())
        );
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(SiteConfig::from_toml_str("[scroll]\nthreshold = 3\n").is_err());
    }

    #[test]
    fn level_parsing() {
        let mut config = SiteConfig::default();
        assert_eq!(config.level(), tracing::Level::INFO);
        config.log_level = "debug".into();
        assert_eq!(config.level(), tracing::Level::DEBUG);
        config.log_level = "chatty".into();
        assert_eq!(config.level(), tracing::Level::INFO);
    }
}
