//! Scroll tracking for the fixed header and the side progress rail.
//!
//! Pure functions over measured geometry. The browser side (reading
//! `scrollY`, measuring sections) lives in [`crate::dom`]; everything here
//! can be exercised without a window.

use crate::config::ScrollConfig;

/// Window scroll geometry, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

/// Vertical extent of a rendered page section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: &'static str,
    pub top: f64,
    pub height: f64,
}

/// Snapshot consumed by the header on each render.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub is_scrolled: bool,
    pub active_section: &'static str,
    /// Index of `active_section` in the nav order
    pub active_index: usize,
    /// Percent of each nav section traversed, in nav order
    pub section_progress: Vec<f64>,
    /// Percent of the whole scrollable height traversed
    pub page_progress: f64,
}

impl ScrollState {
    /// State before anything has been measured: top of the page, first section active.
    pub fn initial(nav_ids: &[&'static str]) -> Self {
        Self {
            is_scrolled: false,
            active_section: nav_ids.first().copied().unwrap_or_default(),
            active_index: 0,
            section_progress: vec![0.0; nav_ids.len()],
            page_progress: 0.0,
        }
    }
}

/// Point compared against section tops to decide which one is in view.
pub fn reference_point(metrics: &ScrollMetrics, config: &ScrollConfig) -> f64 {
    metrics.scroll_y + metrics.viewport_height * config.reference_fraction
}

/// Section whose `[top, next.top)` range contains `reference`.
///
/// `sections` must be in page order; sections missing from the DOM are simply
/// absent from the slice. The last section is open-ended.
pub fn active_section<'a>(sections: &'a [SectionBounds], reference: f64) -> Option<&'a SectionBounds> {
    sections.iter().enumerate().find_map(|(i, section)| {
        let below_next = sections.get(i + 1).is_none_or(|next| reference < next.top);
        (reference >= section.top && below_next).then_some(section)
    })
}

/// Percent of a single section scrolled past, clamped to `[0, 100]`.
pub fn progress_within(section: &SectionBounds, scroll_y: f64) -> f64 {
    if section.height <= 0.0 {
        return 0.0;
    }
    let scrolled = (scroll_y - section.top).max(0.0);
    (scrolled / section.height * 100.0).min(100.0)
}

/// Percent of the scrollable document traversed.
pub fn page_progress(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.document_height - metrics.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Recompute the full header state.
///
/// `nav_ids` is the nav order and always wins for indexing; `sections` holds
/// whatever could be measured. Falls back to the first nav id when the
/// reference point is above every measured section.
pub fn track(
    nav_ids: &[&'static str],
    sections: &[SectionBounds],
    metrics: &ScrollMetrics,
    config: &ScrollConfig,
) -> ScrollState {
    let reference = reference_point(metrics, config);
    let active = active_section(sections, reference);
    let active_id = active
        .map(|s| s.id)
        .or_else(|| nav_ids.first().copied())
        .unwrap_or_default();
    let active_index = nav_ids.iter().position(|id| *id == active_id).unwrap_or(0);

    let section_progress = nav_ids
        .iter()
        .enumerate()
        .map(|(i, id)| match i.cmp(&active_index) {
            std::cmp::Ordering::Less => 100.0,
            std::cmp::Ordering::Greater => 0.0,
            std::cmp::Ordering::Equal => sections
                .iter()
                .find(|s| s.id == *id)
                .map(|s| progress_within(s, metrics.scroll_y))
                .unwrap_or(0.0),
        })
        .collect();

    ScrollState {
        is_scrolled: metrics.scroll_y > config.scrolled_threshold_px,
        active_section: active_id,
        active_index,
        section_progress,
        page_progress: page_progress(metrics),
    }
}
