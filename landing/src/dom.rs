//! Browser access: window geometry, section measurement, in-page navigation.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::config::ScrollConfig;
use crate::error::{Result, SiteError};
use crate::scroll::{self, ScrollMetrics, ScrollState, SectionBounds};

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or(SiteError::Dom("window"))
}

fn document() -> Result<web_sys::Document> {
    window()?.document().ok_or(SiteError::Dom("document"))
}

pub fn scroll_metrics() -> Result<ScrollMetrics> {
    let window = window()?;
    let scroll_y = window
        .scroll_y()
        .map_err(|_| SiteError::Dom("window.scrollY"))?;
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .ok_or(SiteError::Dom("window.innerHeight"))?;
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(viewport_height);

    Ok(ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height,
    })
}

/// Measure each section in document coordinates. Ids with no element are skipped.
pub fn measure_sections(ids: &[&'static str], scroll_y: f64) -> Result<Vec<SectionBounds>> {
    let document = document()?;
    Ok(ids
        .iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id,
                top: rect.top() + scroll_y,
                height: rect.height(),
            })
        })
        .collect())
}

/// Read the window and recompute the header state.
pub fn sample_scroll_state(nav_ids: &[&'static str], config: &ScrollConfig) -> Result<ScrollState> {
    let metrics = scroll_metrics()?;
    let sections = measure_sections(nav_ids, metrics.scroll_y)?;
    Ok(scroll::track(nav_ids, &sections, &metrics, config))
}

/// Smooth-scroll `#id` into view. Returns `false` when the section is not rendered.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = document().ok().and_then(|d| d.get_element_by_id(id)) else {
        tracing::warn!("scroll target #{id} not found");
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
