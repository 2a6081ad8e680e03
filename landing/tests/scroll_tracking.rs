use pretty_assertions::assert_eq;
use xperts_landing::SiteConfig;
use xperts_landing::content::nav_ids;
use xperts_landing::scroll::{ScrollMetrics, ScrollState, SectionBounds, track};

const VIEWPORT: f64 = 900.0;
const SECTION_HEIGHT: f64 = 1000.0;

/// Every nav section stacked back to back, each `SECTION_HEIGHT` tall.
fn stacked_page() -> Vec<SectionBounds> {
    nav_ids()
        .into_iter()
        .enumerate()
        .map(|(i, id)| SectionBounds {
            id,
            top: i as f64 * SECTION_HEIGHT,
            height: SECTION_HEIGHT,
        })
        .collect()
}

fn at(scroll_y: f64) -> ScrollState {
    let ids = nav_ids();
    let metrics = ScrollMetrics {
        scroll_y,
        viewport_height: VIEWPORT,
        document_height: ids.len() as f64 * SECTION_HEIGHT,
    };
    track(&ids, &stacked_page(), &metrics, &SiteConfig::default().scroll)
}

#[test]
fn top_of_page_matches_initial_state() {
    assert_eq!(at(0.0), ScrollState::initial(&nav_ids()));
}

#[test]
fn active_section_follows_the_reference_point() {
    // reference = scroll_y + 300
    assert_eq!(at(650.0).active_section, "hero");
    assert_eq!(at(700.0).active_section, "services");
    assert_eq!(at(2750.0).active_section, "specialized-services");
    assert_eq!(at(6000.0).active_section, "contact");
}

#[test]
fn progress_is_monotonic_while_scrolling_down() {
    let mut previous = at(0.0);
    for step in 1..=60 {
        let next = at(f64::from(step) * 100.0);
        assert!(next.active_index >= previous.active_index);
        assert!(next.page_progress >= previous.page_progress);
        for (i, pct) in next.section_progress.iter().enumerate() {
            assert!((0.0..=100.0).contains(pct), "section {i} at {pct}");
            if i < next.active_index {
                assert_eq!(*pct, 100.0);
            }
            if i > next.active_index {
                assert_eq!(*pct, 0.0);
            }
        }
        previous = next;
    }
}

#[test]
fn header_turns_opaque_past_threshold() {
    assert!(!at(20.0).is_scrolled);
    assert!(at(21.0).is_scrolled);
}

#[test]
fn embedded_config_matches_defaults() {
    let loaded = SiteConfig::load().expect("embedded site.toml should parse");
    assert_eq!(loaded, SiteConfig::default());
}
