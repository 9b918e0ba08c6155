//! Rule-based analysis engine.
//!
//! Two pure entry points sit on top of a fixed battery of detectors:
//! - [`analyze_page`] / [`PageAnalyzer`] inspect one [`Snapshot`]
//! - [`compare_snapshots`] / [`SnapshotComparator`] look for drift across a
//!   session of snapshots
//!
//! Every detector is total: absent optional data means it contributes nothing.
//! Output order is detector declaration order, then element order.

mod accessibility;
mod cross_page;
mod grouping;
mod media;
mod page;
mod rendering;
mod resources;
mod routes;
mod thresholds;
mod urls;

#[cfg(test)]
mod tests;

pub use grouping::{
    distinct_in_order, distinct_style_values, group_by_style, style_signature, StyleGroup,
    StyleGroups, BUTTON_STYLE_KEYS, INPUT_STYLE_KEYS, MISSING_STYLE_TOKEN, SKELETON_STYLE_KEYS,
};
pub use thresholds::{Thresholds, TRACKING_PARAMS};
pub use urls::normalize_url;

use crate::types::{Issue, Snapshot};

type PageDetector = fn(&Snapshot, &Thresholds) -> Vec<Issue>;
type SessionDetector = fn(&[Snapshot], &Thresholds) -> Vec<Issue>;

const PAGE_DETECTORS: [PageDetector; 13] = [
    page::button_issues,
    page::input_issues,
    page::heading_issues,
    page::link_issues,
    media::alt_text_issues,
    media::lazy_above_fold_issues,
    media::hero_image_issues,
    media::background_hero_issues,
    rendering::render_blocking_issues,
    rendering::skeleton_issues,
    accessibility::tap_target_issues,
    accessibility::role_button_issues,
    rendering::third_party_issues,
];

const SESSION_DETECTORS: [SessionDetector; 10] = [
    cross_page::style_drift_issues,
    cross_page::heading_drift_issues,
    cross_page::font_family_issues,
    routes::stale_metadata_issues,
    routes::duplicate_url_issues,
    routes::duplicate_content_issues,
    resources::third_party_drift_issues,
    resources::dom_bloat_issues,
    cross_page::skeleton_drift_issues,
    cross_page::tap_target_drift_issues,
];

/// Single-page analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageAnalyzer {
    pub thresholds: Thresholds,
}

impl PageAnalyzer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn analyze(&self, snapshot: &Snapshot) -> Vec<Issue> {
        PAGE_DETECTORS
            .iter()
            .flat_map(|detect| detect(snapshot, &self.thresholds))
            .collect()
    }
}

/// Cross-page comparator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapshotComparator {
    pub thresholds: Thresholds,
}

impl SnapshotComparator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Needs at least two snapshots; otherwise there is nothing to compare.
    pub fn compare(&self, snapshots: &[Snapshot]) -> Vec<Issue> {
        if snapshots.len() < 2 {
            return Vec::new();
        }
        SESSION_DETECTORS
            .iter()
            .flat_map(|detect| detect(snapshots, &self.thresholds))
            .collect()
    }
}

/// Analyze one snapshot with the default thresholds.
pub fn analyze_page(snapshot: &Snapshot) -> Vec<Issue> {
    PageAnalyzer::default().analyze(snapshot)
}

/// Compare a session of snapshots with the default thresholds.
pub fn compare_snapshots(snapshots: &[Snapshot]) -> Vec<Issue> {
    SnapshotComparator::default().compare(snapshots)
}

/// Pixel value without a trailing `.0` for whole numbers.
fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Page issues for every snapshot, in input order, plus the session issues.
///
/// The two lists are kept apart; callers that want one list concatenate them.
pub fn audit_snapshots(
    snapshots: &[Snapshot],
    thresholds: Thresholds,
) -> (Vec<Vec<Issue>>, Vec<Issue>) {
    let analyzer = PageAnalyzer::new(thresholds);
    let pages = snapshots.iter().map(|s| analyzer.analyze(s)).collect();
    let session = SnapshotComparator::new(thresholds).compare(snapshots);
    (pages, session)
}
