//! Core data types.
//!
//! - [`Snapshot`] and its element/enrichment records (input)
//! - [`Issue`] and [`Severity`] (output)

mod issue;
mod lenient;
mod snapshot;

pub use issue::{
    category, filter_min_severity, group_issues_by_category, Issue, IssueGroup, IssueSummary,
    Severity,
};
pub use snapshot::{
    truncate, BodyVisibility, Dimensions, DomStats, Element, ElementSet, HeroCandidate, Overlay,
    Snapshot, ThirdPartyResource,
};
