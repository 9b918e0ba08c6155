//! UI Consistency Checker (UCC) Library
//!
//! A rule engine that inspects structured snapshots of rendered web pages and
//! reports UI inconsistencies, accessibility gaps, performance smells and
//! routing anomalies. Snapshot extraction happens elsewhere; this crate only
//! reads the records it produces.
//!
//! # Module Overview
//!
//! - [`analyzer`] - Single-page detectors, cross-page detectors, style grouping
//! - [`types`] - Snapshot input records and the Issue/Severity model
//! - [`snapshot_loader`] - JSON/YAML snapshot files
//! - [`config`] - Configuration file support
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use ucc_lib::{analyze_page, compare_snapshots, load_snapshots, Severity};
//!
//! # fn example() -> ucc_lib::Result<()> {
//! let session = load_snapshots(std::path::Path::new("session.json"))?;
//! for snapshot in &session {
//!     for issue in analyze_page(snapshot) {
//!         if issue.severity == Severity::Error {
//!             println!("{}: {}", issue.category, issue.message);
//!         }
//!     }
//! }
//! let drift = compare_snapshots(&session);
//! println!("{} cross-page issues", drift.len());
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod output;
pub mod snapshot_loader;
pub mod types;

pub use analyzer::{
    analyze_page, audit_snapshots, compare_snapshots, group_by_style, normalize_url,
    style_signature, PageAnalyzer, SnapshotComparator, StyleGroup, StyleGroups, Thresholds,
};
pub use config::{Config, ReportConfig};
pub use error::{Result, UccError};
pub use output::{
    summarize_issues, AnalyzeOutput, AuditOutput, CompareOutput, ErrorOutput, PageReport,
    SessionSection, UccOutput, UCC_OUTPUT_VERSION,
};
pub use snapshot_loader::{load_snapshots, load_sources, parse_snapshots, SnapshotFormat};
pub use types::{
    category, filter_min_severity, group_issues_by_category, Element, ElementSet, Issue,
    IssueGroup, IssueSummary, Severity, Snapshot,
};
