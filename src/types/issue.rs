//! Issue records emitted by the analyzers.
//!
//! An [`Issue`] never points back at an element or snapshot; it only carries
//! strings derived from them, so issue lists can outlive their inputs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency of an issue, ordered `Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Severity::Info => "info",
                Severity::Warning => "warning",
                Severity::Error => "error",
            }
        )
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// Category labels. They double as dispatch keys for consumers, so they stay
/// stable: plain nouns for page checks, `<Noun>: <Topic>` for specialized page
/// checks and `Cross-Page: <Topic>` for session-wide checks.
pub mod category {
    pub const BUTTONS: &str = "Buttons";
    pub const INPUTS: &str = "Inputs";
    pub const HEADINGS: &str = "Headings";
    pub const LINKS: &str = "Links";
    pub const IMAGES: &str = "Images";
    pub const IMAGE_PERFORMANCE: &str = "Images: Performance";
    pub const RENDERING: &str = "Rendering";
    pub const LOADING_STATES: &str = "Loading States";
    pub const TAP_TARGETS: &str = "Accessibility: Tap Targets";
    pub const ACCESSIBILITY: &str = "Accessibility";
    pub const THIRD_PARTIES: &str = "Performance: Third Parties";

    pub const CROSS_PAGE_PREFIX: &str = "Cross-Page: ";
    pub const CROSS_BUTTONS: &str = "Cross-Page: Buttons";
    pub const CROSS_INPUTS: &str = "Cross-Page: Inputs";
    pub const CROSS_HEADINGS: &str = "Cross-Page: Headings";
    pub const CROSS_TYPOGRAPHY: &str = "Cross-Page: Typography";
    pub const CROSS_ROUTING: &str = "Cross-Page: Routing";
    pub const CROSS_URLS: &str = "Cross-Page: URLs";
    pub const CROSS_CONTENT: &str = "Cross-Page: Content";
    pub const CROSS_THIRD_PARTIES: &str = "Cross-Page: Third Parties";
    pub const CROSS_DOM: &str = "Cross-Page: DOM";
    pub const CROSS_LOADING_STATES: &str = "Cross-Page: Loading States";
    pub const CROSS_TAP_TARGETS: &str = "Cross-Page: Tap Targets";
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub severity: Severity,
    pub category: String,
    /// Short summary
    pub message: String,
    /// Longer rationale
    pub detail: String,
    /// Page the issue belongs to; absent for cross-page issues
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Issue {
    /// An issue scoped to one page.
    pub fn page(
        severity: Severity,
        category: &str,
        message: impl Into<String>,
        detail: impl Into<String>,
        url: &str,
    ) -> Self {
        Self {
            severity,
            category: category.to_string(),
            message: message.into(),
            detail: detail.into(),
            url: Some(url.to_string()),
        }
    }

    /// An issue about the session as a whole.
    pub fn cross_page(
        severity: Severity,
        category: &str,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category: category.to_string(),
            message: message.into(),
            detail: detail.into(),
            url: None,
        }
    }

    pub fn is_cross_page(&self) -> bool {
        self.category.starts_with(category::CROSS_PAGE_PREFIX)
    }

    pub fn is_accessibility(&self) -> bool {
        self.category.contains(category::ACCESSIBILITY)
    }
}

/// Issue counts by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    pub total: usize,
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
}

impl IssueSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        issues.iter().fold(Self::default(), |mut acc, issue| {
            acc.total += 1;
            match issue.severity {
                Severity::Error => acc.errors += 1,
                Severity::Warning => acc.warnings += 1,
                Severity::Info => acc.info += 1,
            }
            acc
        })
    }

    /// Most urgent severity present.
    pub fn highest(&self) -> Option<Severity> {
        if self.errors > 0 {
            Some(Severity::Error)
        } else if self.warnings > 0 {
            Some(Severity::Warning)
        } else if self.info > 0 {
            Some(Severity::Info)
        } else {
            None
        }
    }

    pub fn merge(self, other: IssueSummary) -> IssueSummary {
        IssueSummary {
            total: self.total + other.total,
            errors: self.errors + other.errors,
            warnings: self.warnings + other.warnings,
            info: self.info + other.info,
        }
    }
}

/// Issues sharing a category, in first-seen order.
#[derive(Debug, Clone)]
pub struct IssueGroup<'a> {
    pub category: &'a str,
    pub issues: Vec<&'a Issue>,
}

pub fn group_issues_by_category(issues: &[Issue]) -> Vec<IssueGroup<'_>> {
    let mut groups: Vec<IssueGroup<'_>> = Vec::new();
    for issue in issues {
        match groups.iter_mut().find(|g| g.category == issue.category) {
            Some(group) => group.issues.push(issue),
            None => groups.push(IssueGroup {
                category: &issue.category,
                issues: vec![issue],
            }),
        }
    }
    groups
}

/// Keep issues at or above `min`, preserving order.
pub fn filter_min_severity(issues: Vec<Issue>, min: Severity) -> Vec<Issue> {
    issues.into_iter().filter(|i| i.severity >= min).collect()
}
