use serde::{Deserialize, Serialize};

use crate::error::ErrorPayload;
use crate::types::{Issue, IssueSummary, Snapshot};

/// Schema version for output payloads.
pub const UCC_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum UccOutput {
    Analyze(AnalyzeOutput),
    Compare(CompareOutput),
    Audit(AuditOutput),
    Error(ErrorOutput),
}

/// Single-page results for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageReport {
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    pub summary: IssueSummary,
    pub issues: Vec<Issue>,
}

impl PageReport {
    pub fn new(snapshot: &Snapshot, issues: Vec<Issue>) -> Self {
        Self {
            url: snapshot.url.clone(),
            title: snapshot.title.clone(),
            summary: summarize_issues(&issues),
            issues,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutput {
    pub version: String,
    pub summary: IssueSummary,
    pub pages: Vec<PageReport>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub omitted_issues: usize,
}

impl AnalyzeOutput {
    pub fn new(pages: Vec<PageReport>) -> Self {
        Self {
            version: UCC_OUTPUT_VERSION.to_string(),
            summary: merged_summary(&pages),
            pages,
            omitted_issues: 0,
        }
    }
}

/// Session-wide results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareOutput {
    pub version: String,
    /// Page identities in session order
    pub pages: Vec<String>,
    pub summary: IssueSummary,
    pub issues: Vec<Issue>,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub omitted_issues: usize,
}

impl CompareOutput {
    pub fn new(snapshots: &[Snapshot], issues: Vec<Issue>) -> Self {
        Self {
            version: UCC_OUTPUT_VERSION.to_string(),
            pages: snapshots.iter().map(|s| s.url.clone()).collect(),
            summary: summarize_issues(&issues),
            issues,
            omitted_issues: 0,
        }
    }
}

/// Per-page analysis of every snapshot plus the session comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutput {
    pub version: String,
    pub summary: IssueSummary,
    pub pages: Vec<PageReport>,
    pub session: SessionSection,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub omitted_issues: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSection {
    pub summary: IssueSummary,
    pub issues: Vec<Issue>,
}

impl AuditOutput {
    pub fn new(pages: Vec<PageReport>, session_issues: Vec<Issue>) -> Self {
        let session = SessionSection {
            summary: summarize_issues(&session_issues),
            issues: session_issues,
        };
        Self {
            version: UCC_OUTPUT_VERSION.to_string(),
            summary: merged_summary(&pages).merge(session.summary),
            pages,
            session,
            omitted_issues: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}

impl UccOutput {
    /// Counts over every issue in the report, before any truncation.
    pub fn summary(&self) -> Option<IssueSummary> {
        match self {
            UccOutput::Analyze(out) => Some(out.summary),
            UccOutput::Compare(out) => Some(out.summary),
            UccOutput::Audit(out) => Some(out.summary),
            UccOutput::Error(_) => None,
        }
    }

    /// Keep at most `max` issues, walking pages first and then the session.
    /// Summaries keep counting everything; the cut is recorded in
    /// `omittedIssues`.
    pub fn limit_issues(&mut self, max: usize) {
        let mut budget = max;
        match self {
            UccOutput::Analyze(out) => {
                for page in &mut out.pages {
                    out.omitted_issues += keep_within(&mut page.issues, &mut budget);
                }
            }
            UccOutput::Compare(out) => {
                out.omitted_issues += keep_within(&mut out.issues, &mut budget);
            }
            UccOutput::Audit(out) => {
                for page in &mut out.pages {
                    out.omitted_issues += keep_within(&mut page.issues, &mut budget);
                }
                out.omitted_issues += keep_within(&mut out.session.issues, &mut budget);
            }
            UccOutput::Error(_) => {}
        }
    }
}

fn keep_within(issues: &mut Vec<Issue>, budget: &mut usize) -> usize {
    let keep = issues.len().min(*budget);
    let dropped = issues.len() - keep;
    issues.truncate(keep);
    *budget -= keep;
    dropped
}

pub fn summarize_issues(issues: &[Issue]) -> IssueSummary {
    IssueSummary::from_issues(issues)
}

fn merged_summary(pages: &[PageReport]) -> IssueSummary {
    pages
        .iter()
        .fold(IssueSummary::default(), |acc, page| acc.merge(page.summary))
}

fn is_zero(value: &usize) -> bool {
    *value == 0
}
