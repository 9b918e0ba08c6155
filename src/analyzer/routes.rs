use std::collections::HashMap;

use crate::types::{category, Issue, Severity, Snapshot};

use super::grouping::distinct_in_order;
use super::urls::normalize_url;
use super::Thresholds;

pub(super) fn stale_metadata_issues(snapshots: &[Snapshot], _t: &Thresholds) -> Vec<Issue> {
    if !snapshots.iter().any(|s| s.is_spa) {
        return Vec::new();
    }
    let urls = distinct_in_order(snapshots.iter().map(|s| s.url.clone()));
    let titles = distinct_in_order(snapshots.iter().map(|s| s.title.clone()));
    let mut issues = Vec::new();

    if urls.len() >= 2 && titles.len() == 1 {
        issues.push(Issue::cross_page(
            Severity::Warning,
            category::CROSS_ROUTING,
            format!(
                "Page title does not change across {} routes: \"{}\"",
                urls.len(),
                titles[0]
            ),
            "Client-side navigation changed the URL but not document.title. Browser history, tabs and screen readers all announce the stale title.",
        ));
    }

    let h1s: Vec<Option<&str>> = snapshots
        .iter()
        .map(|s| {
            s.primary_h1_text
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
        })
        .collect();
    let shared_h1 = match h1s.first() {
        Some(Some(first)) if h1s.iter().all(|h| h == &Some(*first)) => Some(*first),
        _ => None,
    };
    if let Some(h1) = shared_h1.filter(|_| urls.len() > 2) {
        issues.push(Issue::cross_page(
            Severity::Info,
            category::CROSS_ROUTING,
            format!("Same h1 on {} different routes: \"{}\"", urls.len(), h1),
            "Every visited route shows the same primary heading. The route view may not be re-rendering its heading, or the heading is part of a shared layout.",
        ));
    }

    issues
}

/// Snapshot indices grouped by key, groups in first-occurrence order.
fn group_indices<I>(keys: I) -> Vec<(String, Vec<usize>)>
where
    I: IntoIterator<Item = (usize, String)>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (i, key) in keys {
        match index.get(&key) {
            Some(&g) => groups[g].1.push(i),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![i]));
            }
        }
    }
    groups
}

pub(super) fn duplicate_url_issues(snapshots: &[Snapshot], _t: &Thresholds) -> Vec<Issue> {
    group_indices(
        snapshots
            .iter()
            .enumerate()
            .map(|(i, s)| (i, normalize_url(s.address()))),
    )
    .into_iter()
    .filter(|(_, members)| members.len() > 1)
    .map(|(normalized, members)| {
        let originals =
            distinct_in_order(members.iter().map(|&i| snapshots[i].address().to_string()));
        Issue::cross_page(
            Severity::Warning,
            category::CROSS_URLS,
            format!("{} snapshots map to the same URL: {}", members.len(), normalized),
            format!(
                "After removing tracking parameters and sorting the query string these addresses are identical: {}. Tracking parameters that leak into navigation create duplicate pages for caches and analytics.",
                originals.join(", ")
            ),
        )
    })
    .collect()
}

pub(super) fn duplicate_content_issues(snapshots: &[Snapshot], _t: &Thresholds) -> Vec<Issue> {
    group_indices(snapshots.iter().enumerate().filter_map(|(i, s)| {
        s.content_signature
            .as_deref()
            .filter(|sig| !sig.is_empty())
            .map(|sig| (i, sig.to_string()))
    }))
    .into_iter()
    .filter_map(|(_, members)| {
        let urls = distinct_in_order(members.iter().map(|&i| snapshots[i].url.clone()));
        (urls.len() > 1).then(|| {
            Issue::cross_page(
                Severity::Warning,
                category::CROSS_CONTENT,
                format!("Same content served at {} different URLs", urls.len()),
                format!(
                    "These pages render equivalent content: {}. Pick one canonical URL and redirect or mark the others canonical.",
                    urls.join(", ")
                ),
            )
        })
    })
    .collect()
}
