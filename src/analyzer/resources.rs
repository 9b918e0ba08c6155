use crate::types::{category, DomStats, Issue, Severity, Snapshot};

use super::Thresholds;

pub(super) fn third_party_drift_issues(snapshots: &[Snapshot], t: &Thresholds) -> Vec<Issue> {
    let counts: Vec<(&Snapshot, usize)> = snapshots
        .iter()
        .filter_map(|s| s.third_party_resources.as_ref().map(|r| (s, r.len())))
        .collect();

    // Strict comparisons keep the first page on ties.
    let mut lowest: Option<(&Snapshot, usize)> = None;
    let mut highest: Option<(&Snapshot, usize)> = None;
    for &(snapshot, count) in &counts {
        if lowest.map_or(true, |(_, c)| count < c) {
            lowest = Some((snapshot, count));
        }
        if highest.map_or(true, |(_, c)| count > c) {
            highest = Some((snapshot, count));
        }
    }
    let (Some((low_page, min)), Some((high_page, max))) = (lowest, highest) else {
        return Vec::new();
    };
    if max == 0 || max - min <= t.third_party_drift {
        return Vec::new();
    }

    vec![Issue::cross_page(
        Severity::Warning,
        category::CROSS_THIRD_PARTIES,
        format!(
            "Third-party origins vary from {} to {} between pages",
            min, max
        ),
        format!(
            "Fewest: {} ({}). Most: {} ({}). Pages that pull in many more third parties than their siblings usually carry extra tags or widgets worth auditing.",
            low_page.url, min, high_page.url, max
        ),
    )]
}

pub(super) fn dom_bloat_issues(snapshots: &[Snapshot], t: &Thresholds) -> Vec<Issue> {
    let stats: Vec<DomStats> = snapshots.iter().filter_map(|s| s.dom_stats).collect();
    let mut issues = Vec::new();

    let non_decreasing = stats
        .windows(2)
        .all(|w| w[1].total_element_count >= w[0].total_element_count);
    if let (Some(first), Some(last)) = (stats.first(), stats.last()) {
        let (first_total, last_total) = (first.total_element_count, last.total_element_count);
        if stats.len() >= t.dom_growth_min_samples
            && non_decreasing
            && first_total > 0
            && last_total as f64 > first_total as f64 * t.dom_growth_ratio
        {
            let growth = (last_total as f64 / first_total as f64 - 1.0) * 100.0;
            issues.push(Issue::cross_page(
                Severity::Warning,
                category::CROSS_DOM,
                format!(
                    "DOM grew from {} to {} elements across {} navigations (+{:.0}%)",
                    first_total,
                    last_total,
                    stats.len(),
                    growth
                ),
                "The element count never went down between navigations. Views that are hidden instead of unmounted keep accumulating nodes, slowing style and layout work.",
            ));
        }
    }

    if let Some(last) = stats.last() {
        let total = last.total_element_count;
        let hidden = last.hidden_element_count;
        if total > 0
            && hidden > t.hidden_min_count
            && hidden as f64 / total as f64 > t.hidden_ratio
        {
            issues.push(Issue::cross_page(
                Severity::Info,
                category::CROSS_DOM,
                format!(
                    "{} of {} elements are hidden ({:.0}%)",
                    hidden,
                    total,
                    hidden as f64 / total as f64 * 100.0
                ),
                "A large share of the latest page's DOM is not displayed. Previously visited views may still be mounted.",
            ));
        }
    }

    issues
}
