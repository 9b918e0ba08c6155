use crate::types::{category, truncate, Issue, Severity, Snapshot};

use super::grouping::{group_by_style, SKELETON_STYLE_KEYS};
use super::Thresholds;

fn is_value(value: Option<&str>, expected: &str) -> bool {
    value.is_some_and(|v| v.trim().eq_ignore_ascii_case(expected))
}

pub(super) fn render_blocking_issues(snapshot: &Snapshot, _t: &Thresholds) -> Vec<Issue> {
    let mut issues = Vec::new();

    if let Some(vis) = &snapshot.body_visibility {
        let roots = [
            ("body", vis.body_opacity.as_deref(), vis.body_visibility.as_deref()),
            ("html", vis.html_opacity.as_deref(), vis.html_visibility.as_deref()),
        ];
        for (root, opacity, visibility) in roots {
            let reason = if is_value(opacity, "0") {
                Some("opacity: 0")
            } else if is_value(visibility, "hidden") {
                Some("visibility: hidden")
            } else {
                None
            };
            if let Some(reason) = reason {
                issues.push(Issue::page(
                    Severity::Error,
                    category::RENDERING,
                    format!("Page <{}> is hidden ({})", root, reason),
                    format!(
                        "The <{}> element was captured with {}. Anti-flicker snippets and hydration guards that hide the page delay every paint until script runs.",
                        root, reason
                    ),
                    &snapshot.url,
                ));
            }
        }
    }

    for overlay in snapshot.overlays.iter().flatten() {
        let transparent = is_value(overlay.opacity.as_deref(), "0");
        let passes_clicks = is_value(overlay.pointer_events.as_deref(), "none");
        if transparent || passes_clicks {
            continue;
        }
        issues.push(Issue::page(
            Severity::Warning,
            category::RENDERING,
            format!("Full-viewport overlay: {}", overlay.selector()),
            "A visible element covers the entire viewport and intercepts pointer events. If it is a leftover loader or consent layer, it blocks all interaction.",
            &snapshot.url,
        ));
    }

    issues
}

pub(super) fn skeleton_issues(snapshot: &Snapshot, t: &Thresholds) -> Vec<Issue> {
    let Some(skeletons) = &snapshot.skeletons else {
        return Vec::new();
    };
    let groups = group_by_style(skeletons, &SKELETON_STYLE_KEYS);
    if skeletons.len() < 2 || groups.len() <= t.style_groups {
        return Vec::new();
    }
    vec![Issue::page(
        Severity::Info,
        category::LOADING_STATES,
        format!("{} different skeleton styles found", groups.len()),
        format!(
            "{} loading placeholders use {} combinations of background color and border radius. Placeholders should share one treatment.",
            skeletons.len(),
            groups.len()
        ),
        &snapshot.url,
    )]
}

pub(super) fn third_party_issues(snapshot: &Snapshot, t: &Thresholds) -> Vec<Issue> {
    let Some(resources) = &snapshot.third_party_resources else {
        return Vec::new();
    };
    if resources.len() <= t.third_party_origins {
        return Vec::new();
    }
    let hosts = resources
        .iter()
        .map(|r| r.host.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    vec![Issue::page(
        Severity::Warning,
        category::THIRD_PARTIES,
        format!("{} third-party origins loaded", resources.len()),
        format!("Third-party hosts: {}", truncate(&hosts, 200)),
        &snapshot.url,
    )]
}
