use crate::types::{category, Element, Issue, Severity, Snapshot};

use super::grouping::{
    distinct_in_order, distinct_style_values, style_signature, BUTTON_STYLE_KEYS,
    INPUT_STYLE_KEYS, SKELETON_STYLE_KEYS,
};
use super::{px, Thresholds};

/// Union of signatures over every snapshot, first-seen order.
fn signature_union<'a, F>(snapshots: &'a [Snapshot], keys: &[&str], select: F) -> Vec<String>
where
    F: Fn(&'a Snapshot) -> &'a [Element],
{
    distinct_in_order(
        snapshots
            .iter()
            .flat_map(|s| select(s).iter())
            .map(|el| style_signature(el, keys)),
    )
}

pub(super) fn style_drift_issues(snapshots: &[Snapshot], t: &Thresholds) -> Vec<Issue> {
    let mut issues = Vec::new();

    let buttons = signature_union(snapshots, &BUTTON_STYLE_KEYS, |s| {
        s.elements.buttons.as_slice()
    });
    if buttons.len() > t.cross_page_style_signatures {
        issues.push(Issue::cross_page(
            Severity::Warning,
            category::CROSS_BUTTONS,
            format!(
                "{} distinct button styles across {} pages",
                buttons.len(),
                snapshots.len()
            ),
            "Buttons are styled differently from page to page (font size, font family, border radius, padding). Shared components should render the same everywhere.",
        ));
    }

    let inputs = signature_union(snapshots, &INPUT_STYLE_KEYS, |s| {
        s.elements.inputs.as_slice()
    });
    if inputs.len() > t.cross_page_style_signatures {
        issues.push(Issue::cross_page(
            Severity::Warning,
            category::CROSS_INPUTS,
            format!(
                "{} distinct input styles across {} pages",
                inputs.len(),
                snapshots.len()
            ),
            "Form fields are styled differently from page to page (font size, border, border radius, padding).",
        ));
    }

    issues
}

fn is_level(element: &Element, level: u8) -> bool {
    element.tag.trim().eq_ignore_ascii_case(&format!("h{}", level))
}

pub(super) fn heading_drift_issues(snapshots: &[Snapshot], _t: &Thresholds) -> Vec<Issue> {
    (1..=3u8)
        .filter_map(|level| {
            let sizes = distinct_style_values(
                snapshots
                    .iter()
                    .flat_map(|s| s.elements.headings.iter())
                    .filter(|h| is_level(h, level)),
                "fontSize",
            );
            (sizes.len() > 1).then(|| {
                Issue::cross_page(
                    Severity::Warning,
                    category::CROSS_HEADINGS,
                    format!("h{} font size varies across pages: {}", level, sizes.join(", ")),
                    format!(
                        "The same heading level renders at {} different sizes across the session.",
                        sizes.len()
                    ),
                )
            })
        })
        .collect()
}

pub(super) fn font_family_issues(snapshots: &[Snapshot], t: &Thresholds) -> Vec<Issue> {
    let families = distinct_style_values(
        snapshots.iter().flat_map(|s| s.elements.iter()),
        "fontFamily",
    );
    if families.len() <= t.font_families {
        return Vec::new();
    }
    vec![Issue::cross_page(
        Severity::Info,
        category::CROSS_TYPOGRAPHY,
        format!("{} font families in use across pages", families.len()),
        format!("Font stacks seen: {}.", families.join("; ")),
    )]
}

pub(super) fn skeleton_drift_issues(snapshots: &[Snapshot], t: &Thresholds) -> Vec<Issue> {
    let signatures = distinct_in_order(
        snapshots
            .iter()
            .filter_map(|s| s.skeletons.as_deref())
            .filter(|sk| !sk.is_empty())
            .flatten()
            .map(|el| style_signature(el, &SKELETON_STYLE_KEYS)),
    );
    if signatures.len() <= t.cross_page_skeleton_signatures {
        return Vec::new();
    }
    vec![Issue::cross_page(
        Severity::Warning,
        category::CROSS_LOADING_STATES,
        format!("{} distinct skeleton styles across pages", signatures.len()),
        "Loading placeholders change color or shape between pages, which makes transitions feel inconsistent.",
    )]
}

/// Median of the positive min-sides of a page's buttons and links.
fn median_tap_target(snapshot: &Snapshot) -> Option<f64> {
    let mut sizes: Vec<f64> = snapshot
        .interactive_elements()
        .map(|el| el.dimensions.min_side())
        .filter(|s| *s > 0.0)
        .collect();
    if sizes.is_empty() {
        return None;
    }
    sizes.sort_by(f64::total_cmp);
    let mid = sizes.len() / 2;
    Some(if sizes.len() % 2 == 0 {
        (sizes[mid - 1] + sizes[mid]) / 2.0
    } else {
        sizes[mid]
    })
}

pub(super) fn tap_target_drift_issues(snapshots: &[Snapshot], t: &Thresholds) -> Vec<Issue> {
    let medians: Vec<f64> = snapshots.iter().filter_map(median_tap_target).collect();
    if medians.len() < 2 {
        return Vec::new();
    }
    let min = medians.iter().copied().fold(f64::INFINITY, f64::min);
    let max = medians.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !(min > 0.0 && max > 0.0) || max / min <= t.tap_target_drift_ratio {
        return Vec::new();
    }
    vec![Issue::cross_page(
        Severity::Info,
        category::CROSS_TAP_TARGETS,
        format!(
            "Median tap target size varies from {}px to {}px across pages",
            px(min),
            px(max)
        ),
        "Interactive elements are sized very differently between pages; some pages may be much harder to use on touch devices.",
    )]
}
