use crate::types::{category, Element, Issue, Severity, Snapshot};

use super::{px, Thresholds};

pub(super) fn tap_target_issues(snapshot: &Snapshot, t: &Thresholds) -> Vec<Issue> {
    snapshot
        .interactive_elements()
        .filter(|el| {
            let smaller = el.dimensions.min_side();
            smaller > 0.0 && smaller < t.tap_target_min
        })
        .map(|el| {
            Issue::page(
                Severity::Warning,
                category::TAP_TARGETS,
                format!(
                    "Tap target too small: {} ({}\u{d7}{}px)",
                    el.label(),
                    px(el.dimensions.width),
                    px(el.dimensions.height)
                ),
                format!(
                    "Interactive elements should be at least {}\u{d7}{}px so they can be hit reliably on touch screens.",
                    px(t.tap_target_min),
                    px(t.tap_target_min)
                ),
                &snapshot.url,
            )
        })
        .collect()
}

fn non_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn has_accessible_name(el: &Element) -> bool {
    non_blank(el.aria_label.as_deref()) || non_blank(el.title.as_deref()) || el.has_text()
}

fn has_button_role(el: &Element) -> bool {
    el.role
        .as_deref()
        .is_some_and(|r| r.trim().eq_ignore_ascii_case("button"))
}

pub(super) fn role_button_issues(snapshot: &Snapshot, _t: &Thresholds) -> Vec<Issue> {
    let mut issues = Vec::new();

    for el in &snapshot.elements.buttons {
        let role_button = has_button_role(el);
        if !role_button && el.is_tag("button") {
            continue;
        }

        if !has_accessible_name(el) {
            issues.push(Issue::page(
                Severity::Error,
                category::ACCESSIBILITY,
                format!("Button has no accessible name: {}", el.selector()),
                "Custom buttons need visible text, aria-label or title so assistive technology can announce them.",
                &snapshot.url,
            ));
        }

        if role_button && el.tab_index.map_or(true, |i| i < 0) {
            issues.push(Issue::page(
                Severity::Warning,
                category::ACCESSIBILITY,
                format!("role=\"button\" is not keyboard-focusable: {}", el.selector()),
                "Elements with role=\"button\" need tabindex=\"0\" (and Enter/Space handlers) to be usable without a mouse.",
                &snapshot.url,
            ));
        }
    }

    issues
}
