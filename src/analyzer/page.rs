use crate::types::{category, truncate, Element, Issue, Severity, Snapshot};

use super::grouping::{distinct_style_values, group_by_style, BUTTON_STYLE_KEYS, INPUT_STYLE_KEYS};
use super::Thresholds;

pub(super) fn button_issues(snapshot: &Snapshot, t: &Thresholds) -> Vec<Issue> {
    let buttons = &snapshot.elements.buttons;
    let mut issues = Vec::new();

    let groups = group_by_style(buttons, &BUTTON_STYLE_KEYS);
    if buttons.len() >= 2 && groups.len() > t.style_groups {
        issues.push(Issue::page(
            Severity::Warning,
            category::BUTTONS,
            format!("{} different button styles found", groups.len()),
            format!(
                "{} buttons fall into {} distinct combinations of font size, font family, border radius and padding. Consistent buttons make actions easier to recognize; consolidate them into a small set of variants.",
                buttons.len(),
                groups.len()
            ),
            &snapshot.url,
        ));
    }

    let font_sizes = distinct_style_values(buttons, "fontSize");
    if font_sizes.len() > t.font_sizes {
        issues.push(Issue::page(
            Severity::Warning,
            category::BUTTONS,
            format!("{} different button font sizes", font_sizes.len()),
            format!("Button font sizes in use: {}.", font_sizes.join(", ")),
            &snapshot.url,
        ));
    }

    let radii = distinct_style_values(buttons, "borderRadius");
    if radii.len() > t.border_radii {
        issues.push(Issue::page(
            Severity::Info,
            category::BUTTONS,
            format!("{} different button border radii", radii.len()),
            format!("Button corner radii in use: {}.", radii.join(", ")),
            &snapshot.url,
        ));
    }

    for button in buttons
        .iter()
        .filter(|b| b.is_tag("button") && !b.has_text())
    {
        issues.push(Issue::page(
            Severity::Error,
            category::BUTTONS,
            format!("Empty button: {}", button.selector()),
            "This <button> has no text content. Users cannot tell what it does, and icon-only buttons still need a visible or accessible label.",
            &snapshot.url,
        ));
    }

    issues
}

fn is_text_input(input: &Element) -> bool {
    if input.is_tag("textarea") {
        return true;
    }
    if !input.tag.is_empty() && !input.is_tag("input") {
        return false;
    }
    input
        .input_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map_or(true, |t| t.eq_ignore_ascii_case("text"))
}

pub(super) fn input_issues(snapshot: &Snapshot, t: &Thresholds) -> Vec<Issue> {
    let inputs = &snapshot.elements.inputs;
    let mut issues = Vec::new();

    let groups = group_by_style(inputs, &INPUT_STYLE_KEYS);
    if inputs.len() >= 2 && groups.len() > t.style_groups {
        issues.push(Issue::page(
            Severity::Warning,
            category::INPUTS,
            format!("{} different input styles found", groups.len()),
            format!(
                "{} form fields fall into {} distinct combinations of font size, border, border radius and padding.",
                inputs.len(),
                groups.len()
            ),
            &snapshot.url,
        ));
    }

    for input in inputs.iter().filter(|i| is_text_input(i)) {
        let has_placeholder = input
            .placeholder
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty());
        if !has_placeholder {
            issues.push(Issue::page(
                Severity::Info,
                category::INPUTS,
                format!("Text input without placeholder: {}", input.selector()),
                "A short placeholder hints at the expected format. It does not replace a label.",
                &snapshot.url,
            ));
        }
    }

    issues
}

/// `h1`..`h6` to 1..6.
fn heading_level(element: &Element) -> Option<u8> {
    let tag = element.tag.trim().to_ascii_lowercase();
    let level = tag.strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

fn heading_text(element: &Element) -> String {
    let text = element.text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&text, 50)
}

pub(super) fn heading_issues(snapshot: &Snapshot, _t: &Thresholds) -> Vec<Issue> {
    let headings: Vec<(u8, &Element)> = snapshot
        .elements
        .headings
        .iter()
        .filter_map(|h| heading_level(h).map(|level| (level, h)))
        .collect();
    let mut issues = Vec::new();

    for pair in headings.windows(2) {
        let (prev_level, prev) = pair[0];
        let (level, current) = pair[1];
        if level > prev_level + 1 {
            issues.push(Issue::page(
                Severity::Warning,
                category::HEADINGS,
                format!("Heading level skips from h{} to h{}", prev_level, level),
                format!(
                    "\"{}\" (h{}) is followed by \"{}\" (h{}). Skipped levels break the document outline for screen reader users.",
                    heading_text(prev),
                    prev_level,
                    heading_text(current),
                    level
                ),
                &snapshot.url,
            ));
        }
    }

    let h1_count = headings.iter().filter(|(level, _)| *level == 1).count();
    if h1_count == 0 {
        issues.push(Issue::page(
            Severity::Info,
            category::HEADINGS,
            "No h1 heading found",
            "Every page should have one top-level heading describing its content.",
            &snapshot.url,
        ));
    } else if h1_count > 1 {
        issues.push(Issue::page(
            Severity::Warning,
            category::HEADINGS,
            format!("Multiple h1 headings ({})", h1_count),
            "A page should have a single h1; use h2 and below for sections.",
            &snapshot.url,
        ));
    }

    for level in 1..=6u8 {
        let at_level: Vec<&Element> = headings
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, h)| *h)
            .collect();
        if at_level.len() < 2 {
            continue;
        }
        let sizes = distinct_style_values(at_level.iter().copied(), "fontSize");
        if sizes.len() > 1 {
            issues.push(Issue::page(
                Severity::Warning,
                category::HEADINGS,
                format!("h{} headings use {} different font sizes", level, sizes.len()),
                format!(
                    "{} h{} headings render at {}. Headings of the same level should look the same.",
                    at_level.len(),
                    level,
                    sizes.join(", ")
                ),
                &snapshot.url,
            ));
        }
    }

    issues
}

pub(super) fn link_issues(snapshot: &Snapshot, t: &Thresholds) -> Vec<Issue> {
    let links = &snapshot.elements.links;
    if links.len() < 2 {
        return Vec::new();
    }
    let colors = distinct_style_values(links, "color");
    if colors.len() <= t.link_colors {
        return Vec::new();
    }
    vec![Issue::page(
        Severity::Info,
        category::LINKS,
        format!("{} different link colors", colors.len()),
        format!(
            "Links use {}. A consistent link color helps users spot what is clickable.",
            colors.join(", ")
        ),
        &snapshot.url,
    )]
}
