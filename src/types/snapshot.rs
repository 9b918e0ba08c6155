//! Page snapshot types produced by the extraction collaborator.
//!
//! A [`Snapshot`] is a read-only record of one page observation: the UI
//! elements found on the page grouped by category, plus optional page-level
//! enrichment signals. Every optional field deserializes leniently so that a
//! malformed enrichment value only disables the detectors that read it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::lenient;

/// A single page observation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Normalized page identity (may carry a hash route for SPAs)
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: String,
    /// Full URL including query string
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub full_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub timestamp: Option<String>,
    /// Detected front-end framework tag, if any
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub framework: Option<String>,
    #[serde(rename = "isSPA", default, deserialize_with = "lenient::flag")]
    pub is_spa: bool,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub viewport_height: Option<f64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub elements: ElementSet,

    /// Large above-the-fold regions painted with a CSS background image
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub hero_candidates: Option<Vec<HeroCandidate>>,
    /// Full-viewport fixed/absolute elements
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub overlays: Option<Vec<Overlay>>,
    /// Loading-placeholder elements
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub skeletons: Option<Vec<Element>>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub third_party_resources: Option<Vec<ThirdPartyResource>>,
    #[serde(
        default,
        deserialize_with = "lenient::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub dom_stats: Option<DomStats>,
    #[serde(
        default,
        deserialize_with = "lenient::opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub body_visibility: Option<BodyVisibility>,
    /// Opaque fingerprint of the page's textual content
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub content_signature: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub primary_h1_text: Option<String>,
}

impl Snapshot {
    /// The URL used for query-string normalization: `fullUrl` when known.
    pub fn address(&self) -> &str {
        self.full_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(&self.url)
    }

    /// Buttons followed by links: everything that acts as a tap target.
    pub fn interactive_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements
            .buttons
            .iter()
            .chain(self.elements.links.iter())
    }
}

/// Extracted elements grouped by category, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSet {
    #[serde(default, deserialize_with = "lenient::list")]
    pub buttons: Vec<Element>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub inputs: Vec<Element>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub headings: Vec<Element>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub links: Vec<Element>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub images: Vec<Element>,
}

impl ElementSet {
    /// Every element of every category.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.buttons
            .iter()
            .chain(&self.inputs)
            .chain(&self.headings)
            .chain(&self.links)
            .chain(&self.images)
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// On-screen size in device-independent pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub width: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub height: f64,
}

impl Dimensions {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

/// One extracted UI element.
///
/// Category-specific attributes are optional: inputs carry `type` and
/// `placeholder`, links carry `href`, images carry the loading hints and
/// their vertical rect, buttons carry the accessibility attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    #[serde(default, deserialize_with = "lenient::string")]
    pub tag: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::classes")]
    pub classes: Vec<String>,
    /// Computed styles keyed by camelCase property name (e.g. `fontSize`)
    #[serde(default, deserialize_with = "lenient::styles")]
    pub styles: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub dimensions: Dimensions,

    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub input_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub placeholder: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub href: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub src: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub alt: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub loading: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub fetch_priority: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub decoding: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub rect_top: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_f64",
        skip_serializing_if = "Option::is_none"
    )]
    pub rect_bottom: Option<f64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub aria_label: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub tab_index: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
}

impl Element {
    /// A style value, if it was captured.
    pub fn style(&self, key: &str) -> Option<&str> {
        self.styles.get(key).map(String::as_str)
    }

    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// `tag#id.first-class`, the way the element is named in issue messages.
    pub fn selector(&self) -> String {
        describe_selector(&self.tag, &self.id, &self.classes)
    }

    /// Selector plus a short excerpt of the visible text, when there is one.
    pub fn label(&self) -> String {
        let text = self.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if text.is_empty() {
            self.selector()
        } else {
            format!("{} \"{}\"", self.selector(), truncate(&text, 40))
        }
    }
}

/// Large above-the-fold region painted with a background image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroCandidate {
    #[serde(default, deserialize_with = "lenient::string")]
    pub tag: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::classes")]
    pub classes: Vec<String>,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub width: f64,
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub height: f64,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub background_image: Option<String>,
}

impl HeroCandidate {
    pub fn selector(&self) -> String {
        describe_selector(&self.tag, &self.id, &self.classes)
    }
}

/// A fixed/absolute element covering the whole viewport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    #[serde(default, deserialize_with = "lenient::string")]
    pub tag: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::classes")]
    pub classes: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub opacity: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub pointer_events: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub z_index: Option<String>,
}

impl Overlay {
    pub fn selector(&self) -> String {
        describe_selector(&self.tag, &self.id, &self.classes)
    }
}

/// Script/iframe host distinct from the page's own host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyResource {
    #[serde(default, deserialize_with = "lenient::string")]
    pub host: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomStats {
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_element_count: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub hidden_element_count: u64,
}

/// Computed opacity/visibility of the `<body>` and `<html>` roots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyVisibility {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub body_opacity: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub body_visibility: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub html_opacity: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub html_visibility: Option<String>,
}

fn describe_selector(tag: &str, id: &str, classes: &[String]) -> String {
    let mut out = if tag.is_empty() {
        "element".to_string()
    } else {
        tag.to_ascii_lowercase()
    };
    if !id.is_empty() {
        out.push('#');
        out.push_str(id);
    }
    if let Some(class) = classes.first() {
        out.push('.');
        out.push_str(class);
    }
    out
}

/// Truncate to at most `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}
