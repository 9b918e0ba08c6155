//! Style-signature grouping shared by the page analyzer and the comparator.

use std::collections::{HashMap, HashSet};

use crate::types::Element;

/// Stand-in for a style value that was not captured.
pub const MISSING_STYLE_TOKEN: &str = "<unset>";

pub const BUTTON_STYLE_KEYS: [&str; 4] = ["fontSize", "fontFamily", "borderRadius", "padding"];
pub const INPUT_STYLE_KEYS: [&str; 4] = ["fontSize", "border", "borderRadius", "padding"];
pub const SKELETON_STYLE_KEYS: [&str; 2] = ["backgroundColor", "borderRadius"];

/// Pipe-joined values of `keys` for one element.
pub fn style_signature(element: &Element, keys: &[&str]) -> String {
    keys.iter()
        .map(|key| element.style(key).unwrap_or(MISSING_STYLE_TOKEN))
        .collect::<Vec<_>>()
        .join("|")
}

/// Elements sharing one signature.
#[derive(Debug, Clone)]
pub struct StyleGroup<'a> {
    pub signature: String,
    pub elements: Vec<&'a Element>,
}

/// Partition of elements by signature, iterated in first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct StyleGroups<'a> {
    groups: Vec<StyleGroup<'a>>,
    index: HashMap<String, usize>,
}

impl<'a> StyleGroups<'a> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, signature: &str) -> Option<&StyleGroup<'a>> {
        self.index.get(signature).map(|&i| &self.groups[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleGroup<'a>> {
        self.groups.iter()
    }

    pub fn signatures(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.signature.as_str())
    }

    fn insert(&mut self, signature: String, element: &'a Element) {
        match self.index.get(&signature) {
            Some(&i) => self.groups[i].elements.push(element),
            None => {
                self.index.insert(signature.clone(), self.groups.len());
                self.groups.push(StyleGroup {
                    signature,
                    elements: vec![element],
                });
            }
        }
    }
}

pub fn group_by_style<'a>(elements: &'a [Element], keys: &[&str]) -> StyleGroups<'a> {
    let mut groups = StyleGroups::default();
    for element in elements {
        groups.insert(style_signature(element, keys), element);
    }
    groups
}

/// Distinct captured values of one style property, in first-seen order.
pub fn distinct_style_values<'a, I>(elements: I, key: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Element>,
{
    distinct_in_order(
        elements
            .into_iter()
            .filter_map(|e| e.style(key))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string),
    )
}

/// Deduplicate while keeping first-occurrence order.
pub fn distinct_in_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}
