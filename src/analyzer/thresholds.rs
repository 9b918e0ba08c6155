use serde::{Deserialize, Serialize};

/// Query parameters that only carry tracking noise. Any other `utm_` key is
/// stripped as well.
pub const TRACKING_PARAMS: [&str; 12] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
    "msclkid",
    "mc_cid",
    "mc_eid",
    "ref",
    "source",
];

/// Heuristic limits used by the detectors.
///
/// Counting thresholds are exclusive: an issue fires when the observed count is
/// strictly greater than the limit. Area and size limits are in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Distinct button/input/skeleton style groups tolerated on one page
    pub style_groups: usize,
    /// Distinct button font sizes tolerated on one page
    pub font_sizes: usize,
    /// Distinct button border radii tolerated on one page
    pub border_radii: usize,
    pub link_colors: usize,
    /// Distinct font families tolerated across a session
    pub font_families: usize,
    /// Area above which a lazy-loaded above-the-fold image is flagged
    pub lazy_image_area: f64,
    /// Minimum area for an image to count as the page's hero
    pub hero_min_area: f64,
    /// WCAG-derived minimum tap target side
    pub tap_target_min: f64,
    pub third_party_origins: usize,
    /// Allowed spread in third-party origin count between pages
    pub third_party_drift: usize,
    /// Last/first element count ratio that counts as DOM bloat
    pub dom_growth_ratio: f64,
    pub dom_growth_min_samples: usize,
    /// Hidden/total element share that counts as leaked markup
    pub hidden_ratio: f64,
    pub hidden_min_count: u64,
    /// Max/min median tap-target ratio between pages
    pub tap_target_drift_ratio: f64,
    /// Distinct button/input signatures tolerated across a session
    pub cross_page_style_signatures: usize,
    pub cross_page_skeleton_signatures: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            style_groups: 2,
            font_sizes: 2,
            border_radii: 2,
            link_colors: 3,
            font_families: 3,
            lazy_image_area: 120_000.0,
            hero_min_area: 50_000.0,
            tap_target_min: 44.0,
            third_party_origins: 10,
            third_party_drift: 5,
            dom_growth_ratio: 1.3,
            dom_growth_min_samples: 3,
            hidden_ratio: 0.3,
            hidden_min_count: 100,
            tap_target_drift_ratio: 2.0,
            cross_page_style_signatures: 3,
            cross_page_skeleton_signatures: 3,
        }
    }
}

impl Thresholds {
    /// Reject values that would make a detector fire on everything or nothing.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.lazy_image_area > 0.0) {
            return Err("lazy_image_area must be positive".to_string());
        }
        if !(self.hero_min_area > 0.0) {
            return Err("hero_min_area must be positive".to_string());
        }
        if !(self.tap_target_min > 0.0) {
            return Err("tap_target_min must be positive".to_string());
        }
        if !(self.dom_growth_ratio > 1.0) {
            return Err("dom_growth_ratio must be greater than 1.0".to_string());
        }
        if self.dom_growth_min_samples < 2 {
            return Err("dom_growth_min_samples must be at least 2".to_string());
        }
        if !(self.hidden_ratio > 0.0 && self.hidden_ratio <= 1.0) {
            return Err("hidden_ratio must be within (0, 1]".to_string());
        }
        if !(self.tap_target_drift_ratio > 1.0) {
            return Err("tap_target_drift_ratio must be greater than 1.0".to_string());
        }
        Ok(())
    }
}
