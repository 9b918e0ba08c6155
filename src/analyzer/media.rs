use crate::types::{category, truncate, Element, Issue, Severity, Snapshot};

use super::{px, Thresholds};

fn image_source(image: &Element) -> Option<String> {
    image
        .src
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| truncate(s, 60))
}

pub(super) fn alt_text_issues(snapshot: &Snapshot, _t: &Thresholds) -> Vec<Issue> {
    snapshot
        .elements
        .images
        .iter()
        .filter(|img| img.alt.as_deref().map_or(true, |alt| alt.trim().is_empty()))
        .map(|img| {
            let message = match image_source(img) {
                Some(src) => format!("Image missing alt text: {}", src),
                None => "Image missing alt text".to_string(),
            };
            Issue::page(
                Severity::Error,
                category::IMAGES,
                message,
                "Screen readers cannot describe images without alt text. Describe the image, or mark purely decorative images with role=\"presentation\".",
                &snapshot.url,
            )
        })
        .collect()
}

/// Whether the image's vertical extent overlaps `[0, viewport_height)`.
fn is_above_fold(image: &Element, viewport_height: f64) -> bool {
    match (image.rect_top, image.rect_bottom) {
        (Some(top), Some(bottom)) => top < viewport_height && bottom > 0.0,
        _ => false,
    }
}

fn viewport_height(snapshot: &Snapshot) -> Option<f64> {
    snapshot.viewport_height.filter(|h| *h > 0.0)
}

pub(super) fn lazy_above_fold_issues(snapshot: &Snapshot, t: &Thresholds) -> Vec<Issue> {
    let Some(vh) = viewport_height(snapshot) else {
        return Vec::new();
    };
    snapshot
        .elements
        .images
        .iter()
        .filter(|img| {
            img.loading
                .as_deref()
                .is_some_and(|l| l.trim().eq_ignore_ascii_case("lazy"))
        })
        .filter(|img| is_above_fold(img, vh) && img.dimensions.area() > t.lazy_image_area)
        .map(|img| {
            let name = image_source(img).unwrap_or_else(|| img.selector());
            Issue::page(
                Severity::Warning,
                category::IMAGE_PERFORMANCE,
                format!("Lazy-loaded image above the fold: {}", name),
                format!(
                    "This {}\u{d7}{}px image is visible in the initial viewport but uses loading=\"lazy\", which delays the Largest Contentful Paint. Load it eagerly.",
                    px(img.dimensions.width),
                    px(img.dimensions.height)
                ),
                &snapshot.url,
            )
        })
        .collect()
}

/// Largest above-the-fold image; the first one wins ties.
fn hero_image(images: &[Element], viewport_height: f64) -> Option<&Element> {
    images
        .iter()
        .filter(|img| is_above_fold(img, viewport_height))
        .fold(None, |best: Option<&Element>, img| match best {
            Some(b) if b.dimensions.area() >= img.dimensions.area() => Some(b),
            _ => Some(img),
        })
}

pub(super) fn hero_image_issues(snapshot: &Snapshot, t: &Thresholds) -> Vec<Issue> {
    let Some(vh) = viewport_height(snapshot) else {
        return Vec::new();
    };
    let Some(hero) = hero_image(&snapshot.elements.images, vh) else {
        return Vec::new();
    };
    if hero.dimensions.area() < t.hero_min_area {
        return Vec::new();
    }

    let name = image_source(hero).unwrap_or_else(|| hero.selector());
    let mut issues = Vec::new();

    let priority = hero
        .fetch_priority
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    if priority.map_or(true, |p| p.eq_ignore_ascii_case("auto")) {
        issues.push(Issue::page(
            Severity::Info,
            category::IMAGE_PERFORMANCE,
            format!("Hero image without fetchpriority=\"high\": {}", name),
            "The largest above-the-fold image is the likely LCP element. fetchpriority=\"high\" lets the browser request it before other images.",
            &snapshot.url,
        ));
    }

    if hero
        .decoding
        .as_deref()
        .is_some_and(|d| d.trim().eq_ignore_ascii_case("sync"))
    {
        issues.push(Issue::page(
            Severity::Warning,
            category::IMAGE_PERFORMANCE,
            format!("Hero image uses decoding=\"sync\": {}", name),
            "Synchronous decoding blocks rendering of other content while the hero image decodes. Use decoding=\"async\" or leave the default.",
            &snapshot.url,
        ));
    }

    issues
}

pub(super) fn background_hero_issues(snapshot: &Snapshot, _t: &Thresholds) -> Vec<Issue> {
    let Some(candidates) = &snapshot.hero_candidates else {
        return Vec::new();
    };
    candidates
        .iter()
        .map(|candidate| {
            Issue::page(
                Severity::Warning,
                category::IMAGE_PERFORMANCE,
                format!(
                    "Large above-fold background image: {} ({}\u{d7}{}px)",
                    candidate.selector(),
                    px(candidate.width),
                    px(candidate.height)
                ),
                "CSS background images are discovered late and cannot take fetchpriority. If this region is the LCP element, render it with <img> or preload the image.",
                &snapshot.url,
            )
        })
        .collect()
}
