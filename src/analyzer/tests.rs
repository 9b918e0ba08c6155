use super::*;
use crate::types::{
    category, BodyVisibility, Dimensions, DomStats, Element, HeroCandidate, Issue, Overlay,
    Severity, Snapshot, ThirdPartyResource,
};

const URL: &str = "https://shop.example/";

fn page(url: &str) -> Snapshot {
    Snapshot {
        url: url.to_string(),
        title: "Shop".to_string(),
        ..Default::default()
    }
}

fn el(tag: &str, text: &str) -> Element {
    Element {
        tag: tag.to_string(),
        text: text.to_string(),
        ..Default::default()
    }
}

fn with_styles(mut element: Element, pairs: &[(&str, &str)]) -> Element {
    for (k, v) in pairs {
        element.styles.insert(k.to_string(), v.to_string());
    }
    element
}

fn sized(mut element: Element, width: f64, height: f64) -> Element {
    element.dimensions = Dimensions { width, height };
    element
}

fn button_styled(font_size: &str, radius: &str) -> Element {
    with_styles(
        el("button", "Buy"),
        &[
            ("fontSize", font_size),
            ("fontFamily", "Inter"),
            ("borderRadius", radius),
            ("padding", "8px 16px"),
        ],
    )
}

fn image(src: &str, alt: Option<&str>) -> Element {
    Element {
        tag: "img".into(),
        src: Some(src.to_string()),
        alt: alt.map(str::to_string),
        ..Default::default()
    }
}

fn placed(mut img: Element, top: f64, width: f64, height: f64) -> Element {
    img.rect_top = Some(top);
    img.rect_bottom = Some(top + height);
    img.dimensions = Dimensions { width, height };
    img
}

fn in_category<'a>(issues: &'a [Issue], cat: &str) -> Vec<&'a Issue> {
    issues.iter().filter(|i| i.category == cat).collect()
}

fn with_message<'a>(issues: &'a [Issue], needle: &str) -> Vec<&'a Issue> {
    issues.iter().filter(|i| i.message.contains(needle)).collect()
}

// ---------------------------------------------------------------------------
// Single page
// ---------------------------------------------------------------------------

#[test]
fn empty_snapshot_only_reports_missing_h1() {
    let issues = analyze_page(&page(URL));
    assert_eq!(issues.len(), 1, "unexpected issues: {:?}", issues);
    assert_eq!(issues[0].severity, Severity::Info);
    assert_eq!(issues[0].category, category::HEADINGS);
    assert!(issues[0].message.contains("No h1"));
    assert_eq!(issues[0].url.as_deref(), Some(URL));
}

#[test]
fn analyze_page_is_idempotent() {
    let mut snapshot = page(URL);
    snapshot.elements.buttons = vec![
        button_styled("12px", "2px"),
        button_styled("14px", "4px"),
        button_styled("16px", "8px"),
        el("button", ""),
    ];
    snapshot.elements.headings = vec![el("h1", "A"), el("h3", "B")];
    let first = analyze_page(&snapshot);
    let second = analyze_page(&snapshot);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn two_button_style_groups_do_not_warn_three_do() {
    let mut snapshot = page(URL);
    snapshot.elements.buttons = vec![
        button_styled("14px", "4px"),
        button_styled("14px", "4px"),
        button_styled("16px", "4px"),
    ];
    let issues = analyze_page(&snapshot);
    assert!(with_message(&issues, "different button styles").is_empty());

    snapshot.elements.buttons.push(button_styled("16px", "8px"));
    let issues = analyze_page(&snapshot);
    let styles = with_message(&issues, "different button styles");
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].severity, Severity::Warning);
    assert!(styles[0].message.starts_with("3 "));
}

#[test]
fn button_font_sizes_and_radii_are_counted_separately() {
    let mut snapshot = page(URL);
    snapshot.elements.buttons = vec![
        button_styled("12px", "2px"),
        button_styled("14px", "4px"),
        button_styled("16px", "8px"),
    ];
    let issues = analyze_page(&snapshot);
    let sizes = with_message(&issues, "button font sizes");
    assert_eq!(sizes.len(), 1);
    assert_eq!(sizes[0].severity, Severity::Warning);
    let radii = with_message(&issues, "border radii");
    assert_eq!(radii.len(), 1);
    assert_eq!(radii[0].severity, Severity::Info);
}

#[test]
fn each_empty_native_button_is_an_error() {
    let mut snapshot = page(URL);
    let mut icon = el("button", "  ");
    icon.id = "close".into();
    snapshot.elements.buttons = vec![icon, el("button", "Save"), el("BUTTON", "")];
    let issues = analyze_page(&snapshot);
    let empty = with_message(&issues, "Empty button");
    assert_eq!(empty.len(), 2);
    assert!(empty.iter().all(|i| i.severity == Severity::Error));
    assert!(empty[0].message.contains("button#close"));
}

#[test]
fn input_groups_and_placeholders() {
    let input = |size: &str, border: &str| {
        let mut i = with_styles(
            el("input", ""),
            &[
                ("fontSize", size),
                ("border", border),
                ("borderRadius", "4px"),
                ("padding", "8px"),
            ],
        );
        i.placeholder = Some("Email".into());
        i
    };
    let mut snapshot = page(URL);
    let mut bare = input("14px", "1px solid #ccc");
    bare.placeholder = None;
    let mut checkbox = input("14px", "none");
    checkbox.input_type = Some("checkbox".into());
    checkbox.placeholder = None;
    snapshot.elements.inputs = vec![
        bare,
        input("16px", "1px solid #ccc"),
        input("14px", "2px solid #000"),
        checkbox,
    ];

    let issues = analyze_page(&snapshot);
    let inputs = in_category(&issues, category::INPUTS);
    assert_eq!(inputs.len(), 2, "{:?}", inputs);
    assert_eq!(inputs[0].severity, Severity::Warning);
    assert!(inputs[0].message.contains("4 different input styles"));
    assert_eq!(inputs[1].severity, Severity::Info);
    assert!(inputs[1].message.contains("placeholder"));
}

#[test]
fn heading_skip_is_reported_once() {
    let mut snapshot = page(URL);
    snapshot.elements.headings = vec![el("h1", "Welcome"), el("h3", "Details")];
    let issues = analyze_page(&snapshot);
    let skips = with_message(&issues, "skips from h1 to h3");
    assert_eq!(skips.len(), 1);
    assert!(skips[0].detail.contains("Welcome") && skips[0].detail.contains("Details"));

    snapshot.elements.headings = vec![el("h1", "A"), el("h2", "B"), el("h3", "C")];
    let issues = analyze_page(&snapshot);
    assert!(with_message(&issues, "skips").is_empty());
    assert!(in_category(&issues, category::HEADINGS).is_empty());
}

#[test]
fn multiple_h1_and_inconsistent_level_sizes() {
    let mut snapshot = page(URL);
    snapshot.elements.headings = vec![
        with_styles(el("h1", "One"), &[("fontSize", "32px")]),
        with_styles(el("h1", "Two"), &[("fontSize", "28px")]),
        with_styles(el("h2", "Three"), &[("fontSize", "24px")]),
    ];
    let issues = analyze_page(&snapshot);
    let multi = with_message(&issues, "Multiple h1 headings (2)");
    assert_eq!(multi.len(), 1);
    let sizes = with_message(&issues, "h1 headings use 2 different font sizes");
    assert_eq!(sizes.len(), 1);
    assert!(with_message(&issues, "h2 headings").is_empty());
}

#[test]
fn link_colors_above_three_are_info() {
    let link = |color: &str| with_styles(el("a", "More"), &[("color", color)]);
    let mut snapshot = page(URL);
    snapshot.elements.links = vec![link("red"), link("blue"), link("green")];
    assert!(in_category(&analyze_page(&snapshot), category::LINKS).is_empty());

    snapshot.elements.links.push(link("purple"));
    let issues = analyze_page(&snapshot);
    let links = in_category(&issues, category::LINKS);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].severity, Severity::Info);
}

#[test]
fn missing_alt_text_reports_truncated_source() {
    let long_src = format!("https://cdn.example/{}.png", "a".repeat(100));
    let mut snapshot = page(URL);
    snapshot.elements.images = vec![
        image(&long_src, None),
        image("https://cdn.example/ok.png", Some("Logo")),
        image("https://cdn.example/blank.png", Some("")),
    ];
    let issues = analyze_page(&snapshot);
    let alt = in_category(&issues, category::IMAGES);
    assert_eq!(alt.len(), 2);
    assert!(alt.iter().all(|i| i.severity == Severity::Error));
    let shown = alt[0]
        .message
        .trim_start_matches("Image missing alt text: ")
        .to_string();
    assert!(shown.chars().count() <= 60);
}

#[test]
fn lazy_image_above_fold_requires_viewport_and_area() {
    let mut big = placed(image("hero.jpg", Some("Hero")), 100.0, 800.0, 400.0);
    big.loading = Some("lazy".into());
    let mut small = placed(image("thumb.jpg", Some("Thumb")), 0.0, 100.0, 100.0);
    small.loading = Some("lazy".into());
    let mut below = placed(image("footer.jpg", Some("Footer")), 2000.0, 800.0, 400.0);
    below.loading = Some("lazy".into());

    let mut snapshot = page(URL);
    snapshot.elements.images = vec![big, small, below];
    assert!(with_message(&analyze_page(&snapshot), "Lazy-loaded").is_empty());

    snapshot.viewport_height = Some(900.0);
    let issues = analyze_page(&snapshot);
    let lazy = with_message(&issues, "Lazy-loaded");
    assert_eq!(lazy.len(), 1);
    assert!(lazy[0].message.contains("hero.jpg"));
    assert_eq!(lazy[0].category, category::IMAGE_PERFORMANCE);
}

#[test]
fn hero_image_hints() {
    let mut hero = placed(image("hero.jpg", Some("Hero")), 0.0, 600.0, 300.0);
    hero.decoding = Some("sync".into());
    let tie = placed(image("tie.jpg", Some("Tie")), 0.0, 300.0, 600.0);
    let mut snapshot = page(URL);
    snapshot.viewport_height = Some(800.0);
    snapshot.elements.images = vec![hero, tie];

    let issues = analyze_page(&snapshot);
    let perf = in_category(&issues, category::IMAGE_PERFORMANCE);
    assert_eq!(perf.len(), 2);
    assert_eq!(perf[0].severity, Severity::Info);
    assert!(perf[0].message.contains("hero.jpg"));
    assert_eq!(perf[1].severity, Severity::Warning);
    assert!(perf[1].message.contains("decoding"));

    snapshot.elements.images[0].fetch_priority = Some("high".into());
    snapshot.elements.images[0].decoding = Some("async".into());
    assert!(in_category(&analyze_page(&snapshot), category::IMAGE_PERFORMANCE).is_empty());
}

#[test]
fn small_hero_is_ignored() {
    let mut snapshot = page(URL);
    snapshot.viewport_height = Some(800.0);
    snapshot.elements.images = vec![placed(image("a.jpg", Some("A")), 0.0, 200.0, 200.0)];
    assert!(in_category(&analyze_page(&snapshot), category::IMAGE_PERFORMANCE).is_empty());
}

#[test]
fn background_hero_candidates_each_warn() {
    let mut snapshot = page(URL);
    snapshot.hero_candidates = Some(vec![HeroCandidate {
        tag: "section".into(),
        id: "hero".into(),
        classes: vec!["banner".into(), "dark".into()],
        width: 1200.0,
        height: 600.0,
        background_image: None,
    }]);
    let issues = analyze_page(&snapshot);
    let bg = with_message(&issues, "background image");
    assert_eq!(bg.len(), 1);
    assert!(bg[0].message.contains("section#hero.banner"));
    assert!(bg[0].message.contains("1200\u{d7}600px"));
}

#[test]
fn hidden_roots_and_blocking_overlays() {
    let mut snapshot = page(URL);
    snapshot.body_visibility = Some(BodyVisibility {
        body_opacity: Some("0".into()),
        body_visibility: Some("visible".into()),
        html_opacity: Some("1".into()),
        html_visibility: Some("hidden".into()),
    });
    snapshot.overlays = Some(vec![
        Overlay {
            tag: "div".into(),
            id: "loader".into(),
            opacity: Some("1".into()),
            pointer_events: Some("auto".into()),
            ..Default::default()
        },
        Overlay {
            tag: "div".into(),
            opacity: Some("0".into()),
            ..Default::default()
        },
        Overlay {
            tag: "div".into(),
            pointer_events: Some("none".into()),
            ..Default::default()
        },
    ]);
    let issues = analyze_page(&snapshot);
    let rendering = in_category(&issues, category::RENDERING);
    assert_eq!(rendering.len(), 3);
    assert_eq!(rendering[0].severity, Severity::Error);
    assert!(rendering[0].message.contains("<body>"));
    assert_eq!(rendering[1].severity, Severity::Error);
    assert!(rendering[1].message.contains("<html>"));
    assert_eq!(rendering[2].severity, Severity::Warning);
    assert!(rendering[2].message.contains("div#loader"));
}

#[test]
fn skeleton_style_groups() {
    let skeleton = |bg: &str, radius: &str| {
        with_styles(
            el("div", ""),
            &[("backgroundColor", bg), ("borderRadius", radius)],
        )
    };
    let mut snapshot = page(URL);
    snapshot.skeletons = Some(vec![skeleton("#eee", "4px"), skeleton("#ddd", "4px")]);
    assert!(in_category(&analyze_page(&snapshot), category::LOADING_STATES).is_empty());

    if let Some(list) = snapshot.skeletons.as_mut() {
        list.push(skeleton("#eee", "50%"));
    }
    let issues = analyze_page(&snapshot);
    let loading = in_category(&issues, category::LOADING_STATES);
    assert_eq!(loading.len(), 1);
    assert_eq!(loading[0].severity, Severity::Info);
}

#[test]
fn tap_target_boundary() {
    let mut snapshot = page(URL);
    snapshot.elements.links = vec![sized(el("a", "Ok"), 44.0, 44.0)];
    assert!(in_category(&analyze_page(&snapshot), category::TAP_TARGETS).is_empty());

    snapshot.elements.links = vec![sized(el("a", "Tiny"), 43.0, 44.0)];
    let issues = analyze_page(&snapshot);
    let taps = in_category(&issues, category::TAP_TARGETS);
    assert_eq!(taps.len(), 1);
    assert_eq!(taps[0].severity, Severity::Warning);
    assert!(taps[0].message.contains("43\u{d7}44px"));
    assert!(taps[0].message.contains("Tiny"));
}

#[test]
fn zero_sized_tap_targets_are_skipped() {
    let mut snapshot = page(URL);
    snapshot.elements.buttons = vec![sized(el("button", "Hidden"), 0.0, 30.0)];
    assert!(in_category(&analyze_page(&snapshot), category::TAP_TARGETS).is_empty());
}

#[test]
fn role_button_accessible_name_boundary() {
    let div_button = || {
        let mut d = el("div", "");
        d.role = Some("button".into());
        d.tab_index = Some(0);
        d
    };
    let errors = |snapshot: &Snapshot| {
        analyze_page(snapshot)
            .into_iter()
            .filter(|i| i.category == category::ACCESSIBILITY && i.severity == Severity::Error)
            .count()
    };

    let mut snapshot = page(URL);
    snapshot.elements.buttons = vec![div_button()];
    assert_eq!(errors(&snapshot), 1);

    let mut labelled = div_button();
    labelled.aria_label = Some("Close".into());
    snapshot.elements.buttons = vec![labelled];
    assert_eq!(errors(&snapshot), 0);

    let mut titled = div_button();
    titled.title = Some("Close".into());
    snapshot.elements.buttons = vec![titled];
    assert_eq!(errors(&snapshot), 0);

    let mut texted = div_button();
    texted.text = "Close".into();
    snapshot.elements.buttons = vec![texted];
    assert_eq!(errors(&snapshot), 0);
}

#[test]
fn role_button_without_tabindex_is_not_focusable() {
    let mut d = el("span", "Menu");
    d.role = Some("button".into());
    let mut snapshot = page(URL);
    snapshot.elements.buttons = vec![d.clone()];
    let issues = analyze_page(&snapshot);
    assert_eq!(with_message(&issues, "keyboard-focusable").len(), 1);

    d.tab_index = Some(-1);
    snapshot.elements.buttons = vec![d.clone()];
    assert_eq!(with_message(&analyze_page(&snapshot), "keyboard-focusable").len(), 1);

    d.tab_index = Some(0);
    snapshot.elements.buttons = vec![d];
    assert!(with_message(&analyze_page(&snapshot), "keyboard-focusable").is_empty());
}

#[test]
fn native_buttons_skip_role_checks() {
    let mut snapshot = page(URL);
    snapshot.elements.buttons = vec![el("button", "Save")];
    assert!(in_category(&analyze_page(&snapshot), category::ACCESSIBILITY).is_empty());
}

#[test]
fn third_party_origins_over_limit() {
    let resources = |n: usize| {
        (0..n)
            .map(|i| ThirdPartyResource {
                host: format!("tracker{}.example.net", i),
                count: 1,
            })
            .collect::<Vec<_>>()
    };
    let mut snapshot = page(URL);
    snapshot.third_party_resources = Some(resources(10));
    assert!(in_category(&analyze_page(&snapshot), category::THIRD_PARTIES).is_empty());

    snapshot.third_party_resources = Some(resources(30));
    let issues = analyze_page(&snapshot);
    let tp = in_category(&issues, category::THIRD_PARTIES);
    assert_eq!(tp.len(), 1);
    assert!(tp[0].message.starts_with("30 "));
    let hosts = tp[0].detail.trim_start_matches("Third-party hosts: ");
    assert!(hosts.chars().count() <= 200);
}

#[test]
fn custom_thresholds_change_outcomes() {
    let mut snapshot = page(URL);
    snapshot.elements.links = vec![sized(el("a", "Ok"), 44.0, 44.0)];
    let strict = PageAnalyzer::new(Thresholds {
        tap_target_min: 48.0,
        ..Thresholds::default()
    });
    assert_eq!(
        in_category(&strict.analyze(&snapshot), category::TAP_TARGETS).len(),
        1
    );
}

#[test]
fn page_detector_output_follows_declaration_order() {
    let mut snapshot = page(URL);
    snapshot.elements.buttons = vec![el("button", "")];
    snapshot.elements.images = vec![image("x.png", None)];
    let cats: Vec<String> = analyze_page(&snapshot)
        .into_iter()
        .map(|i| i.category)
        .collect();
    assert_eq!(
        cats,
        vec![
            category::BUTTONS.to_string(),
            category::HEADINGS.to_string(),
            category::IMAGES.to_string(),
        ]
    );
}

// ---------------------------------------------------------------------------
// Cross page
// ---------------------------------------------------------------------------

#[test]
fn compare_needs_two_snapshots() {
    assert!(compare_snapshots(&[]).is_empty());
    assert!(compare_snapshots(&[page(URL)]).is_empty());
}

#[test]
fn cross_page_issues_have_no_url() {
    let mut a = page("https://a.com/p?utm_source=x");
    a.full_url = Some(a.url.clone());
    let b = page("https://a.com/p");
    let issues = compare_snapshots(&[a, b]);
    assert!(!issues.is_empty());
    assert!(issues.iter().all(|i| i.url.is_none() && i.is_cross_page()));
}

#[test]
fn tracking_params_collapse_to_one_url() {
    let issues = compare_snapshots(&[
        page("https://a.com/p?utm_source=x"),
        page("https://a.com/p"),
    ]);
    let dupes = with_message(&issues, "map to the same URL");
    assert_eq!(dupes.len(), 1);
    assert_eq!(dupes[0].severity, Severity::Warning);
    assert_eq!(dupes[0].category, category::CROSS_URLS);
}

#[test]
fn distinct_queries_do_not_collapse() {
    let issues = compare_snapshots(&[
        page("https://a.com/p?id=1"),
        page("https://a.com/p?id=2"),
    ]);
    assert!(in_category(&issues, category::CROSS_URLS).is_empty());
}

#[test]
fn button_style_drift_uses_signature_union() {
    let with_buttons = |url: &str, buttons: Vec<Element>| {
        let mut s = page(url);
        s.elements.buttons = buttons;
        s
    };
    let a = with_buttons(
        "https://a.com/1",
        vec![button_styled("12px", "2px"), button_styled("14px", "2px")],
    );
    let b = with_buttons(
        "https://a.com/2",
        vec![button_styled("16px", "2px"), button_styled("12px", "2px")],
    );
    let issues = compare_snapshots(&[a.clone(), b.clone()]);
    assert!(in_category(&issues, category::CROSS_BUTTONS).is_empty());

    let c = with_buttons("https://a.com/3", vec![button_styled("18px", "2px")]);
    let issues = compare_snapshots(&[a.clone(), b.clone(), c.clone()]);
    assert_eq!(in_category(&issues, category::CROSS_BUTTONS).len(), 1);

    // adding a snapshot never removes a union-based issue
    let d = with_buttons("https://a.com/4", vec![]);
    let issues = compare_snapshots(&[a, b, c, d]);
    assert_eq!(in_category(&issues, category::CROSS_BUTTONS).len(), 1);
}

#[test]
fn input_style_drift_keeps_issue_as_pages_are_added() {
    let with_inputs = |url: &str, borders: &[&str]| {
        let mut s = page(url);
        s.elements.inputs = borders
            .iter()
            .map(|b| {
                with_styles(
                    el("input", ""),
                    &[("fontSize", "14px"), ("border", *b), ("padding", "8px")],
                )
            })
            .collect();
        s
    };
    let a = with_inputs("https://a.com/1", &["1px solid #ccc", "1px solid #000"]);
    let b = with_inputs("https://a.com/2", &["1px solid #ccc", "2px solid #000"]);
    let issues = compare_snapshots(&[a.clone(), b.clone()]);
    assert!(in_category(&issues, category::CROSS_INPUTS).is_empty());

    let c = with_inputs("https://a.com/3", &["none"]);
    let issues = compare_snapshots(&[a.clone(), b.clone(), c.clone()]);
    let drift = in_category(&issues, category::CROSS_INPUTS);
    assert_eq!(drift.len(), 1);
    assert_eq!(drift[0].severity, Severity::Warning);
    assert!(drift[0].message.starts_with("4 distinct input styles"));

    let empty = page("https://a.com/4");
    let repeat = with_inputs("https://a.com/5", &["none", "1px solid #ccc"]);
    let issues = compare_snapshots(&[a, b, c, empty, repeat]);
    assert_eq!(in_category(&issues, category::CROSS_INPUTS).len(), 1);
}

#[test]
fn heading_size_drift_by_level() {
    let with_h = |url: &str, size: &str| {
        let mut s = page(url);
        s.elements.headings = vec![
            with_styles(el("h1", "T"), &[("fontSize", size)]),
            with_styles(el("h4", "x"), &[("fontSize", size)]),
        ];
        s
    };
    let issues = compare_snapshots(&[
        with_h("https://a.com/1", "32px"),
        with_h("https://a.com/2", "30px"),
    ]);
    let drift = in_category(&issues, category::CROSS_HEADINGS);
    assert_eq!(drift.len(), 1);
    assert!(drift[0].message.contains("h1"));
    assert!(drift[0].message.contains("32px, 30px"));
}

#[test]
fn font_family_sprawl() {
    let with_font = |url: &str, fonts: &[&str]| {
        let mut s = page(url);
        s.elements.links = fonts
            .iter()
            .map(|f| with_styles(el("a", "x"), &[("fontFamily", *f)]))
            .collect();
        s
    };
    let a = with_font("https://a.com/1", &["Inter", "Roboto"]);
    let b = with_font("https://a.com/2", &["Inter", "Georgia", ""]);
    let issues = compare_snapshots(&[a.clone(), b.clone()]);
    assert!(in_category(&issues, category::CROSS_TYPOGRAPHY).is_empty());

    let c = with_font("https://a.com/3", &["Comic Sans MS"]);
    let issues = compare_snapshots(&[a.clone(), b.clone(), c.clone()]);
    let fonts = in_category(&issues, category::CROSS_TYPOGRAPHY);
    assert_eq!(fonts.len(), 1);
    assert_eq!(fonts[0].severity, Severity::Info);

    // more pages only grow the union
    let empty = page("https://a.com/4");
    let repeat = with_font("https://a.com/5", &["Roboto", "Inter"]);
    let issues = compare_snapshots(&[a, b, c, empty, repeat]);
    assert_eq!(in_category(&issues, category::CROSS_TYPOGRAPHY).len(), 1);
}

#[test]
fn spa_stale_title_and_shared_h1() {
    let route = |url: &str| {
        let mut s = page(url);
        s.is_spa = true;
        s.primary_h1_text = Some("Dashboard".into());
        s
    };
    let issues = compare_snapshots(&[route("https://app.com/#/a"), route("https://app.com/#/b")]);
    let routing = in_category(&issues, category::CROSS_ROUTING);
    assert_eq!(routing.len(), 1);
    assert_eq!(routing[0].severity, Severity::Warning);

    let issues = compare_snapshots(&[
        route("https://app.com/#/a"),
        route("https://app.com/#/b"),
        route("https://app.com/#/c"),
    ]);
    let routing = in_category(&issues, category::CROSS_ROUTING);
    assert_eq!(routing.len(), 2);
    assert_eq!(routing[1].severity, Severity::Info);
    assert!(routing[1].message.contains("Dashboard"));
}

#[test]
fn stale_metadata_only_applies_to_spas() {
    let issues = compare_snapshots(&[page("https://a.com/1"), page("https://a.com/2")]);
    assert!(in_category(&issues, category::CROSS_ROUTING).is_empty());
}

#[test]
fn same_content_signature_on_different_urls() {
    let signed = |url: &str, sig: &str| {
        let mut s = page(url);
        s.content_signature = Some(sig.to_string());
        s
    };
    let issues = compare_snapshots(&[
        signed("https://a.com/x", "abc"),
        signed("https://a.com/x", "abc"),
        signed("https://a.com/y", "def"),
    ]);
    assert!(in_category(&issues, category::CROSS_CONTENT).is_empty());

    let issues = compare_snapshots(&[
        signed("https://a.com/x", "abc"),
        signed("https://a.com/y", "abc"),
    ]);
    assert_eq!(in_category(&issues, category::CROSS_CONTENT).len(), 1);
}

#[test]
fn third_party_drift_names_extreme_pages() {
    let with_tp = |url: &str, n: usize| {
        let mut s = page(url);
        s.third_party_resources = Some(
            (0..n)
                .map(|i| ThirdPartyResource {
                    host: format!("h{}.net", i),
                    count: 1,
                })
                .collect(),
        );
        s
    };
    let issues = compare_snapshots(&[with_tp("https://a.com/1", 2), with_tp("https://a.com/2", 7)]);
    assert!(in_category(&issues, category::CROSS_THIRD_PARTIES).is_empty());

    let issues = compare_snapshots(&[
        with_tp("https://a.com/1", 2),
        page("https://a.com/skip"),
        with_tp("https://a.com/2", 8),
    ]);
    let drift = in_category(&issues, category::CROSS_THIRD_PARTIES);
    assert_eq!(drift.len(), 1);
    assert!(drift[0].detail.contains("https://a.com/1 (2)"));
    assert!(drift[0].detail.contains("https://a.com/2 (8)"));
}

#[test]
fn dom_bloat_requires_monotonic_growth() {
    let with_dom = |url: &str, total: u64, hidden: u64| {
        let mut s = page(url);
        s.dom_stats = Some(DomStats {
            total_element_count: total,
            hidden_element_count: hidden,
        });
        s
    };
    let growing = [
        with_dom("https://a.com/1", 1000, 0),
        with_dom("https://a.com/2", 1200, 0),
        with_dom("https://a.com/3", 1400, 0),
    ];
    let issues = compare_snapshots(&growing);
    let dom = in_category(&issues, category::CROSS_DOM);
    assert_eq!(dom.len(), 1);
    assert!(dom[0].message.contains("1000 to 1400"));

    let dipping = [
        with_dom("https://a.com/1", 1000, 0),
        with_dom("https://a.com/2", 900, 0),
        with_dom("https://a.com/3", 1400, 0),
    ];
    assert!(in_category(&compare_snapshots(&dipping), category::CROSS_DOM).is_empty());

    let two_samples = [
        with_dom("https://a.com/1", 1000, 0),
        with_dom("https://a.com/2", 2000, 0),
    ];
    assert!(in_category(&compare_snapshots(&two_samples), category::CROSS_DOM).is_empty());
}

#[test]
fn hidden_element_share_on_last_snapshot() {
    let with_dom = |url: &str, total: u64, hidden: u64| {
        let mut s = page(url);
        s.dom_stats = Some(DomStats {
            total_element_count: total,
            hidden_element_count: hidden,
        });
        s
    };
    let issues = compare_snapshots(&[
        with_dom("https://a.com/1", 500, 0),
        with_dom("https://a.com/2", 1000, 400),
    ]);
    let dom = in_category(&issues, category::CROSS_DOM);
    assert_eq!(dom.len(), 1);
    assert_eq!(dom[0].severity, Severity::Info);

    let issues = compare_snapshots(&[
        with_dom("https://a.com/1", 500, 0),
        with_dom("https://a.com/2", 200, 90),
    ]);
    assert!(in_category(&issues, category::CROSS_DOM).is_empty());
}

#[test]
fn skeleton_drift_across_pages() {
    let with_sk = |url: &str, colors: &[&str]| {
        let mut s = page(url);
        s.skeletons = Some(
            colors
                .iter()
                .map(|c| {
                    with_styles(
                        el("div", ""),
                        &[("backgroundColor", *c), ("borderRadius", "4px")],
                    )
                })
                .collect(),
        );
        s
    };
    let a = with_sk("https://a.com/1", &["#eee", "#ddd"]);
    let b = with_sk("https://a.com/2", &["#ccc"]);
    let issues = compare_snapshots(&[a.clone(), b.clone()]);
    assert!(in_category(&issues, category::CROSS_LOADING_STATES).is_empty());

    let c = with_sk("https://a.com/3", &["#bbb"]);
    let issues = compare_snapshots(&[a.clone(), b.clone(), c.clone()]);
    assert_eq!(in_category(&issues, category::CROSS_LOADING_STATES).len(), 1);

    // pages without skeletons or with known ones keep the issue
    let empty = page("https://a.com/4");
    let repeat = with_sk("https://a.com/5", &["#ddd", "#bbb"]);
    let issues = compare_snapshots(&[a, b, c, empty, repeat]);
    assert_eq!(in_category(&issues, category::CROSS_LOADING_STATES).len(), 1);
}

#[test]
fn tap_target_median_drift() {
    let with_links = |url: &str, sizes: &[f64]| {
        let mut s = page(url);
        s.elements.links = sizes.iter().map(|&v| sized(el("a", "x"), 200.0, v)).collect();
        s
    };
    let issues = compare_snapshots(&[
        with_links("https://a.com/1", &[20.0, 24.0, 22.0]),
        with_links("https://a.com/2", &[44.0, 44.0]),
    ]);
    assert!(in_category(&issues, category::CROSS_TAP_TARGETS).is_empty());

    let issues = compare_snapshots(&[
        with_links("https://a.com/1", &[20.0, 24.0, 22.0]),
        with_links("https://a.com/2", &[48.0, 50.0]),
    ]);
    let drift = in_category(&issues, category::CROSS_TAP_TARGETS);
    assert_eq!(drift.len(), 1);
    assert!(drift[0].message.contains("22px to 49px"));
}

#[test]
fn audit_keeps_page_and_session_issues_apart() {
    let snapshots = [
        page("https://a.com/p?utm_source=x"),
        page("https://a.com/p"),
    ];
    let (pages, session) = audit_snapshots(&snapshots, Thresholds::default());
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0], analyze_page(&snapshots[0]));
    assert_eq!(session, compare_snapshots(&snapshots));
    assert!(pages.iter().flatten().all(|i| !i.is_cross_page()));
}
