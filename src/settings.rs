use std::path::Path;

use ucc_lib::{Config, Severity, Thresholds, UccError};

use crate::cli::ReportArgs;

/// Fail threshold used when neither the CLI nor the config sets one.
pub const DEFAULT_FAIL_ON: Severity = Severity::Error;

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedReportSettings {
    pub thresholds: Thresholds,
    pub fail_on: Severity,
    pub max_issues: Option<usize>,
}

/// Merge CLI arguments with config file, preferring CLI when flags are present.
pub fn resolve_report_settings(args: &ReportArgs, config: &Config) -> ResolvedReportSettings {
    ResolvedReportSettings {
        thresholds: config.thresholds,
        fail_on: args
            .fail_on
            .or(config.report.fail_on)
            .unwrap_or(DEFAULT_FAIL_ON),
        max_issues: args.max_issues.or(config.report.max_issues),
    }
}

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > ~/.config/ucc/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, UccError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        UccError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        UccError::Config(prefix)
    })?;
    Ok(cfg)
}

/// Format effective config as a single-line string.
pub fn format_effective_config(
    settings: &ResolvedReportSettings,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    let t = &settings.thresholds;
    let max_issues = settings
        .max_issues
        .map(|n| n.to_string())
        .unwrap_or_else(|| "all".to_string());
    format!(
        "Effective config [{source}]: fail-on={}, max-issues={}, thresholds: style-groups={}, font-sizes={}, border-radii={}, link-colors={}, font-families={}, tap-target={}px, third-party-origins={}, third-party-drift={}, dom-growth={:.2} over {} samples, hidden-share={:.2} (min {}), tap-drift={:.2}, cross-page styles={} skeletons={}",
        settings.fail_on,
        max_issues,
        t.style_groups,
        t.font_sizes,
        t.border_radii,
        t.link_colors,
        t.font_families,
        t.tap_target_min,
        t.third_party_origins,
        t.third_party_drift,
        t.dom_growth_ratio,
        t.dom_growth_min_samples,
        t.hidden_ratio,
        t.hidden_min_count,
        t.tap_target_drift_ratio,
        t.cross_page_style_signatures,
        t.cross_page_skeleton_signatures,
    )
}
