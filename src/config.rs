use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analyzer::Thresholds;
use crate::error::Result;
use crate::types::Severity;

/// File-level settings. Every section is optional in TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub thresholds: Thresholds,
    pub report: ReportConfig,
}

/// Controls how results turn into an exit status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Lowest severity that makes the run fail (exit code 1)
    pub fail_on: Option<Severity>,
    /// Cap on the number of issues included in a report
    pub max_issues: Option<usize>,
}

impl Config {
    /// `~/.config/ucc/config.toml`, when a home directory is known.
    pub fn central_config_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME").filter(|h| !h.is_empty())?;
        Some(
            PathBuf::from(home)
                .join(".config")
                .join("ucc")
                .join("config.toml"),
        )
    }

    /// Priority: explicit path > central config (if it exists) > defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::central_config_path() {
            Some(central) if central.is_file() => Self::from_file(&central),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        self.thresholds.validate()?;
        if self.report.max_issues == Some(0) {
            return Err("report.max_issues must be at least 1".to_string());
        }
        Ok(())
    }
}
