use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum UccError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Raised by library callers that parse URLs themselves; `normalize_url`
    /// leaves unparseable URLs as they are.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl UccError {
    pub fn snapshot(message: impl Into<String>) -> Self {
        UccError::Snapshot(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        UccError::Config(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            UccError::Io(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            UccError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Snapshot files must be a JSON object or an array of objects; run with --verbose for details.",
            ),
            UccError::Yaml(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check YAML indentation and that the document is a mapping or a sequence of mappings.",
            ),
            UccError::Toml(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Fix the TOML syntax; unknown keys are ignored, but values must have the right type.",
            ),
            UccError::InvalidUrl(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Verify URL/format (e.g., https://example.com).",
            ),
            UccError::Snapshot(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("unsupported snapshot extension") {
                    ErrorPayload::new(
                        ErrorCategory::Input,
                        msg.to_string(),
                        "Use a .json, .yaml or .yml file, or pass - to read JSON from stdin.",
                    )
                } else if lower.contains("not found") {
                    ErrorPayload::new(
                        ErrorCategory::Input,
                        msg.to_string(),
                        "Verify the file exists; use an absolute path or run from the working directory.",
                    )
                } else if lower.contains("at least two") {
                    ErrorPayload::new(
                        ErrorCategory::Input,
                        msg.to_string(),
                        "Pass several --input files, or one file holding an array of snapshots.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Input,
                        msg.to_string(),
                        "Each snapshot must be an object with at least a url field.",
                    )
                }
            }
            UccError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check --config/flags; thresholds must be positive and ratios within range.",
            ),
            UccError::Unknown(msg) => ErrorPayload::new(
                ErrorCategory::Unknown,
                msg.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, UccError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Input,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
