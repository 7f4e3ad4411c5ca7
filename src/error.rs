use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::ParseError;

#[derive(Debug, Error)]
pub enum FigxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] ParseError),

    #[error("Figma API error (status: {status:?}): {message}")]
    FigmaApi {
        status: Option<StatusCode>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl FigxError {
    pub fn figma_api(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        FigxError::FigmaApi {
            status,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        FigxError::Config(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            FigxError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            FigxError::Network(e) => ErrorPayload::new(
                ErrorCategory::Network,
                e.to_string(),
                "Check connectivity/proxy/VPN and retry.",
            ),
            FigxError::InvalidUrl(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Verify the Figma URL (e.g., https://www.figma.com/design/<FILE_KEY>/Name?node-id=1-2).",
            ),
            FigxError::FigmaApi { status, message } => {
                let remediation = match status.map(|s| s.as_u16()) {
                    Some(403) => "The token was rejected; run `figx token set` with a valid personal access token.",
                    Some(404) => "Check the file key and node-id; the token must have access to the file.",
                    Some(429) => "Rate limited by Figma; retry after waiting.",
                    _ => "Check the token, file key, and node-id; retry after waiting.",
                };
                ErrorPayload::new(
                    ErrorCategory::Figma,
                    format!("Figma API error (status {:?}): {}", status, message),
                    remediation,
                )
            }
            FigxError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check JSON inputs; run with --verbose for details.",
            ),
            FigxError::Yaml(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Try --format json; run with --verbose for details.",
            ),
            FigxError::Config(msg) => {
                let lower = msg.to_ascii_lowercase();
                if lower.contains("unsupported format") || lower.contains("output format") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use one of: ai-prompt, json, yaml, bullet, summary.",
                    )
                } else if lower.contains("--optimize") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Combine --optimize with --format summary.",
                    )
                } else if lower.contains("file key") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Use a Figma URL with a file key: https://www.figma.com/design/<FILE_KEY>/... (add ?node-id=1-2 for a single node).",
                    )
                } else if lower.contains("node") && lower.contains("not found") {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Copy the node link from Figma (right-click > Copy link) so the node-id matches.",
                    )
                } else {
                    ErrorPayload::new(
                        ErrorCategory::Config,
                        msg.to_string(),
                        "Check flags/paths and the config file (figx --config PATH).",
                    )
                }
            }
            FigxError::Token(msg) => ErrorPayload::new(
                ErrorCategory::Token,
                msg.to_string(),
                "Run `figx token set <TOKEN>` or set FIGMA_TOKEN (or FIGMA_OAUTH_TOKEN).",
            ),
            FigxError::Unknown(msg) => ErrorPayload::new(
                ErrorCategory::Unknown,
                msg.to_string(),
                "Re-run with --verbose; file an issue if persistent.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, FigxError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Network,
    Figma,
    Token,
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
