//! Text renderers. Every renderer is a pure function producing one blob.

pub mod ai_prompt;
pub mod bullet;
pub mod optimized_summary;
pub mod summary;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{FigxError, Result};

pub use ai_prompt::{generate_node_description, render_ai_prompt};
pub use bullet::render_bullet;
pub use optimized_summary::render_optimized_summary;
pub use summary::{render_component_tree, render_summary};

/// Output formats accepted by `figx extract --format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    AiPrompt,
    Json,
    Yaml,
    Bullet,
    Summary,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::AiPrompt,
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Bullet,
        OutputFormat::Summary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::AiPrompt => "ai-prompt",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Bullet => "bullet",
            OutputFormat::Summary => "summary",
        }
    }

    /// Default file extension when writing into an output directory.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::AiPrompt => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Bullet | OutputFormat::Summary => "md",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FigxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai-prompt" | "prompt" => Ok(OutputFormat::AiPrompt),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "bullet" => Ok(OutputFormat::Bullet),
            "summary" | "md" => Ok(OutputFormat::Summary),
            other => Err(FigxError::config(format!(
                "Unsupported format '{other}' (expected one of: ai-prompt, json, yaml, bullet, summary)"
            ))),
        }
    }
}

/// Pretty-printed JSON, two-space indent.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn render_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_yaml::to_string(value)?)
}
