use thiserror::Error;
use url::Url;

use crate::FigxError;

/// File key plus optional node id taken from a Figma link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigmaTarget {
    pub file_key: String,
    pub node_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResourceParseError {
    #[error("Invalid URL '{value}': {message}")]
    InvalidUrl { value: String, message: String },
    #[error("'{host}' is not a Figma host")]
    NotFigma { host: String },
    #[error("Figma URL missing file key in '{url}'")]
    FigmaMissingFileKey { url: String },
}

impl From<ResourceParseError> for FigxError {
    fn from(err: ResourceParseError) -> Self {
        FigxError::Config(err.to_string())
    }
}

const FILE_PATH_KINDS: &[&str] = &["file", "design", "proto", "board"];

/// Parse a Figma link (`/file/`, `/design/`, `/proto/`) or a bare file key.
///
/// `node-id=1-2` in the query is normalised to the API form `1:2`.
pub fn parse_figma_target(input: &str) -> Result<FigmaTarget, ResourceParseError> {
    let value = input.trim();
    if !value.contains("://") {
        return parse_bare_key(value);
    }

    let url = Url::parse(value).map_err(|e| ResourceParseError::InvalidUrl {
        value: value.to_string(),
        message: e.to_string(),
    })?;

    let host = url.host_str().unwrap_or("");
    if host != "figma.com" && !host.ends_with(".figma.com") {
        return Err(ResourceParseError::NotFigma {
            host: host.to_string(),
        });
    }

    let path_segments: Vec<&str> = url.path_segments().map(|c| c.collect()).unwrap_or_default();

    let file_key = path_segments
        .iter()
        .position(|s| FILE_PATH_KINDS.contains(s))
        .and_then(|i| path_segments.get(i + 1))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| ResourceParseError::FigmaMissingFileKey {
            url: value.to_string(),
        })?;

    let node_id = url
        .query_pairs()
        .find(|(k, _)| k == "node-id")
        .map(|(_, v)| v.replace('-', ":"))
        .filter(|id| !id.is_empty());

    Ok(FigmaTarget { file_key, node_id })
}

fn parse_bare_key(value: &str) -> Result<FigmaTarget, ResourceParseError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(FigmaTarget {
            file_key: value.to_string(),
            node_id: None,
        })
    } else {
        Err(ResourceParseError::FigmaMissingFileKey {
            url: value.to_string(),
        })
    }
}
