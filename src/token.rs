//! Locally stored personal access token and auth resolution.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::project_dirs;
use crate::figma::FigmaAuth;
use crate::{FigxError, Result};

/// A token file on disk, `<config dir>/figx/token` by default.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config location.
    pub fn default_location() -> Result<Self> {
        project_dirs()
            .map(|dirs| Self::new(dirs.config_dir().join("token")))
            .ok_or_else(|| FigxError::Token("could not determine a config directory".to_string()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored token, or `None` when nothing (or only whitespace) is saved.
    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(FigxError::Token("refusing to save an empty token".to_string()));
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, format!("{token}\n"))?;
        restrict_permissions(&self.path)?;
        debug!("token saved to {}", self.path.display());
        Ok(())
    }

    /// Remove the token file. Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// `figd…wxyz`-style display form; short tokens are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

/// Pick credentials: flag > `FIGMA_TOKEN` > `FIGMA_OAUTH_TOKEN` > stored token.
pub fn resolve_auth(flag: Option<&str>, store: Option<&TokenStore>) -> Result<FigmaAuth> {
    let stored = match store {
        Some(store) => store.load()?,
        None => None,
    };
    resolve_auth_from(flag, FigmaAuth::from_env(), stored)
}

pub fn resolve_auth_from(
    flag: Option<&str>,
    env: Option<FigmaAuth>,
    stored: Option<String>,
) -> Result<FigmaAuth> {
    if let Some(token) = flag.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("using token from --token");
        return Ok(FigmaAuth::PersonalAccessToken(token.to_string()));
    }
    if let Some(auth) = env {
        debug!("using token from environment");
        return Ok(auth);
    }
    if let Some(token) = stored {
        debug!("using stored token");
        return Ok(FigmaAuth::PersonalAccessToken(token));
    }
    Err(FigxError::Token("No Figma access token found".to_string()))
}
