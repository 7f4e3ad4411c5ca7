use std::path::{Path, PathBuf};

use figx_lib::{Config, FigxError, OutputFormat};

/// Load config from a TOML file, central config, or return defaults.
/// Priority: explicit path > <config dir>/figx/config.toml > defaults
pub fn load_config(path: Option<&Path>) -> Result<Config, FigxError> {
    let cfg = Config::load(path).map_err(|e| {
        let loc = path
            .map(|p| p.display().to_string())
            .or_else(|| Config::central_config_path().map(|p| p.display().to_string()))
            .unwrap_or_else(|| "defaults".to_string());
        FigxError::Config(format!("Failed to read config {}: {}", loc, e))
    })?;

    cfg.validate().map_err(|e| {
        let prefix = path
            .map(|p| format!("Invalid config ({}): {}", p.display(), e))
            .unwrap_or_else(|| format!("Invalid config: {}", e));
        FigxError::Config(prefix)
    })?;
    Ok(cfg)
}

/// `--format` wins over the config file; neither means ai-prompt.
pub fn resolve_format(cli_format: Option<&str>, config: &Config) -> Result<OutputFormat, FigxError> {
    match cli_format {
        Some(raw) => raw.parse(),
        None => Ok(config.default_format()),
    }
}

/// `--output` wins; otherwise a configured output directory gets
/// `<slug>.<ext>`; otherwise stdout (`None`).
pub fn resolve_output(
    cli_output: Option<PathBuf>,
    config: &Config,
    slug: &str,
    format: OutputFormat,
) -> Option<PathBuf> {
    cli_output.or_else(|| {
        config
            .output
            .as_ref()
            .map(|dir| dir.join(format!("{slug}.{}", format.extension())))
    })
}

/// Single-line summary of the settings in effect (verbose mode).
pub fn format_effective_config(
    config: &Config,
    format: OutputFormat,
    config_source: Option<&Path>,
) -> String {
    let source = config_source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    format!(
        "Effective config [{source}]: format={}, api_base_url={}, timeout={}s, output_dir={}",
        format,
        config.api_base_url,
        config.timeout.as_secs(),
        config
            .output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "-".to_string())
    )
}
