use std::path::PathBuf;
use std::process::ExitCode;

use figx_lib::figma::map_figma_error;
use figx_lib::{
    extract, log_progress, parse_figma_target, render_extraction, resolve_auth, FigmaClient,
    FigmaSource, FigxError, OutputFormat, RenderOptions, TokenStore,
};
use log::{debug, info};

use crate::formatting::{render_error, write_output};
use crate::settings::{format_effective_config, load_config, resolve_format, resolve_output};

/// Flags of the `extract` subcommand.
pub struct ExtractArgs {
    pub url: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
    pub node_id: Option<String>,
    pub optimize: bool,
    pub raw: bool,
    pub from_json: Option<PathBuf>,
    pub token: Option<String>,
}

/// Run the extract command.
pub async fn run_extract(config_path: Option<PathBuf>, args: ExtractArgs) -> ExitCode {
    match extract_to_output(config_path, args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => render_error(err),
    }
}

async fn extract_to_output(config_path: Option<PathBuf>, args: ExtractArgs) -> Result<(), FigxError> {
    let config = load_config(config_path.as_deref())?;
    let format = resolve_format(args.format.as_deref(), &config)?;
    info!(
        "{}",
        format_effective_config(&config, format, config_path.as_deref())
    );

    let options = RenderOptions {
        format,
        optimize: args.optimize,
        raw: args.raw,
    };
    // Reject bad flag combinations before any network traffic.
    if options.optimize && format != OutputFormat::Summary {
        return Err(FigxError::config(format!(
            "--optimize is only supported with --format summary (got {format})"
        )));
    }

    let source = build_source(&args)?;
    let client = match &source {
        FigmaSource::Api(_) => {
            let store = TokenStore::default_location().ok();
            let auth = resolve_auth(args.token.as_deref(), store.as_ref())?;
            debug!("authenticating with {:?}", auth);
            Some(
                FigmaClient::new(auth, config.api_base_url.clone(), config.timeout)
                    .map_err(map_figma_error)?,
            )
        }
        FigmaSource::File { .. } => None,
    };

    let progress = log_progress();
    let extraction = extract(&source, client.as_ref(), Some(&progress)).await?;
    let text = render_extraction(&extraction, options)?;

    let output = resolve_output(args.output, &config, &extraction.slug(), format);
    write_output(&text, output.as_deref())?;
    if let Some(path) = output {
        info!("Wrote {} output to {}", format, path.display());
    }
    Ok(())
}

fn build_source(args: &ExtractArgs) -> Result<FigmaSource, FigxError> {
    // URLs carry `1-2`; the API and documents use `1:2`.
    let node_id = args.node_id.as_deref().map(|id| id.replace('-', ":"));
    if let Some(path) = &args.from_json {
        return Ok(FigmaSource::File {
            path: path.clone(),
            node_id,
        });
    }

    let url = args
        .url
        .as_deref()
        .ok_or_else(|| FigxError::config("A Figma URL or --from-json is required"))?;
    let mut target = parse_figma_target(url)?;
    if node_id.is_some() {
        target.node_id = node_id;
    }
    Ok(FigmaSource::Api(target))
}
