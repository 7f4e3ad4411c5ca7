mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use cli::Commands;
use commands::{run_extract, run_token, ExtractArgs};
use env_logger::Env;

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let args = cli::parse();
    init_logging(args.verbose);

    match args.command {
        Commands::Extract {
            url,
            format,
            output,
            node_id,
            optimize,
            raw,
            from_json,
            token,
        } => {
            run_extract(
                args.config,
                ExtractArgs {
                    url,
                    format,
                    output,
                    node_id,
                    optimize,
                    raw,
                    from_json,
                    token,
                },
            )
            .await
        }
        Commands::Token { action } => run_token(action),
    }
}

/// `RUST_LOG` wins; otherwise warnings, or progress with `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
