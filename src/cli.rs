use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "figx")]
#[command(
    version,
    about = "Extract Figma designs as prompts, JSON, YAML, outlines, or markdown summaries",
    long_about = "figx\n\nCommands:\n- extract: fetch a Figma file or node and render it as ai-prompt, json, yaml, bullet, or summary text.\n- token: manage the locally stored Figma personal access token.\n\nUse --help on any subcommand for details."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, short, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Optional config file (TOML) with defaults for format/output/api_base_url/timeout; CLI flags override config"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract a Figma file or node and render it as text
    Extract {
        #[arg(
            value_name = "URL",
            help = "Figma URL (file/design/proto, optionally with ?node-id=) or bare file key",
            required_unless_present = "from_json"
        )]
        url: Option<String>,

        #[arg(
            long,
            short,
            help = "Output format: ai-prompt, json, yaml, bullet, summary (default from config, else ai-prompt)"
        )]
        format: Option<String>,

        #[arg(long, short, help = "Output file path (stdout if omitted)")]
        output: Option<PathBuf>,

        #[arg(long, help = "Node id to extract (overrides node-id in the URL)")]
        node_id: Option<String>,

        #[arg(
            long,
            help = "Use the component-matching view (summary format only)"
        )]
        optimize: bool,

        #[arg(
            long,
            help = "Serialize the raw Figma document instead of the normalized tree (json/yaml/bullet)"
        )]
        raw: bool,

        #[arg(
            long,
            value_name = "PATH",
            help = "Read a saved Figma API response instead of calling the API"
        )]
        from_json: Option<PathBuf>,

        #[arg(
            long,
            value_name = "TOKEN",
            help = "Figma access token (overrides FIGMA_TOKEN and the stored token)"
        )]
        token: Option<String>,
    },

    /// Manage the stored Figma personal access token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
pub enum TokenAction {
    /// Save a token (reads one line from stdin when TOKEN is omitted)
    Set { token: Option<String> },
    /// Show the stored token, masked
    Show,
    /// Delete the stored token
    Clear,
    /// Print where the token is stored
    Path,
}

pub fn parse() -> Cli {
    Cli::parse()
}
