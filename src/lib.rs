//! figx library
//!
//! Turns Figma REST API documents into text a developer or a code-generating
//! model can work from: a narrative prompt, JSON, YAML, a bullet outline, or
//! a markdown summary with annotated pseudo-HTML.
//!
//! # Module Overview
//!
//! - [`figma`] - REST client, response types, and node lookup
//! - [`normalize`] - Raw node → [`NormalizedNode`] conversion
//! - [`quantize`] - Color formatting and utility-class ladders
//! - [`classify`] - Component-kind guesses and search hints
//! - [`optimize`] - Component-matching view with classes and theme suggestions
//! - [`render`] - Output renderers
//! - [`extract`] - Fetch, resolve, and render pipeline
//! - [`config`] / [`token`] - Configuration file and stored token
//!
//! # Example
//!
//! ```no_run
//! use figx_lib::{extract, render_extraction, FigmaSource, RenderOptions, OutputFormat};
//!
//! # async fn example() -> figx_lib::Result<()> {
//! let source = FigmaSource::File { path: "saved-response.json".into(), node_id: None };
//! let extraction = extract(&source, None, None).await?;
//! let text = render_extraction(
//!     &extraction,
//!     RenderOptions { format: OutputFormat::Summary, ..Default::default() },
//! )?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod figma;
pub mod normalize;
pub mod optimize;
pub mod progress;
pub mod quantize;
pub mod render;
pub mod resource;
pub mod token;
pub mod types;

pub use classify::{classify, hints};
pub use config::Config;
pub use error::{ErrorCategory, ErrorPayload, FigxError, Result};
pub use extract::{
    extract, render_extraction, resolve_document, Extraction, FigmaSource, RenderOptions,
};
pub use figma::{find_node_by_id, FigmaAuth, FigmaClient, FigmaError, RawNode};
pub use normalize::normalize;
pub use optimize::optimize;
pub use progress::{log_progress, ProgressCallback};
pub use render::OutputFormat;
pub use resource::{parse_figma_target, FigmaTarget, ResourceParseError};
pub use token::{mask_token, resolve_auth, TokenStore};
pub use types::{NormalizedNode, Optimized, OptimizedComponent};
