//! Fetch → resolve → normalize/optimize → render.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use serde_json::{json, Value};

use crate::figma::{
    find_node_by_id, from_value, map_figma_error, parse_json, FigmaClient, FigmaError, RawNode,
};
use crate::normalize::normalize;
use crate::optimize::{guide::slugify, optimize};
use crate::progress::{report, ProgressCallback};
use crate::render::{
    render_ai_prompt, render_bullet, render_json, render_optimized_summary, render_summary,
    render_yaml, OutputFormat,
};
use crate::resource::FigmaTarget;
use crate::types::Optimized;
use crate::{FigxError, Result};

/// Where the raw response comes from.
#[derive(Debug, Clone)]
pub enum FigmaSource {
    /// Live REST API.
    Api(FigmaTarget),
    /// A previously saved file or nodes response (or a bare node).
    File {
        path: PathBuf,
        node_id: Option<String>,
    },
}

/// A resolved document plus what the optimizer needs alongside it.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The selected node as returned by the API.
    pub document: Value,
    /// Typed view of `document`.
    pub node: RawNode,
    /// Response envelope handed to the optimizer.
    pub optimizer_input: Value,
}

impl Extraction {
    pub fn from_envelope(envelope: Value, node_id: Option<&str>) -> Result<Self> {
        let resolved = resolve(&envelope, node_id).map_err(ResolveError::into_figx)?;
        Self::from_resolved(envelope, resolved)
    }

    fn from_resolved(envelope: Value, resolved: Resolved) -> Result<Self> {
        let node: RawNode = from_value(resolved.document.clone())?;
        let optimizer_input = if resolved.is_envelope_document {
            envelope
        } else {
            json!({
                "document": resolved.document.clone(),
                "styles": resolved.styles.unwrap_or_else(|| json!({})),
            })
        };
        Ok(Self {
            document: resolved.document,
            node,
            optimizer_input,
        })
    }

    /// File-name friendly form of the node name.
    pub fn slug(&self) -> String {
        let slug = slugify(&self.node.name);
        if slug.is_empty() {
            "figma-node".to_string()
        } else {
            slug
        }
    }
}

/// Load the raw response and resolve the requested node.
pub async fn extract(
    source: &FigmaSource,
    client: Option<&FigmaClient>,
    progress: Option<&ProgressCallback>,
) -> Result<Extraction> {
    match source {
        FigmaSource::File { path, node_id } => {
            report(progress, &format!("Reading {}", path.display()));
            let raw = fs::read(path)?;
            let envelope = parse_json(&raw)?;
            Extraction::from_envelope(envelope, node_id.as_deref())
        }
        FigmaSource::Api(target) => {
            let client = client.ok_or_else(|| {
                FigxError::Unknown("a Figma client is required for API extraction".to_string())
            })?;
            fetch_from_api(client, target, progress).await
        }
    }
}

async fn fetch_from_api(
    client: &FigmaClient,
    target: &FigmaTarget,
    progress: Option<&ProgressCallback>,
) -> Result<Extraction> {
    let Some(node_id) = target.node_id.as_deref() else {
        report(progress, &format!("Fetching file {}", target.file_key));
        let envelope = client
            .get_file(&target.file_key)
            .await
            .map_err(map_figma_error)?;
        return Extraction::from_envelope(envelope, None);
    };

    report(
        progress,
        &format!("Fetching node {node_id} from file {}", target.file_key),
    );
    let envelope = client
        .get_file_nodes(&target.file_key, &[node_id])
        .await
        .map_err(map_figma_error)?;

    match resolve(&envelope, Some(node_id)) {
        Ok(resolved) => Extraction::from_resolved(envelope, resolved),
        Err(ResolveError::NodeNotFound(_)) => {
            report(
                progress,
                &format!("Node {node_id} missing from nodes response; searching the whole file"),
            );
            let file = client
                .get_file(&target.file_key)
                .await
                .map_err(map_figma_error)?;
            Extraction::from_envelope(file, Some(node_id))
        }
        Err(err) => Err(err.into_figx()),
    }
}

#[derive(Debug)]
struct Resolved {
    document: Value,
    styles: Option<Value>,
    /// The document is exactly what the envelope's own shape points at.
    is_envelope_document: bool,
}

#[derive(Debug)]
enum ResolveError {
    NodeNotFound(String),
    UnrecognizedShape,
}

impl ResolveError {
    fn into_figx(self) -> FigxError {
        match self {
            ResolveError::NodeNotFound(id) => map_figma_error(FigmaError::NodeNotFound(id)),
            ResolveError::UnrecognizedShape => FigxError::config(
                "Input is not a Figma file, nodes, or node response (no document found)",
            ),
        }
    }
}

/// Pick the document node out of any supported response shape.
///
/// Shapes: `{document, styles}`, `{nodes: {id: {document, styles}}}`, or a
/// bare node with `id` and `type`. With `node_id`, the node is looked up by
/// id (breadth-first) when the envelope does not address it directly.
pub fn resolve_document(envelope: &Value, node_id: Option<&str>) -> Result<Value> {
    resolve(envelope, node_id)
        .map(|r| r.document)
        .map_err(ResolveError::into_figx)
}

fn resolve(envelope: &Value, node_id: Option<&str>) -> std::result::Result<Resolved, ResolveError> {
    if let Some(nodes) = envelope.get("nodes").and_then(Value::as_object) {
        let entry = match node_id {
            Some(id) => nodes.get(id).filter(|e| !e.is_null()),
            None => nodes.values().find(|e| !e.is_null()),
        };
        let Some(entry) = entry else {
            return Err(ResolveError::NodeNotFound(
                node_id.unwrap_or("<first>").to_string(),
            ));
        };
        let document = entry
            .get("document")
            .filter(|d| d.is_object())
            .ok_or(ResolveError::UnrecognizedShape)?;
        return Ok(Resolved {
            document: document.clone(),
            styles: entry.get("styles").cloned(),
            is_envelope_document: nodes.len() == 1,
        });
    }

    let (root, styles) = if let Some(document) = envelope.get("document").filter(|d| d.is_object()) {
        (document, envelope.get("styles").cloned())
    } else if envelope.get("id").is_some() && envelope.get("type").is_some() {
        (envelope, None)
    } else {
        return Err(ResolveError::UnrecognizedShape);
    };

    let is_root = |id: &str| root.get("id").and_then(Value::as_str) == Some(id);
    match node_id {
        None => Ok(Resolved {
            document: root.clone(),
            styles,
            is_envelope_document: envelope.get("document").is_some(),
        }),
        Some(id) if is_root(id) => Ok(Resolved {
            document: root.clone(),
            styles,
            is_envelope_document: envelope.get("document").is_some(),
        }),
        Some(id) => {
            debug!("searching document for node {id}");
            let found = find_node_by_id(root, id)
                .ok_or_else(|| ResolveError::NodeNotFound(id.to_string()))?;
            Ok(Resolved {
                document: found.clone(),
                styles,
                is_envelope_document: false,
            })
        }
    }
}

/// How an extraction is turned into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Use the optimizer view (summary format only).
    pub optimize: bool,
    /// Serialize the raw document instead of the normalized node.
    pub raw: bool,
}

pub fn render_extraction(extraction: &Extraction, options: RenderOptions) -> Result<String> {
    if options.optimize && options.format != OutputFormat::Summary {
        return Err(FigxError::config(format!(
            "--optimize is only supported with --format summary (got {})",
            options.format
        )));
    }

    match options.format {
        OutputFormat::AiPrompt => {
            if options.raw {
                warn!("--raw has no effect on the ai-prompt format");
            }
            Ok(render_ai_prompt(&normalize(&extraction.node)))
        }
        OutputFormat::Json if options.raw => render_json(&extraction.document),
        OutputFormat::Json => render_json(&normalize(&extraction.node)),
        OutputFormat::Yaml if options.raw => render_yaml(&extraction.document),
        OutputFormat::Yaml => render_yaml(&normalize(&extraction.node)),
        OutputFormat::Bullet if options.raw => Ok(render_bullet(&extraction.document)),
        OutputFormat::Bullet => {
            let value = serde_json::to_value(normalize(&extraction.node))?;
            Ok(render_bullet(&value))
        }
        OutputFormat::Summary if options.optimize => {
            match optimize(&extraction.optimizer_input) {
                Optimized::Component(component) => Ok(render_optimized_summary(&component)),
                Optimized::Passthrough(_) => {
                    warn!("optimizer did not recognise the response; using the plain summary");
                    Ok(render_summary(&extraction.node))
                }
            }
        }
        OutputFormat::Summary => Ok(render_summary(&extraction.node)),
    }
}
