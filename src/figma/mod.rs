//! Figma integration: REST client, response types, and node lookup.

pub mod api_types;
pub mod client;
pub mod decode;
pub mod lookup;

pub use api_types::RawNode;
pub use client::{map_figma_error, FigmaAuth, FigmaClient, FigmaError, DEFAULT_API_BASE_URL};
pub use decode::{from_value, parse_json};
pub use lookup::find_node_by_id;
