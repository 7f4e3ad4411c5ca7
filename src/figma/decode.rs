//! Support for arbitrarily deep Figma documents.
//!
//! Every node level costs two JSON levels (the object and its `children`
//! array), so serde_json's default recursion limit rejects files nested
//! about 63 nodes deep. These helpers lift the limit and grow the stack on
//! demand instead; tree walks elsewhere recurse through [`grow`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Parse a response body with no nesting limit.
pub fn parse_json(bytes: &[u8]) -> serde_json::Result<Value> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut de))?;
    de.end()?;
    Ok(value)
}

const RED_ZONE: usize = 64 * 1024;
const STACK_CHUNK: usize = 1024 * 1024;

/// Run one level of a tree walk, moving to a fresh stack segment when the
/// current one is nearly used up.
pub(crate) fn grow<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_CHUNK, f)
}

/// `serde_json::from_value` with on-demand stack growth.
pub fn from_value<T: DeserializeOwned>(value: Value) -> serde_json::Result<T> {
    T::deserialize(serde_stacker::Deserializer::new(value))
}
