//! Node lookup inside a raw document tree.

use std::collections::VecDeque;

use serde_json::Value;

/// Breadth-first search for the node with `id`, starting at `root`.
///
/// Works on the untyped JSON so the matched subtree can be handed on
/// without re-serialising. Shallower matches win over deeper ones.
pub fn find_node_by_id<'a>(root: &'a Value, id: &str) -> Option<&'a Value> {
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        if node.get("id").and_then(Value::as_str) == Some(id) {
            return Some(node);
        }
        if let Some(children) = node.get("children").and_then(Value::as_array) {
            queue.extend(children.iter());
        }
    }
    None
}
