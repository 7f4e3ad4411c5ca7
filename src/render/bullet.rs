//! Nested bullet outline of any serializable value.

use std::fmt::Write as FmtWrite;

use serde_json::Value;

use crate::figma::decode::grow;

/// Render a JSON value as a markdown bullet list.
///
/// Objects become `- key: value` lines (nested objects and arrays open a
/// sub-list), array items become `- Item N:` headers, and empty containers
/// render as `[]` / `{}`.
pub fn render_bullet(value: &Value) -> String {
    let mut out = String::new();
    match value {
        Value::Object(_) | Value::Array(_) if !is_empty_container(value) => {
            write_children(&mut out, value, 0)
        }
        scalar => {
            writeln!(out, "- {}", scalar_text(scalar)).ok();
        }
    }
    out
}

fn write_children(out: &mut String, value: &Value, depth: usize) {
    let indent = "  ".repeat(depth);
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                write_entry(out, &indent, key, child, depth);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if is_container(item) && !is_empty_container(item) {
                    writeln!(out, "{indent}- Item {}:", index + 1).ok();
                    grow(|| write_children(out, item, depth + 1));
                } else {
                    writeln!(out, "{indent}- {}", scalar_text(item)).ok();
                }
            }
        }
        _ => {}
    }
}

fn write_entry(out: &mut String, indent: &str, key: &str, value: &Value, depth: usize) {
    if is_container(value) && !is_empty_container(value) {
        writeln!(out, "{indent}- {key}:").ok();
        grow(|| write_children(out, value, depth + 1));
    } else {
        writeln!(out, "{indent}- {key}: {}", scalar_text(value)).ok();
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(_) => "[]".to_string(),
        Value::Object(_) => "{}".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_and_arrays_nest() {
        let value = json!({
            "name": "Card",
            "visible": true,
            "size": {"width": 100, "height": 40},
            "fills": [{"type": "SOLID", "color": "#ffffff"}],
            "tags": ["a", 2]
        });
        let expected = "\
- name: Card
- visible: true
- size:
  - width: 100
  - height: 40
- fills:
  - Item 1:
    - type: SOLID
    - color: #ffffff
- tags:
  - a
  - 2
";
        assert_eq!(render_bullet(&value), expected);
    }

    #[test]
    fn empty_containers_and_null_are_literal() {
        let value = json!({"children": [], "props": {}, "parent": null});
        assert_eq!(
            render_bullet(&value),
            "- children: []\n- props: {}\n- parent: null\n"
        );
    }

    #[test]
    fn scalar_root_is_a_single_bullet() {
        assert_eq!(render_bullet(&json!(null)), "- null\n");
        assert_eq!(render_bullet(&json!({})), "- {}\n");
    }
}
