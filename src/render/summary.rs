//! Markdown summary: annotated pseudo-HTML, a property list, and a tree.

use std::fmt::Write as FmtWrite;

use crate::figma::api_types::RawNode;
use crate::figma::decode::grow;
use crate::normalize::map_color;
use crate::quantize::format_number;

const IMPLEMENTATION_TIPS: &str = "\
- Use arbitrary values for exact sizes: `w-[320px]`, `h-[48px]`.
- Reproduce spacing with bracket utilities: `gap-[12px]`, `px-[24px]`, `py-[10px]`.
- Match corner radii and borders: `rounded-[8px]`, `border-[1px]`.
- Use hex colors directly when no palette color fits: `bg-[#0066ff]`, `text-[#1a1a1a]`.
- Map auto-layout frames to `flex` with `flex-row` or `flex-col`.
";

pub fn render_summary(node: &RawNode) -> String {
    let mut out = String::new();
    writeln!(out, "# {}\n", node.name).ok();

    out.push_str("## Component Structure\n\n```html\n");
    write_element(&mut out, node, 0);
    out.push_str("```\n\n");

    out.push_str("## Properties\n\n");
    for line in property_lines(node) {
        writeln!(out, "- {line}").ok();
    }
    out.push('\n');

    out.push_str("## Component Tree\n\n```\n");
    out.push_str(&render_component_tree(node));
    out.push_str("```\n\n");

    out.push_str("## Implementation Tips\n\n");
    out.push_str(IMPLEMENTATION_TIPS);
    out
}

/// ASCII tree with box-drawing connectors. The root is drawn as a last child.
pub fn render_component_tree(node: &RawNode) -> String {
    let mut out = String::new();
    write_tree_line(&mut out, node, "", true);
    out
}

fn write_tree_line(out: &mut String, node: &RawNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─ " } else { "├─ " };
    writeln!(out, "{prefix}{connector}{} ({})", node.name, node.node_type).ok();

    let child_prefix = format!("{prefix}{}", if is_last { "   " } else { "│  " });
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        grow(|| write_tree_line(out, child, &child_prefix, index + 1 == count));
    }
}

fn write_element(out: &mut String, node: &RawNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let tag = if node.is_text() { "span" } else { "div" };
    let attrs = data_attributes(node)
        .into_iter()
        .map(|(key, value)| format!(" {key}=\"{}\"", escape(&value)))
        .collect::<String>();

    if node.is_text() {
        let text = node.characters.as_deref().unwrap_or("");
        writeln!(out, "{indent}<{tag}{attrs}>{}</{tag}>", escape(text)).ok();
    } else if node.children.is_empty() {
        writeln!(out, "{indent}<{tag}{attrs}></{tag}>").ok();
    } else {
        writeln!(out, "{indent}<{tag}{attrs}>").ok();
        for child in &node.children {
            grow(|| write_element(out, child, depth + 1));
        }
        writeln!(out, "{indent}</{tag}>").ok();
    }
}

fn data_attributes(node: &RawNode) -> Vec<(String, String)> {
    let mut attrs = vec![
        ("data-figma-id".to_string(), node.id.clone()),
        ("data-figma-type".to_string(), node.node_type.clone()),
        ("data-figma-name".to_string(), node.name.clone()),
    ];

    if let Some(mode) = node.layout_mode.as_deref().filter(|m| *m != "NONE") {
        attrs.push(("data-layout".to_string(), mode.to_lowercase()));
        if let Some(gap) = node.item_spacing {
            attrs.push(("data-gap".to_string(), format_number(gap)));
        }
        let padding = [
            node.padding_top,
            node.padding_right,
            node.padding_bottom,
            node.padding_left,
        ];
        if padding.iter().any(Option::is_some) {
            let values: Vec<String> = padding
                .iter()
                .map(|p| format_number(p.unwrap_or(0.0)))
                .collect();
            attrs.push(("data-padding".to_string(), values.join(" ")));
        }
    }

    if node.is_text() {
        if let Some(style) = node.style.as_ref() {
            if let Some(family) = style.font_family.as_ref() {
                attrs.push(("data-font-family".to_string(), family.clone()));
            }
            if let Some(size) = style.font_size {
                attrs.push(("data-font-size".to_string(), format_number(size)));
            }
            if let Some(weight) = style.font_weight {
                attrs.push(("data-font-weight".to_string(), format_number(weight)));
            }
        }
    }

    if node.is_instance() {
        if let Some(id) = node.component_id.as_ref() {
            attrs.push(("data-component-id".to_string(), id.clone()));
        }
        for (key, prop) in node.component_properties.iter().flatten() {
            let prefix = match prop.property_type.as_str() {
                "VARIANT" => "data-variant",
                "INSTANCE_SWAP" => "data-swap",
                "BOOLEAN" => "data-prop",
                "TEXT" => "data-text",
                _ => continue,
            };
            attrs.push((format!("{prefix}-{}", camel_case(key)), prop.value_text()));
        }
    }

    attrs
}

fn property_lines(node: &RawNode) -> Vec<String> {
    let mut lines = vec![
        format!("**Type:** {}", node.node_type),
        format!("**ID:** {}", node.id),
    ];
    if let Some(bb) = node.absolute_bounding_box.as_ref() {
        lines.push(format!(
            "**Size:** {}px × {}px",
            format_number(bb.width),
            format_number(bb.height)
        ));
    }
    let background = node
        .primary_fill_color()
        .or(node.background_color.as_ref())
        .map(map_color);
    if let Some(color) = background {
        lines.push(format!("**Background:** {color}"));
    }
    if let Some(radius) = node.corner_radius {
        lines.push(format!("**Border Radius:** {}px", format_number(radius)));
    }
    if let Some(mode) = node.layout_mode.as_deref().filter(|m| *m != "NONE") {
        lines.push(format!(
            "**Layout:** {mode} (gap {}px)",
            format_number(node.item_spacing.unwrap_or(0.0))
        ));
    }
    if let Some(text) = node.characters.as_deref().filter(|_| node.is_text()) {
        lines.push(format!("**Text:** {text}"));
    }
    if !node.children.is_empty() {
        lines.push(format!("**Children:** {}", node.children.len()));
    }
    lines
}

/// `"Show Icon#12:3"` → `showIcon`. The `#id` suffix Figma appends to
/// non-variant property names is dropped.
pub fn camel_case(key: &str) -> String {
    let base = key.split('#').next().unwrap_or(key);
    let mut out = String::new();
    for (index, word) in base
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            if index == 0 {
                out.extend(first.to_lowercase());
            } else {
                out.extend(first.to_uppercase());
            }
            out.push_str(chars.as_str());
        }
    }
    out
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
