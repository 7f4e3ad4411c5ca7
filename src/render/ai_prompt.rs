//! Narrative description of a normalized tree, addressed to a code generator.

use std::fmt::Write as FmtWrite;

use crate::figma::decode::grow;
use crate::quantize::format_number;
use crate::types::{Effect, Layout, NormalizedNode, Paint, TextStyle};

const PREAMBLE: &str =
    "Create a UI component that matches the following Figma design specification:";

const POSTSCRIPT: &str = "Implement this design as a React component styled with Tailwind CSS. \
Match the sizes, colors, spacing, and typography above as closely as the utility classes allow, \
and use arbitrary values (for example w-[120px]) where no standard class fits.";

pub fn render_ai_prompt(node: &NormalizedNode) -> String {
    let mut out = String::new();
    out.push_str(PREAMBLE);
    out.push_str("\n\n");
    out.push_str(&generate_node_description(node, 0));
    out.push('\n');
    out.push_str(POSTSCRIPT);
    out.push('\n');
    out
}

fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// One block per node; lines appear only for fields the node carries.
pub fn generate_node_description(node: &NormalizedNode, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let mut out = String::new();
    let mut line = |text: String| {
        writeln!(out, "{indent}{text}").ok();
    };

    line(format!("Type: {}", node.node_type));
    line(format!("Name: {}", node.name));

    if let Some(size) = node.size {
        line(format!("Width: {}", px(size.width)));
        line(format!("Height: {}", px(size.height)));
    }
    if let Some(color) = node.background_color.as_deref() {
        line(format!("Background Color: {color}"));
    }
    if let Some(radius) = node.corner_radius {
        line(format!("Border Radius: {}", px(radius)));
    } else if let Some(radii) = node.corner_radii {
        line(format!(
            "Border Radius: {} {} {} {}",
            px(radii.top_left),
            px(radii.top_right),
            px(radii.bottom_right),
            px(radii.bottom_left)
        ));
    }

    if let Some(fills) = node.fills.as_deref() {
        line("Fills:".to_string());
        for fill in fills {
            line(format!("  - {}", describe_paint(fill)));
        }
    }
    if let Some(strokes) = node.strokes.as_deref() {
        match node.stroke_weight {
            Some(weight) => line(format!("Strokes ({}):", px(weight))),
            None => line("Strokes:".to_string()),
        }
        for stroke in strokes {
            line(format!("  - {}", describe_paint(stroke)));
        }
    }
    if let Some(effects) = node.effects.as_deref() {
        line("Effects:".to_string());
        for effect in effects {
            line(format!("  - {}", describe_effect(effect)));
        }
    }
    if let Some(layout) = node.layout.as_ref() {
        line(format!("Layout: {}", describe_layout(layout)));
    }

    if let Some(text) = node.text_content.as_deref() {
        line(format!("Text: \"{text}\""));
    }
    if let Some(style) = node.text_style.as_ref() {
        for text in describe_text_style(style) {
            line(text);
        }
    }

    if let Some(props) = node.component_properties.as_ref().filter(|p| !p.is_empty()) {
        line("Component Properties:".to_string());
        for (key, prop) in props {
            line(format!("  - {key}: {}", prop.value_text()));
        }
    }

    let children = node.children();
    if !children.is_empty() {
        line("Contains:".to_string());
        for child in children {
            out.push_str(&grow(|| generate_node_description(child, depth + 1)));
        }
    }

    out
}

fn describe_paint(paint: &Paint) -> String {
    let mut parts = vec![paint.paint_type.clone()];
    if let Some(color) = paint.color.as_deref() {
        parts.push(color.to_string());
    }
    if let Some(stops) = paint.gradient_stops.as_deref() {
        let stops: Vec<String> = stops
            .iter()
            .map(|s| format!("{} at {}", s.color, format_number(s.position)))
            .collect();
        parts.push(format!("stops [{}]", stops.join(", ")));
    }
    if let Some(image) = paint.image_ref.as_deref() {
        parts.push(format!("image {image}"));
    }
    if let Some(opacity) = paint.opacity {
        parts.push(format!("opacity {}", format_number(opacity)));
    }
    parts.join(", ")
}

fn describe_effect(effect: &Effect) -> String {
    let mut parts = vec![effect.effect_type.clone()];
    if let Some(color) = effect.color.as_deref() {
        parts.push(color.to_string());
    }
    if let Some(offset) = effect.offset {
        parts.push(format!("offset {} {}", px(offset.x), px(offset.y)));
    }
    if let Some(radius) = effect.radius {
        parts.push(format!("blur {}", px(radius)));
    }
    if let Some(spread) = effect.spread {
        parts.push(format!("spread {}", px(spread)));
    }
    if !effect.visible {
        parts.push("hidden".to_string());
    }
    parts.join(", ")
}

fn describe_layout(layout: &Layout) -> String {
    let p = layout.padding;
    let mut parts = vec![
        layout.mode.clone(),
        format!("spacing {}", px(layout.spacing)),
        format!(
            "padding {} {} {} {}",
            px(p.top),
            px(p.right),
            px(p.bottom),
            px(p.left)
        ),
    ];
    if layout.wrap != "NO_WRAP" {
        parts.push(layout.wrap.clone());
    }
    if let Some(primary) = layout.primary_axis_align_items.as_deref() {
        parts.push(format!("main axis {primary}"));
    }
    if let Some(counter) = layout.counter_axis_align_items.as_deref() {
        parts.push(format!("cross axis {counter}"));
    }
    parts.join(", ")
}

fn describe_text_style(style: &TextStyle) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(family) = style.font_family.as_deref() {
        lines.push(format!("Font Family: {family}"));
    }
    if let Some(size) = style.font_size {
        lines.push(format!("Font Size: {}", px(size)));
    }
    if let Some(weight) = style.font_weight {
        lines.push(format!("Font Weight: {}", format_number(weight)));
    }
    if let Some(line_height) = style.line_height {
        lines.push(format!("Line Height: {}", px(line_height)));
    }
    if let Some(spacing) = style.letter_spacing {
        lines.push(format!("Letter Spacing: {}", px(spacing)));
    }
    if let Some(align) = style.text_align.as_deref() {
        lines.push(format!("Text Align: {align}"));
    }
    if let Some(align) = style.vertical_align.as_deref() {
        lines.push(format!("Vertical Align: {align}"));
    }
    if let Some(case) = style.text_case.as_deref() {
        lines.push(format!("Text Case: {case}"));
    }
    if let Some(decoration) = style.text_decoration.as_deref() {
        lines.push(format!("Text Decoration: {decoration}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figma::api_types::RawNode;
    use crate::normalize::normalize;
    use serde_json::json;

    fn normalized(value: serde_json::Value) -> NormalizedNode {
        let raw: RawNode = serde_json::from_value(value).expect("raw node");
        normalize(&raw)
    }

    #[test]
    fn minimal_node_has_only_type_and_name() {
        let node = NormalizedNode::bare("1", "Empty", "GROUP");
        assert_eq!(generate_node_description(&node, 0), "Type: GROUP\nName: Empty\n");
    }

    #[test]
    fn prompt_is_wrapped_in_preamble_and_postscript() {
        let node = NormalizedNode::bare("1", "Empty", "GROUP");
        let prompt = render_ai_prompt(&node);
        assert!(prompt.starts_with(PREAMBLE));
        assert!(prompt.trim_end().ends_with("where no standard class fits."));
        assert!(prompt.contains("React"));
        assert!(prompt.contains("Tailwind CSS"));
    }

    #[test]
    fn children_are_indented_two_spaces_per_level() {
        let node = normalized(json!({
            "id": "1", "name": "Root", "type": "FRAME",
            "children": [{"id": "2", "name": "Inner", "type": "FRAME",
                "children": [{"id": "3", "name": "Leaf", "type": "TEXT", "characters": "Hi"}]}]
        }));
        let text = generate_node_description(&node, 0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Type: FRAME",
                "Name: Root",
                "Contains:",
                "  Type: FRAME",
                "  Name: Inner",
                "  Contains:",
                "    Type: TEXT",
                "    Name: Leaf",
                "    Text: \"Hi\"",
            ]
        );
    }

    #[test]
    fn per_corner_radius_and_layout_lines() {
        let node = normalized(json!({
            "id": "1", "name": "Tab", "type": "FRAME",
            "topLeftRadius": 8, "topRightRadius": 8,
            "layoutMode": "VERTICAL", "itemSpacing": 4, "paddingTop": 12,
            "counterAxisAlignItems": "CENTER"
        }));
        let text = generate_node_description(&node, 0);
        assert!(text.contains("Border Radius: 8px 8px 0px 0px\n"));
        assert!(text.contains(
            "Layout: VERTICAL, spacing 4px, padding 12px 0px 0px 0px, cross axis CENTER\n"
        ));
    }

    #[test]
    fn instance_properties_are_listed() {
        let node = normalized(json!({
            "id": "1", "name": "Btn", "type": "INSTANCE", "componentId": "2:2",
            "componentProperties": {
                "Variant": {"type": "VARIANT", "value": "Primary"},
                "Disabled": {"type": "BOOLEAN", "value": false}
            }
        }));
        let text = generate_node_description(&node, 0);
        assert!(text.contains("Component Properties:\n  - Variant: Primary\n  - Disabled: false\n"));
    }
}
