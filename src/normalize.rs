//! Raw Figma node → [`NormalizedNode`] conversion.

use crate::figma::api_types::{
    FigmaBoundingBox, FigmaColor, FigmaEffect, FigmaPaint, FigmaTypeStyle, FigmaVector, RawNode,
};
use crate::figma::decode::grow;
use crate::quantize::format_color;
use crate::types::{
    CornerRadii, Effect, GradientStop, Layout, NormalizedNode, Padding, Paint, Position, Size,
    TextStyle, Vector,
};

/// Normalize a raw node and its subtree.
///
/// Never fails: fields that are missing on the input are simply absent on
/// the output. Children keep their original order.
pub fn normalize(node: &RawNode) -> NormalizedNode {
    let mut out = NormalizedNode::bare(&node.id, &node.name, &node.node_type);
    out.visible = node.visible != Some(false);

    if let Some(bb) = node.absolute_bounding_box.as_ref() {
        let (position, size) = map_bounding_box(bb);
        out.position = Some(position);
        out.size = Some(size);
    }

    out.rotation = node.rotation.filter(|r| *r != 0.0);
    out.background_color = node.background_color.as_ref().map(map_color);

    if !node.fills.is_empty() {
        out.fills = Some(node.fills.iter().map(map_paint).collect());
    }

    if !node.strokes.is_empty() {
        out.strokes = Some(node.strokes.iter().map(map_paint).collect());
        out.stroke_weight = node.stroke_weight;
        out.stroke_align = node.stroke_align.clone();
    }

    match map_corner_radii(node) {
        Some(radii) => out.corner_radii = Some(radii),
        None => out.corner_radius = node.corner_radius,
    }

    if !node.effects.is_empty() {
        out.effects = Some(node.effects.iter().map(map_effect).collect());
    }

    out.layout = map_layout(node);

    if node.is_text() {
        out.text_content = node.characters.clone();
        out.text_style = node.style.as_ref().map(map_typography);
    }

    if node.is_instance() {
        out.component_id = node.component_id.clone();
        out.component_properties = node.component_properties.clone();
    }

    out.constraints = node.constraints.clone();

    if !node.children.is_empty() {
        out.children = Some(
            node.children
                .iter()
                .map(|child| grow(|| normalize(child)))
                .collect(),
        );
    }

    out
}

/// Map a Figma bounding box to position and size.
pub fn map_bounding_box(bb: &FigmaBoundingBox) -> (Position, Size) {
    (
        Position { x: bb.x, y: bb.y },
        Size {
            width: bb.width,
            height: bb.height,
        },
    )
}

pub fn map_color(color: &FigmaColor) -> String {
    format_color(color.r, color.g, color.b, color.a)
}

fn map_vector(v: &FigmaVector) -> Vector {
    Vector { x: v.x, y: v.y }
}

/// Map Figma paint data (fills and strokes share the shape).
pub fn map_paint(paint: &FigmaPaint) -> Paint {
    Paint {
        paint_type: paint.paint_type.clone(),
        color: paint.color.as_ref().map(map_color),
        opacity: paint.opacity,
        gradient_stops: paint.gradient_stops.as_ref().map(|stops| {
            stops
                .iter()
                .map(|stop| GradientStop {
                    position: stop.position,
                    color: map_color(&stop.color),
                })
                .collect()
        }),
        gradient_handle_positions: paint
            .gradient_handle_positions
            .as_ref()
            .map(|handles| handles.iter().map(map_vector).collect()),
        image_ref: paint.image_ref.clone(),
        scale_mode: paint.scale_mode.clone(),
    }
}

pub fn map_effect(effect: &FigmaEffect) -> Effect {
    Effect {
        effect_type: effect.effect_type.clone(),
        color: effect.color.as_ref().map(map_color),
        offset: effect.offset.as_ref().map(map_vector),
        radius: effect.radius,
        spread: effect.spread,
        visible: effect.is_visible(),
    }
}

/// Per-corner radii, present when any individual corner is set.
pub fn map_corner_radii(node: &RawNode) -> Option<CornerRadii> {
    let corners = [
        node.top_left_radius,
        node.top_right_radius,
        node.bottom_right_radius,
        node.bottom_left_radius,
    ];
    if corners.iter().all(Option::is_none) {
        return None;
    }
    let [top_left, top_right, bottom_right, bottom_left] = corners.map(|c| c.unwrap_or(0.0));
    Some(CornerRadii {
        top_left,
        top_right,
        bottom_right,
        bottom_left,
    })
}

/// Auto-layout block; frames with `layoutMode: NONE` have none.
pub fn map_layout(node: &RawNode) -> Option<Layout> {
    let mode = node.layout_mode.as_deref().filter(|m| *m != "NONE")?;
    Some(Layout {
        mode: mode.to_string(),
        spacing: node.item_spacing.unwrap_or(0.0),
        padding: Padding {
            top: node.padding_top.unwrap_or(0.0),
            right: node.padding_right.unwrap_or(0.0),
            bottom: node.padding_bottom.unwrap_or(0.0),
            left: node.padding_left.unwrap_or(0.0),
        },
        wrap: node
            .layout_wrap
            .clone()
            .unwrap_or_else(|| "NO_WRAP".to_string()),
        primary_axis_sizing_mode: node.primary_axis_sizing_mode.clone(),
        counter_axis_sizing_mode: node.counter_axis_sizing_mode.clone(),
        primary_axis_align_items: node.primary_axis_align_items.clone(),
        counter_axis_align_items: node.counter_axis_align_items.clone(),
    })
}

/// Map Figma typography style to the normalized text style.
pub fn map_typography(style: &FigmaTypeStyle) -> TextStyle {
    TextStyle {
        font_family: style.font_family.clone(),
        font_size: style.font_size,
        font_weight: style.font_weight,
        line_height: style.line_height_px,
        letter_spacing: style.letter_spacing,
        text_align: style.text_align_horizontal.clone(),
        vertical_align: style.text_align_vertical.clone(),
        text_case: style.text_case.clone(),
        text_decoration: style.text_decoration.clone(),
    }
}
