//! Utility-class generation from raw node fields.

use crate::figma::api_types::{FigmaEffect, RawNode};
use crate::quantize::{
    border_radius_class, border_width_class, box_size_class, color_class, font_family_class,
    font_size_class, font_weight_class, format_number, letter_spacing_class, line_height_class,
    spacing_class, text_align_class, Rgb8,
};

use super::{background_paint, border_paint};

fn arbitrary(prefix: &str, px: f64) -> String {
    format!("{prefix}-[{}px]", format_number(px))
}

fn spacing_token(prefix: &str, px: f64) -> String {
    match spacing_class(px) {
        Some(class) => format!("{prefix}-{class}"),
        None => arbitrary(prefix, px),
    }
}

fn color_token(prefix: &str, rgb: Rgb8, alpha: f64) -> String {
    match color_class(rgb, alpha) {
        Some(class) => format!("{prefix}-{class}"),
        None => format!("{prefix}-[{}]", rgb.to_hex()),
    }
}

fn radius_token(prefix: &str, px: f64) -> String {
    match border_radius_class(px) {
        "DEFAULT" => prefix.to_string(),
        class => format!("{prefix}-{class}"),
    }
}

/// Container classes: flex layout, padding, size, background, radius,
/// border, and shadow, in that order.
pub fn tailwind_classes(node: &RawNode) -> Vec<String> {
    let mut classes = Vec::new();

    match node.layout_mode.as_deref() {
        Some("HORIZONTAL") => classes.extend(["flex".to_string(), "flex-row".to_string()]),
        Some("VERTICAL") => classes.extend(["flex".to_string(), "flex-col".to_string()]),
        _ => {}
    }
    if node.layout_wrap.as_deref() == Some("WRAP") {
        classes.push("flex-wrap".to_string());
    }
    if let Some(gap) = node.item_spacing.filter(|g| *g > 0.0) {
        classes.push(spacing_token("gap", gap));
    }
    if let Some(justify) = node.primary_axis_align_items.as_deref().and_then(justify_class) {
        classes.push(justify.to_string());
    }
    if let Some(items) = node.counter_axis_align_items.as_deref().and_then(items_class) {
        classes.push(items.to_string());
    }

    classes.extend(padding_classes(node));

    if let Some(bb) = node.absolute_bounding_box.as_ref() {
        classes.push(match box_size_class(bb.width) {
            Some(class) => format!("w-{class}"),
            None => arbitrary("w", bb.width),
        });
        classes.push(match box_size_class(bb.height) {
            Some(class) => format!("h-{class}"),
            None => arbitrary("h", bb.height),
        });
    }

    if !node.is_text() {
        if let Some((color, alpha)) = background_paint(node) {
            classes.push(color_token(
                "bg",
                Rgb8::from_unit(color.r, color.g, color.b),
                alpha,
            ));
        }
    }

    classes.extend(radius_classes(node));

    if let Some((weight, color, alpha)) = border_paint(node) {
        classes.push(match border_width_class(weight) {
            Some("DEFAULT") => "border".to_string(),
            Some(class) => format!("border-{class}"),
            None => arbitrary("border", weight),
        });
        classes.push(color_token(
            "border",
            Rgb8::from_unit(color.r, color.g, color.b),
            alpha,
        ));
    }

    if let Some(shadow) = shadow_class(&node.effects) {
        classes.push(shadow.to_string());
    }

    classes
}

/// Typography classes for text nodes.
pub fn text_classes(node: &RawNode) -> Vec<String> {
    let mut classes = Vec::new();

    if let Some(style) = node.style.as_ref() {
        if let Some(family) = style.font_family.as_deref() {
            classes.push(format!("font-{}", font_family_class(family)));
        }
        if let Some(size) = style.font_size {
            classes.push(match font_size_class(size) {
                Some(class) => format!("text-{class}"),
                None => arbitrary("text", size),
            });
        }
        if let Some(weight) = style.font_weight {
            classes.push(format!("font-{}", font_weight_class(weight)));
        }
        if let Some(line_height) = style.line_height_px {
            classes.push(match line_height_class(line_height) {
                Some(class) => format!("leading-{class}"),
                None => arbitrary("leading", line_height),
            });
        }
        if let (Some(spacing), Some(size)) = (style.letter_spacing, style.font_size) {
            if size > 0.0 {
                if let Some(class) = letter_spacing_class(spacing / size) {
                    classes.push(format!("tracking-{class}"));
                }
            }
        }
        if let Some(align) = style.text_align_horizontal.as_deref().and_then(text_align_class) {
            classes.push(format!("text-{align}"));
        }
    }

    if let Some(color) = node.primary_fill_color() {
        classes.push(color_token(
            "text",
            Rgb8::from_unit(color.r, color.g, color.b),
            color.alpha(),
        ));
    }

    classes
}

/// Shadow tier from the first visible drop shadow that qualifies.
pub fn shadow_class(effects: &[FigmaEffect]) -> Option<&'static str> {
    let shadows: Vec<&FigmaEffect> = effects
        .iter()
        .filter(|e| e.effect_type == "DROP_SHADOW" && e.is_visible())
        .collect();
    if shadows.is_empty() {
        return None;
    }

    let tier = shadows.iter().find_map(|shadow| {
        let radius = shadow.radius.unwrap_or(0.0);
        let offset_y = shadow.offset.map(|o| o.y).unwrap_or(0.0);
        if radius >= 16.0 && offset_y >= 8.0 {
            Some("shadow-xl")
        } else if radius >= 8.0 && offset_y >= 4.0 {
            Some("shadow-lg")
        } else if radius >= 3.0 {
            Some("shadow-md")
        } else {
            None
        }
    });
    Some(tier.unwrap_or("shadow"))
}

fn justify_class(align: &str) -> Option<&'static str> {
    match align {
        "MIN" => Some("justify-start"),
        "CENTER" => Some("justify-center"),
        "MAX" => Some("justify-end"),
        "SPACE_BETWEEN" => Some("justify-between"),
        _ => None,
    }
}

fn items_class(align: &str) -> Option<&'static str> {
    match align {
        "MIN" => Some("items-start"),
        "CENTER" => Some("items-center"),
        "MAX" => Some("items-end"),
        "BASELINE" => Some("items-baseline"),
        _ => None,
    }
}

fn padding_classes(node: &RawNode) -> Vec<String> {
    let top = node.padding_top.unwrap_or(0.0);
    let right = node.padding_right.unwrap_or(0.0);
    let bottom = node.padding_bottom.unwrap_or(0.0);
    let left = node.padding_left.unwrap_or(0.0);

    if top == 0.0 && right == 0.0 && bottom == 0.0 && left == 0.0 {
        return Vec::new();
    }
    if top == right && right == bottom && bottom == left {
        return vec![spacing_token("p", top)];
    }
    if top == bottom && left == right {
        let mut out = Vec::new();
        if left > 0.0 {
            out.push(spacing_token("px", left));
        }
        if top > 0.0 {
            out.push(spacing_token("py", top));
        }
        return out;
    }

    [("pt", top), ("pr", right), ("pb", bottom), ("pl", left)]
        .into_iter()
        .filter(|(_, px)| *px > 0.0)
        .map(|(prefix, px)| spacing_token(prefix, px))
        .collect()
}

fn radius_classes(node: &RawNode) -> Vec<String> {
    let corners = [
        ("rounded-tl", node.top_left_radius),
        ("rounded-tr", node.top_right_radius),
        ("rounded-br", node.bottom_right_radius),
        ("rounded-bl", node.bottom_left_radius),
    ];
    if corners.iter().any(|(_, r)| r.is_some()) {
        return corners
            .into_iter()
            .filter_map(|(prefix, r)| r.filter(|px| *px > 0.0).map(|px| radius_token(prefix, px)))
            .collect();
    }

    node.corner_radius
        .filter(|r| *r > 0.0)
        .map(|r| vec![radius_token("rounded", r)])
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawNode {
        serde_json::from_value(value).expect("raw node")
    }

    fn shadow(radius: f64, y: f64) -> FigmaEffect {
        raw(json!({
            "id": "x", "type": "FRAME",
            "effects": [{"type": "DROP_SHADOW", "radius": radius, "offset": {"x": 0, "y": y}}]
        }))
        .effects
        .remove(0)
    }

    #[test]
    fn shadow_tiers() {
        assert_eq!(shadow_class(&[shadow(16.0, 8.0)]), Some("shadow-xl"));
        assert_eq!(shadow_class(&[shadow(8.0, 4.0)]), Some("shadow-lg"));
        assert_eq!(shadow_class(&[shadow(20.0, 2.0)]), Some("shadow-md"));
        assert_eq!(shadow_class(&[shadow(2.0, 1.0)]), Some("shadow"));
        assert_eq!(shadow_class(&[]), None);
    }

    #[test]
    fn first_matching_shadow_wins() {
        let effects = [shadow(1.0, 0.0), shadow(4.0, 0.0), shadow(24.0, 12.0)];
        assert_eq!(shadow_class(&effects), Some("shadow-md"));
    }

    #[test]
    fn hidden_and_inner_shadows_are_ignored() {
        let mut hidden = shadow(24.0, 12.0);
        hidden.visible = Some(false);
        let mut inner = shadow(24.0, 12.0);
        inner.effect_type = "INNER_SHADOW".into();
        assert_eq!(shadow_class(&[hidden, inner]), None);
    }

    #[test]
    fn container_classes_in_order() {
        let node = raw(json!({
            "id": "1", "name": "Button", "type": "FRAME",
            "layoutMode": "HORIZONTAL", "itemSpacing": 8,
            "primaryAxisAlignItems": "CENTER", "counterAxisAlignItems": "CENTER",
            "paddingLeft": 16, "paddingRight": 16, "paddingTop": 8, "paddingBottom": 8,
            "absoluteBoundingBox": {"x": 0, "y": 0, "width": 120, "height": 40},
            "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0.4, "b": 1, "a": 1}}],
            "cornerRadius": 6,
            "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}}],
            "strokeWeight": 1
        }));
        assert_eq!(
            tailwind_classes(&node),
            vec![
                "flex", "flex-row", "gap-4", "justify-center", "items-center", "px-6", "py-4",
                "w-[120px]", "h-10", "bg-blue-500", "rounded-md", "border", "border-black",
            ]
        );
    }

    #[test]
    fn unmatched_values_use_arbitrary_brackets() {
        let node = raw(json!({
            "id": "1", "name": "Panel", "type": "FRAME",
            "paddingLeft": 64, "paddingRight": 64, "paddingTop": 64, "paddingBottom": 64,
            "backgroundColor": {"r": 0.2, "g": 0.8, "b": 0.4, "a": 1},
            "cornerRadius": 24
        }));
        assert_eq!(
            tailwind_classes(&node),
            vec!["p-[64px]", "bg-[#33cc66]", "rounded-full"]
        );
    }

    #[test]
    fn transparent_background_is_skipped() {
        let node = raw(json!({
            "id": "1", "name": "Frame", "type": "FRAME",
            "backgroundColor": {"r": 0, "g": 0, "b": 0, "a": 0}
        }));
        assert!(tailwind_classes(&node).is_empty());
    }

    #[test]
    fn text_classes_cover_typography_and_color() {
        let node = raw(json!({
            "id": "2", "name": "Label", "type": "TEXT", "characters": "OK",
            "style": {"fontFamily": "Inter", "fontSize": 14, "fontWeight": 500,
                      "lineHeightPx": 20, "letterSpacing": 0, "textAlignHorizontal": "CENTER"},
            "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 1}}]
        }));
        assert_eq!(
            text_classes(&node),
            vec![
                "font-sans", "text-sm", "font-medium", "leading-tight", "tracking-normal",
                "text-center", "text-white",
            ]
        );
    }

    #[test]
    fn per_corner_radii_use_corner_prefixes() {
        let node = raw(json!({
            "id": "1", "name": "Tab", "type": "FRAME",
            "topLeftRadius": 8, "topRightRadius": 8
        }));
        assert_eq!(tailwind_classes(&node), vec!["rounded-tl-lg", "rounded-tr-lg"]);
    }
}
