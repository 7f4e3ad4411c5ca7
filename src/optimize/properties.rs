//! CSS-flavoured property extraction for the optimized view.

use crate::figma::api_types::RawNode;
use crate::quantize::{format_css_rgb, format_number};
use crate::types::{ComponentProperties, LayoutProperties};

use super::{background_paint, border_paint};

fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

pub fn extract_properties(node: &RawNode) -> ComponentProperties {
    ComponentProperties {
        background_color: background_paint(node)
            .map(|(c, alpha)| format_css_rgb(c.r, c.g, c.b, Some(alpha))),
        border_radius: border_radius(node),
        border: border_paint(node).map(|(weight, c, alpha)| {
            format!(
                "{} solid {}",
                px(weight),
                format_css_rgb(c.r, c.g, c.b, Some(alpha))
            )
        }),
        layout: layout(node),
    }
}

fn border_radius(node: &RawNode) -> Option<String> {
    let corners = [
        node.top_left_radius,
        node.top_right_radius,
        node.bottom_right_radius,
        node.bottom_left_radius,
    ];
    if corners.iter().any(Option::is_some) {
        let parts: Vec<String> = corners.iter().map(|c| px(c.unwrap_or(0.0))).collect();
        return Some(parts.join(" "));
    }
    node.corner_radius.filter(|r| *r > 0.0).map(px)
}

fn layout(node: &RawNode) -> Option<LayoutProperties> {
    let direction = match node.layout_mode.as_deref()? {
        "HORIZONTAL" => "row",
        "VERTICAL" => "column",
        _ => return None,
    };

    let padding = [
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    ]
    .map(|p| p.unwrap_or(0.0));

    Some(LayoutProperties {
        direction: direction.to_string(),
        gap: node.item_spacing.filter(|g| *g > 0.0).map(px),
        padding: padding
            .iter()
            .any(|p| *p > 0.0)
            .then(|| padding.map(px).join(" ")),
        wrap: node.layout_wrap.as_deref() == Some("WRAP"),
    })
}
