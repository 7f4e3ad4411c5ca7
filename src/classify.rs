//! Name-based component classification and search hints.

use crate::figma::api_types::RawNode;
use crate::quantize::format_css_rgb;
use crate::types::ComponentKind;

/// Ordered rules; the first rule with a matching keyword wins.
const RULES: &[(&[&str], ComponentKind)] = &[
    (&["button"], ComponentKind::Button),
    (&["modal", "dialog"], ComponentKind::Modal),
    (&["card"], ComponentKind::Card),
    (&["input", "field", "form"], ComponentKind::Input),
    (&["alert", "notification", "toast"], ComponentKind::Alert),
    (&["cancel"], ComponentKind::ConfirmationDialog),
];

const CANCEL_HINTS: [&str; 4] = [
    "Look for confirmation dialog components",
    "Search for cancel/confirm button pairs",
    "Check modal or dialog implementations",
    "Find destructive action confirmation patterns",
];

/// Guess the component kind from the node name (case-insensitive).
pub fn classify(node: &RawNode) -> ComponentKind {
    classify_name(&node.name)
}

pub fn classify_name(name: &str) -> ComponentKind {
    let lower = name.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, kind)| *kind)
        .unwrap_or(ComponentKind::Unknown)
}

/// Free-text hints for locating a matching component in a codebase.
pub fn hints(node: &RawNode) -> Vec<String> {
    let mut hints = vec![node.name.clone()];

    if node.name.to_lowercase().contains("cancel") {
        hints.extend(CANCEL_HINTS.iter().map(|h| h.to_string()));
    }

    if node.is_instance() {
        hints.push(format!("Component: {}", node.name));
    }

    let colors: Vec<String> = node
        .solid_fills()
        .filter_map(|paint| paint.color.as_ref())
        .map(|c| format_css_rgb(c.r, c.g, c.b, None))
        .collect();
    if !colors.is_empty() {
        hints.push(colors.join(", "));
    }

    hints
}
