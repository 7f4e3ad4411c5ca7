//! Implementation guidance and custom theme suggestions.

use crate::figma::api_types::RawNode;
use crate::figma::decode::grow;
use crate::quantize::{color_class, format_number, spacing_class, Rgb8};
use crate::types::{ComponentKind, CustomColor, ImplementationGuide, TailwindConfig};

use super::background_paint;

pub fn implementation_guide(node: &RawNode, kind: ComponentKind) -> ImplementationGuide {
    let tailwind_config = tailwind_config(node);
    ImplementationGuide {
        recommended_approach: recommended_approach(kind, &node.name, !tailwind_config.is_empty()),
        tailwind_config,
    }
}

/// Guidance paragraph. `custom_theme` says whether a theme extension will be
/// listed alongside it.
pub fn recommended_approach(kind: ComponentKind, name: &str, custom_theme: bool) -> String {
    match kind {
        ComponentKind::ConfirmationDialog => format!(
            "Build \"{name}\" as a confirmation dialog: reuse the existing modal or dialog component, \
             render the message in its body, and place a secondary cancel button next to a primary \
             (or destructive) confirm button in the footer. Cancel must close the dialog without side effects."
        ),
        ComponentKind::Button => format!(
            "Reuse the existing button component for \"{name}\": map the Figma variants onto its \
             size and variant props, and only add the generated utility classes for values the \
             component does not already cover."
        ),
        other => {
            let label = match other {
                ComponentKind::Unknown => "UI",
                known => known.as_str(),
            };
            let mut text = format!(
                "Search the codebase for an existing {label} component matching \"{name}\" before \
                 building a new one. Compose it from the generated utility classes"
            );
            if custom_theme {
                text.push_str(" and extend tailwind.config.js with the custom values listed below");
            }
            text.push('.');
            text
        }
    }
}

/// Theme extensions for values the default palette and spacing scale do not
/// cover, collected across the whole subtree.
pub fn tailwind_config(root: &RawNode) -> TailwindConfig {
    let mut config = TailwindConfig::default();
    collect(root, &root.name, &mut config);
    config
}

fn collect(node: &RawNode, base_name: &str, config: &mut TailwindConfig) {
    let color = if node.is_text() {
        node.primary_fill_color().map(|c| (*c, c.alpha()))
    } else {
        background_paint(node)
    };
    if let Some((c, alpha)) = color {
        let rgb = Rgb8::from_unit(c.r, c.g, c.b);
        if color_class(rgb, alpha).is_none() {
            push_custom_color(config, base_name, rgb);
        }
    }

    if node.is_text() {
        if let Some(family) = node.style.as_ref().and_then(|s| s.font_family.as_ref()) {
            if !config.custom_font_family.contains(family) {
                config.custom_font_family.push(family.clone());
            }
        }
    }

    let spacings = [
        node.item_spacing,
        node.padding_top,
        node.padding_right,
        node.padding_bottom,
        node.padding_left,
    ];
    for value in spacings.into_iter().flatten() {
        if value > 0.0 && spacing_class(value).is_none() {
            let token = format!("{}px", format_number(value));
            if !config.custom_spacing.contains(&token) {
                config.custom_spacing.push(token);
            }
        }
    }

    for child in &node.children {
        grow(|| collect(child, base_name, config));
    }
}

fn push_custom_color(config: &mut TailwindConfig, base_name: &str, rgb: Rgb8) {
    let value = rgb.to_hex();
    if config.custom_colors.iter().any(|c| c.value == value) {
        return;
    }
    let mut name = suggest_color_name(base_name, rgb);
    let taken = config
        .custom_colors
        .iter()
        .filter(|c| c.name == name || c.name.starts_with(&format!("{name}-")))
        .count();
    if taken > 0 {
        name = format!("{name}-{}", taken + 1);
    }
    config.custom_colors.push(CustomColor { name, value });
}

/// Name a custom color after its component, hue family, and brightness.
pub fn suggest_color_name(component_name: &str, rgb: Rgb8) -> String {
    let base = slugify(component_name);
    let base = if base.is_empty() {
        "custom".to_string()
    } else {
        base
    };

    let mut parts = vec![base.clone()];
    if let Some(hue) = hue_family(rgb) {
        if !base.contains(hue) {
            parts.push(hue.to_string());
        }
    }
    let brightness = rgb.brightness();
    if brightness < 85.0 {
        parts.push("dark".to_string());
    } else if brightness > 170.0 {
        parts.push("light".to_string());
    }
    parts.join("-")
}

pub fn hue_family(rgb: Rgb8) -> Option<&'static str> {
    let (r, g, b) = (rgb.r as i32, rgb.g as i32, rgb.b as i32);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max - min <= 20 {
        return Some("gray");
    }
    if r > 150 && g > 150 && b < 100 {
        return Some("yellow");
    }
    if r > 120 && b > 120 && g < 100 {
        return Some("purple");
    }
    if g > 150 && b > 150 && r < 100 {
        return Some("cyan");
    }
    if r - g.max(b) >= 30 {
        return Some("red");
    }
    if g - r.max(b) >= 30 {
        return Some("green");
    }
    if b - r.max(g) >= 30 {
        return Some("blue");
    }
    None
}

/// Lowercase, alphanumerics only, runs of anything else collapsed to `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
