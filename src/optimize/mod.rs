//! Optimizer: a component-matching view built straight from a raw response.
//!
//! The output layers a component-kind guess, search hints, utility classes,
//! variants, interactions, and an implementation guide over every node of
//! the document. Input that does not look like a Figma response is handed
//! back untouched.

pub mod classes;
pub mod guide;
pub mod properties;

use indexmap::IndexMap;
use log::debug;
use serde_json::Value;

use crate::classify::{classify, hints};
use crate::figma::api_types::{FigmaColor, FigmaInteraction, FigmaStyleMeta, RawNode};
use crate::figma::decode::grow;
use crate::figma::from_value;
use crate::types::{
    ComponentRecord, InteractionPattern, Optimized, OptimizedComponent, StyleReference,
};

pub use classes::{shadow_class, tailwind_classes, text_classes};
pub use guide::{implementation_guide, recommended_approach, suggest_color_name, tailwind_config};
pub use properties::extract_properties;

/// Build the optimized view of a file or nodes response.
///
/// Accepts `{document, styles}` or `{nodes: {id: {document, styles}}}` (the
/// first entry is used). Anything else is returned as
/// [`Optimized::Passthrough`].
pub fn optimize(response: &Value) -> Optimized {
    let Some((document, styles)) = locate_document(response) else {
        debug!("optimizer input has no document; passing through");
        return Optimized::Passthrough(response.clone());
    };

    let root: RawNode = match from_value(document.clone()) {
        Ok(node) => node,
        Err(err) => {
            debug!("optimizer document is not a node ({err}); passing through");
            return Optimized::Passthrough(response.clone());
        }
    };

    let styles: IndexMap<String, FigmaStyleMeta> = styles
        .and_then(|s| serde_json::from_value(s.clone()).ok())
        .unwrap_or_default();

    Optimized::Component(Box::new(OptimizedComponent {
        original_data: response.clone(),
        component: build_record(&root, &styles),
    }))
}

fn locate_document(response: &Value) -> Option<(&Value, Option<&Value>)> {
    if let Some(document) = response.get("document").filter(|d| d.is_object()) {
        return Some((document, response.get("styles")));
    }
    let (_, entry) = response.get("nodes")?.as_object()?.iter().next()?;
    let document = entry.get("document").filter(|d| d.is_object())?;
    Some((document, entry.get("styles")))
}

/// One record per node, children processed depth-first in source order.
pub fn build_record(node: &RawNode, styles: &IndexMap<String, FigmaStyleMeta>) -> ComponentRecord {
    let kind = classify(node);
    ComponentRecord {
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        id: node.id.clone(),
        component_type: kind,
        component_hints: hints(node),
        properties: extract_properties(node),
        tailwind_classes: tailwind_classes(node),
        text_classes: node.is_text().then(|| text_classes(node)),
        children: node
            .children
            .iter()
            .map(|child| grow(|| build_record(child, styles)))
            .collect(),
        styles: style_references(node, styles),
        variants: variants(node),
        interaction_patterns: node.interactions.iter().filter_map(interaction).collect(),
        implementation_guide: implementation_guide(node, kind),
    }
}

fn style_references(
    node: &RawNode,
    table: &IndexMap<String, FigmaStyleMeta>,
) -> IndexMap<String, StyleReference> {
    node.styles
        .iter()
        .map(|(slot, id)| {
            let meta = table.get(id);
            let reference = StyleReference {
                id: id.clone(),
                name: meta.map(|m| m.name.clone()),
                style_type: meta.and_then(|m| m.style_type.clone()),
            };
            (slot.clone(), reference)
        })
        .collect()
}

/// `VARIANT` component properties only.
fn variants(node: &RawNode) -> IndexMap<String, String> {
    node.component_properties
        .iter()
        .flatten()
        .filter(|(_, prop)| prop.property_type == "VARIANT")
        .map(|(key, prop)| (key.clone(), prop.value_text()))
        .collect()
}

/// Only the first action of an interaction is considered.
fn interaction(interaction: &FigmaInteraction) -> Option<InteractionPattern> {
    let action = interaction.actions.first()?.as_ref()?;
    let trigger = interaction
        .trigger
        .as_ref()
        .map(|t| t.trigger_type.clone())
        .unwrap_or_else(|| "UNKNOWN".to_string());
    let kind = match (action.action_type.as_str(), action.navigation.as_ref()) {
        ("NODE", Some(navigation)) => navigation.clone(),
        (other, _) => other.to_string(),
    };
    Some(InteractionPattern {
        trigger,
        action: kind,
        target: action.destination_id.clone().or_else(|| action.url.clone()),
    })
}

/// Background of a non-text node: first visible solid fill (alpha folded
/// with paint opacity), else `backgroundColor`. Fully transparent is none.
pub(crate) fn background_paint(node: &RawNode) -> Option<(FigmaColor, f64)> {
    let from_fill = node
        .solid_fills()
        .find(|paint| paint.visible != Some(false))
        .and_then(|paint| {
            paint
                .color
                .map(|c| (c, c.alpha() * paint.opacity.unwrap_or(1.0)))
        });
    from_fill
        .or_else(|| node.background_color.map(|c| (c, c.alpha())))
        .filter(|(_, alpha)| *alpha > 0.0)
}

/// Stroke weight plus the first visible solid stroke color.
pub(crate) fn border_paint(node: &RawNode) -> Option<(f64, FigmaColor, f64)> {
    let weight = node.stroke_weight.filter(|w| *w > 0.0)?;
    let paint = node
        .strokes
        .iter()
        .find(|p| p.is_solid() && p.visible != Some(false) && p.color.is_some())?;
    let color = paint.color?;
    Some((weight, color, color.alpha() * paint.opacity.unwrap_or(1.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComponentKind;
    use serde_json::json;

    fn file_response() -> Value {
        json!({
            "name": "Checkout",
            "document": {
                "id": "1:1", "name": "Cancel Order", "type": "FRAME",
                "layoutMode": "HORIZONTAL", "itemSpacing": 8,
                "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 1}}],
                "styles": {"fill": "S:1"},
                "children": [
                    {"id": "1:2", "name": "Title", "type": "TEXT", "characters": "Cancel?",
                     "style": {"fontFamily": "Inter", "fontSize": 16, "fontWeight": 600}},
                    {"id": "1:3", "name": "Confirm", "type": "INSTANCE", "componentId": "9:1",
                     "componentProperties": {
                        "Size": {"type": "VARIANT", "value": "Large"},
                        "Icon": {"type": "BOOLEAN", "value": true}
                     },
                     "interactions": [
                        {"trigger": {"type": "ON_CLICK"},
                         "actions": [
                            {"type": "NODE", "destinationId": "5:5", "navigation": "NAVIGATE"},
                            {"type": "BACK"}
                         ]},
                        {"trigger": {"type": "ON_HOVER"}, "actions": [{"type": "URL", "url": "https://example.com"}]},
                        {"trigger": {"type": "ON_DRAG"}, "actions": []}
                     ]}
                ]
            },
            "styles": {"S:1": {"name": "Surface/White", "styleType": "FILL"}}
        })
    }

    fn component(optimized: Optimized) -> OptimizedComponent {
        match optimized {
            Optimized::Component(component) => *component,
            Optimized::Passthrough(value) => panic!("unexpected passthrough: {value}"),
        }
    }

    #[test]
    fn non_figma_input_passes_through() {
        let input = json!({"hello": "world"});
        assert_eq!(optimize(&input), Optimized::Passthrough(input.clone()));
        let bad_doc = json!({"document": 5});
        assert_eq!(optimize(&bad_doc), Optimized::Passthrough(bad_doc.clone()));
    }

    #[test]
    fn original_data_is_kept_verbatim() {
        let input = file_response();
        let out = component(optimize(&input));
        assert_eq!(out.original_data, input);
    }

    #[test]
    fn root_record_is_classified_and_styled() {
        let out = component(optimize(&file_response())).component;
        assert_eq!(out.component_type, ComponentKind::ConfirmationDialog);
        assert_eq!(out.component_hints[0], "Cancel Order");
        assert_eq!(out.component_hints.len(), 6);
        assert_eq!(&out.tailwind_classes[..3], ["flex", "flex-row", "gap-4"]);
        assert!(out.text_classes.is_none());
        let style = out.styles.get("fill").expect("fill style");
        assert_eq!(style.id, "S:1");
        assert_eq!(style.name.as_deref(), Some("Surface/White"));
        assert_eq!(style.style_type.as_deref(), Some("FILL"));
        assert!(out
            .implementation_guide
            .recommended_approach
            .contains("confirmation dialog"));
    }

    #[test]
    fn children_mirror_the_record_shape() {
        let out = component(optimize(&file_response())).component;
        assert_eq!(out.children.len(), 2);

        let title = &out.children[0];
        assert_eq!(
            title.text_classes.as_deref(),
            Some(
                &[
                    "font-sans".to_string(),
                    "text-base".to_string(),
                    "font-semibold".to_string()
                ][..]
            )
        );

        let confirm = &out.children[1];
        assert_eq!(confirm.variants.len(), 1);
        assert_eq!(confirm.variants.get("Size").map(String::as_str), Some("Large"));
        assert_eq!(
            confirm.interaction_patterns,
            vec![
                InteractionPattern {
                    trigger: "ON_CLICK".into(),
                    action: "NAVIGATE".into(),
                    target: Some("5:5".into()),
                },
                InteractionPattern {
                    trigger: "ON_HOVER".into(),
                    action: "URL".into(),
                    target: Some("https://example.com".into()),
                },
            ]
        );
    }

    #[test]
    fn nodes_response_uses_first_entry() {
        let input = json!({
            "nodes": {"2:2": {"document": {"id": "2:2", "name": "Primary Button", "type": "INSTANCE"}}}
        });
        let out = component(optimize(&input)).component;
        assert_eq!(out.id, "2:2");
        assert_eq!(out.component_type, ComponentKind::Button);
    }

    #[test]
    fn background_prefers_visible_fill_and_skips_transparent() {
        let node: RawNode = serde_json::from_value(json!({
            "id": "1", "name": "n", "type": "FRAME",
            "backgroundColor": {"r": 0, "g": 0, "b": 0, "a": 0},
            "fills": [
                {"type": "SOLID", "visible": false, "color": {"r": 1, "g": 0, "b": 0, "a": 1}},
                {"type": "SOLID", "opacity": 0.5, "color": {"r": 0, "g": 0, "b": 1, "a": 1}}
            ]
        }))
        .expect("node");
        let (color, alpha) = background_paint(&node).expect("background");
        assert_eq!(color.b, 1.0);
        assert_eq!(alpha, 0.5);

        let transparent: RawNode = serde_json::from_value(json!({
            "id": "1", "name": "n", "type": "FRAME",
            "backgroundColor": {"r": 0, "g": 0, "b": 0, "a": 0}
        }))
        .expect("node");
        assert!(background_paint(&transparent).is_none());
    }

    #[test]
    fn border_requires_weight_and_solid_stroke() {
        let no_weight: RawNode = serde_json::from_value(json!({
            "id": "1", "name": "n", "type": "FRAME",
            "strokes": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0}}]
        }))
        .expect("node");
        assert!(border_paint(&no_weight).is_none());

        let gradient_only: RawNode = serde_json::from_value(json!({
            "id": "1", "name": "n", "type": "FRAME", "strokeWeight": 1,
            "strokes": [{"type": "GRADIENT_LINEAR"}]
        }))
        .expect("node");
        assert!(border_paint(&gradient_only).is_none());
    }
}
