//! Figma API response types for parsing JSON from the Figma REST API.
//!
//! Every node field is optional: the API omits keys that do not apply to a
//! node type, and downstream code treats absence as "not applicable".

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw Figma node data from the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_bounding_box: Option<FigmaBoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<FigmaColor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<FigmaPaint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<FigmaPaint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_left_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_right_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_left_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_right_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<FigmaEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_wrap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_sizing_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_sizing_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align_items: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<FigmaTypeStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_properties: Option<IndexMap<String, ComponentProperty>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interactions: Vec<FigmaInteraction>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub styles: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_variables: Option<Value>,
}

impl RawNode {
    pub fn is_text(&self) -> bool {
        self.node_type == "TEXT"
    }

    pub fn is_instance(&self) -> bool {
        self.node_type == "INSTANCE"
    }

    /// Solid paints that carry a color, in declaration order.
    pub fn solid_fills(&self) -> impl Iterator<Item = &FigmaPaint> {
        self.fills
            .iter()
            .filter(|paint| paint.is_solid() && paint.color.is_some())
    }

    /// First visible solid fill color, if any.
    pub fn primary_fill_color(&self) -> Option<&FigmaColor> {
        self.solid_fills()
            .find(|paint| paint.visible != Some(false))
            .and_then(|paint| paint.color.as_ref())
    }
}

/// Bounding box coordinates from Figma.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaBoundingBox {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

/// RGBA color from Figma (0.0-1.0 range). A missing alpha means opaque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct FigmaColor {
    #[serde(default)]
    pub r: f64,
    #[serde(default)]
    pub g: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl FigmaColor {
    pub fn alpha(&self) -> f64 {
        self.a.unwrap_or(1.0)
    }
}

/// 2D vector used for offsets and gradient handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct FigmaVector {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FigmaColorStop {
    #[serde(default)]
    pub position: f64,
    pub color: FigmaColor,
}

/// Paint (fill or stroke) data from Figma.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaPaint {
    #[serde(rename = "type", default)]
    pub paint_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FigmaColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_stops: Option<Vec<FigmaColorStop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_handle_positions: Option<Vec<FigmaVector>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_mode: Option<String>,
}

impl FigmaPaint {
    pub fn is_solid(&self) -> bool {
        self.paint_type == "SOLID"
    }
}

/// Shadow or blur effect.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaEffect {
    #[serde(rename = "type", default)]
    pub effect_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<FigmaColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<FigmaVector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
}

impl FigmaEffect {
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Typography style from Figma.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaTypeStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height_px: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_horizontal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align_vertical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<String>,
}

/// A component property set on an instance (`VARIANT`, `BOOLEAN`, `TEXT`,
/// or `INSTANCE_SWAP`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProperty {
    #[serde(rename = "type", default)]
    pub property_type: String,
    #[serde(default)]
    pub value: Value,
}

impl ComponentProperty {
    /// Property value as display text; strings are unquoted.
    pub fn value_text(&self) -> String {
        match &self.value {
            Value::String(s) => s.clone(),
            Value::Null => "null".to_string(),
            other => other.to_string(),
        }
    }
}

/// Prototype interaction: a trigger plus the actions it fires.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaInteraction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<FigmaTrigger>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Option<FigmaAction>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaTrigger {
    #[serde(rename = "type", default)]
    pub trigger_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaAction {
    #[serde(rename = "type", default)]
    pub action_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Style metadata from the top-level `styles` map of a file or node response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaStyleMeta {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Error body returned by the API on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaErrorBody {
    pub status: Option<u16>,
    pub err: Option<String>,
}
