//! Component-matching view built by the optimizer.
//!
//! Independent of [`NormalizedNode`](super::NormalizedNode): both are built
//! from the same raw tree and neither converts into the other.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Coarse guess at what kind of UI component a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Button,
    Modal,
    Card,
    Input,
    Alert,
    ConfirmationDialog,
    Unknown,
}

impl ComponentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "button",
            ComponentKind::Modal => "modal",
            ComponentKind::Card => "card",
            ComponentKind::Input => "input",
            ComponentKind::Alert => "alert",
            ComponentKind::ConfirmationDialog => "confirmation-dialog",
            ComponentKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the optimizer: either the enriched tree or the untouched input
/// when it did not look like a Figma response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Optimized {
    Component(Box<OptimizedComponent>),
    Passthrough(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedComponent {
    pub original_data: Value,
    pub component: ComponentRecord,
}

/// One node of the optimized tree; children share the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub id: String,
    pub component_type: ComponentKind,
    pub component_hints: Vec<String>,
    pub properties: ComponentProperties,
    pub tailwind_classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_classes: Option<Vec<String>>,
    #[serde(default)]
    pub children: Vec<ComponentRecord>,
    #[serde(default)]
    pub styles: IndexMap<String, StyleReference>,
    #[serde(default)]
    pub variants: IndexMap<String, String>,
    #[serde(default)]
    pub interaction_patterns: Vec<InteractionPattern>,
    pub implementation_guide: ImplementationGuide,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutProperties>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProperties {
    pub direction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default)]
    pub wrap: bool,
}

/// A node-level style reference resolved against the response's style table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleReference {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionPattern {
    pub trigger: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationGuide {
    pub recommended_approach: String,
    pub tailwind_config: TailwindConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    #[serde(default)]
    pub custom_colors: Vec<CustomColor>,
    #[serde(default)]
    pub custom_font_family: Vec<String>,
    #[serde(default)]
    pub custom_spacing: Vec<String>,
}

impl TailwindConfig {
    pub fn is_empty(&self) -> bool {
        self.custom_colors.is_empty()
            && self.custom_font_family.is_empty()
            && self.custom_spacing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomColor {
    pub name: String,
    pub value: String,
}
