//! Markdown rendering of the optimizer output.

use std::fmt::Write as FmtWrite;

use crate::figma::decode::grow;
use crate::types::{ComponentRecord, OptimizedComponent, TailwindConfig};

pub fn render_optimized_summary(optimized: &OptimizedComponent) -> String {
    let c = &optimized.component;
    let mut out = String::new();

    writeln!(out, "# {}\n", c.name).ok();
    writeln!(out, "**Component type:** {}  ", c.component_type).ok();
    writeln!(out, "**Figma type:** {}  ", c.node_type).ok();
    writeln!(out, "**Node id:** {}\n", c.id).ok();

    out.push_str("## Search Hints\n\n");
    for hint in &c.component_hints {
        writeln!(out, "- {hint}").ok();
    }
    out.push('\n');

    out.push_str("## Tailwind Classes\n\n");
    if c.tailwind_classes.is_empty() {
        out.push_str("_none_\n\n");
    } else {
        writeln!(out, "`{}`\n", c.tailwind_classes.join(" ")).ok();
    }
    if let Some(text) = c.text_classes.as_ref().filter(|t| !t.is_empty()) {
        writeln!(out, "Text: `{}`\n", text.join(" ")).ok();
    }

    if !c.variants.is_empty() {
        out.push_str("## Variants\n\n| Property | Value |\n| --- | --- |\n");
        for (key, value) in &c.variants {
            writeln!(out, "| {key} | {value} |").ok();
        }
        out.push('\n');
    }

    if !c.interaction_patterns.is_empty() {
        out.push_str("## Interactions\n\n");
        for pattern in &c.interaction_patterns {
            match pattern.target.as_deref() {
                Some(target) => {
                    writeln!(out, "- {} → {} ({target})", pattern.trigger, pattern.action).ok();
                }
                None => {
                    writeln!(out, "- {} → {}", pattern.trigger, pattern.action).ok();
                }
            }
        }
        out.push('\n');
    }

    out.push_str("## Recommended Approach\n\n");
    writeln!(out, "{}\n", c.implementation_guide.recommended_approach).ok();

    let config = &c.implementation_guide.tailwind_config;
    if !config.is_empty() {
        out.push_str("## Suggested tailwind.config.js\n\n```js\n");
        out.push_str(&tailwind_extension(config));
        out.push_str("```\n\n");
    }

    if !c.children.is_empty() {
        out.push_str("## Children\n\n");
        for child in &c.children {
            write_child(&mut out, child, 0);
        }
    }

    out
}

fn write_child(out: &mut String, record: &ComponentRecord, depth: usize) {
    let indent = "  ".repeat(depth);
    let mut classes = record.tailwind_classes.clone();
    if let Some(text) = record.text_classes.as_ref() {
        classes.extend(text.iter().cloned());
    }
    if classes.is_empty() {
        writeln!(out, "{indent}- **{}** ({})", record.name, record.node_type).ok();
    } else {
        writeln!(
            out,
            "{indent}- **{}** ({}): `{}`",
            record.name,
            record.node_type,
            classes.join(" ")
        )
        .ok();
    }
    for child in &record.children {
        grow(|| write_child(out, child, depth + 1));
    }
}

fn tailwind_extension(config: &TailwindConfig) -> String {
    let mut out = String::from("module.exports = {\n  theme: {\n    extend: {\n");
    if !config.custom_colors.is_empty() {
        out.push_str("      colors: {\n");
        for color in &config.custom_colors {
            writeln!(out, "        '{}': '{}',", color.name, color.value).ok();
        }
        out.push_str("      },\n");
    }
    if !config.custom_font_family.is_empty() {
        out.push_str("      fontFamily: {\n");
        for family in &config.custom_font_family {
            writeln!(
                out,
                "        '{}': ['{}', 'sans-serif'],",
                crate::optimize::guide::slugify(family),
                family
            )
            .ok();
        }
        out.push_str("      },\n");
    }
    if !config.custom_spacing.is_empty() {
        out.push_str("      spacing: {\n");
        for value in &config.custom_spacing {
            writeln!(out, "        '{value}': '{value}',").ok();
        }
        out.push_str("      },\n");
    }
    out.push_str("    },\n  },\n};\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::optimize;
    use crate::types::Optimized;
    use serde_json::json;

    fn optimized(value: serde_json::Value) -> OptimizedComponent {
        match optimize(&value) {
            Optimized::Component(component) => *component,
            Optimized::Passthrough(_) => panic!("expected a component"),
        }
    }

    #[test]
    fn sections_follow_the_record() {
        let component = optimized(json!({
            "document": {
                "id": "1:1", "name": "Primary Button", "type": "INSTANCE",
                "componentProperties": {"Size": {"type": "VARIANT", "value": "Large"}},
                "interactions": [{"trigger": {"type": "ON_CLICK"},
                                  "actions": [{"type": "URL", "url": "https://x.test"}]}],
                "children": [{"id": "1:2", "name": "Label", "type": "TEXT",
                              "style": {"fontFamily": "Poppins", "fontSize": 14}}]
            }
        }));
        let md = render_optimized_summary(&component);
        assert!(md.starts_with("# Primary Button\n\n**Component type:** button  \n"));
        assert!(md.contains("## Search Hints\n\n- Primary Button\n- Component: Primary Button\n"));
        assert!(md.contains("| Size | Large |\n"));
        assert!(md.contains("- ON_CLICK → URL (https://x.test)\n"));
        assert!(md.contains("## Recommended Approach\n\nReuse the existing button component"));
        assert!(md.contains("        'poppins': ['Poppins', 'sans-serif'],\n"));
        assert!(md.contains("- **Label** (TEXT): `font-sans text-sm`\n"));
    }

    #[test]
    fn empty_config_block_is_omitted() {
        let component = optimized(json!({
            "document": {"id": "1", "name": "Hero", "type": "FRAME"}
        }));
        let md = render_optimized_summary(&component);
        assert!(!md.contains("tailwind.config.js"));
        assert!(md.contains("## Tailwind Classes\n\n_none_\n"));
        assert!(!md.contains("## Children"));
    }
}
