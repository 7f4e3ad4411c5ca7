use figx_lib::render::render_component_tree;
use figx_lib::{render_extraction, Extraction, OutputFormat, RenderOptions};
use serde_json::json;

fn button() -> Extraction {
    let envelope = json!({
        "nodes": {
            "1:2": {
                "document": {
                    "id": "1:2", "name": "Btn", "type": "FRAME",
                    "absoluteBoundingBox": {"x": 10.0, "y": 20.0, "width": 120.0, "height": 40.0},
                    "backgroundColor": {"r": 0.0, "g": 0.4, "b": 1.0, "a": 1.0},
                    "cornerRadius": 8.0
                },
                "styles": {}
            }
        }
    });
    Extraction::from_envelope(envelope, Some("1:2")).expect("resolve button")
}

#[test]
fn ai_prompt_lists_button_fields_in_order() {
    let text = render_extraction(&button(), RenderOptions::default()).unwrap();

    let expected = [
        "Type: FRAME",
        "Name: Btn",
        "Width: 120px",
        "Height: 40px",
        "Background Color: #0066ff",
        "Border Radius: 8px",
    ];
    let mut cursor = 0;
    for needle in expected {
        let found = text[cursor..]
            .find(needle)
            .unwrap_or_else(|| panic!("missing or out of order: {needle}\n{text}"));
        cursor += found + needle.len();
    }
    assert!(text.contains("React"));
    assert!(text.contains("Tailwind CSS"));
}

#[test]
fn summary_tree_draws_nested_chain() {
    let envelope = json!({
        "id": "1:1", "name": "Card", "type": "FRAME",
        "children": [{
            "id": "1:2", "name": "Body", "type": "FRAME",
            "children": [{"id": "1:3", "name": "Title", "type": "TEXT", "characters": "Hi"}]
        }]
    });
    let extraction = Extraction::from_envelope(envelope, None).unwrap();

    assert_eq!(
        render_component_tree(&extraction.node),
        "└─ Card (FRAME)\n   └─ Body (FRAME)\n      └─ Title (TEXT)\n"
    );

    let summary = render_extraction(
        &extraction,
        RenderOptions {
            format: OutputFormat::Summary,
            ..Default::default()
        },
    )
    .unwrap();
    assert!(summary.starts_with("# Card\n"));
    assert!(summary.contains("<span data-figma-id=\"1:3\""));
}

#[test]
fn optimized_summary_names_component_and_classes() {
    let options = RenderOptions {
        format: OutputFormat::Summary,
        optimize: true,
        raw: false,
    };
    let text = render_extraction(&button(), options).unwrap();

    assert!(text.starts_with("# Btn"));
    assert!(text.contains("## Recommended Approach"), "{text}");
}

#[test]
fn raw_json_keeps_figma_field_names() {
    let options = RenderOptions {
        format: OutputFormat::Json,
        optimize: false,
        raw: true,
    };
    let text = render_extraction(&button(), options).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["absoluteBoundingBox"]["width"], 120.0);
    assert!(value.get("size").is_none());
}
