use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

fn button_response() -> Value {
    json!({
        "name": "Shop",
        "document": {
            "id": "0:0", "name": "Document", "type": "DOCUMENT",
            "children": [{
                "id": "0:1", "name": "Page", "type": "CANVAS",
                "children": [{
                    "id": "1:2", "name": "Btn", "type": "FRAME",
                    "absoluteBoundingBox": {"x": 0.0, "y": 0.0, "width": 120.0, "height": 40.0},
                    "backgroundColor": {"r": 0.0, "g": 0.4, "b": 1.0, "a": 1.0},
                    "cornerRadius": 8.0,
                    "children": [{
                        "id": "1:3", "name": "Label", "type": "TEXT",
                        "characters": "Buy now"
                    }]
                }]
            }]
        },
        "styles": {}
    })
}

fn write_response(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("response.json");
    fs::write(&path, button_response().to_string()).expect("write response");
    path
}

fn run_figx(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_figx"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_dir)
        .env("HOME", config_dir)
        .env_remove("FIGMA_TOKEN")
        .env_remove("FIGMA_OAUTH_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("run figx")
}

#[test]
fn unsupported_format_exits_with_code_2_and_hint() {
    let dir = TempDir::new().expect("tempdir");
    let response = write_response(&dir);

    let output = run_figx(
        &["extract", "--from-json", response.to_str().unwrap(), "--format", "pdf"],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Unsupported format 'pdf'"), "{stderr}");
    assert!(stderr.contains("Hint: Use one of: ai-prompt"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn json_output_for_selected_node() {
    let dir = TempDir::new().expect("tempdir");
    let response = write_response(&dir);

    let output = run_figx(
        &[
            "extract",
            "--from-json",
            response.to_str().unwrap(),
            "--node-id",
            "1-2",
            "--format",
            "json",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let node: Value = serde_json::from_slice(&output.stdout).expect("json on stdout");
    assert_eq!(node["id"], "1:2");
    assert_eq!(node["name"], "Btn");
    assert_eq!(node["backgroundColor"], "#0066ff");
    assert_eq!(node["cornerRadius"], 8.0);
    assert_eq!(node["children"][0]["textContent"], "Buy now");
}

#[test]
fn optimize_requires_summary_format() {
    let dir = TempDir::new().expect("tempdir");
    let response = write_response(&dir);

    let output = run_figx(
        &[
            "extract",
            "--from-json",
            response.to_str().unwrap(),
            "--format",
            "json",
            "--optimize",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--optimize is only supported with --format summary"));
}

#[test]
fn output_flag_writes_file_and_creates_directories() {
    let dir = TempDir::new().expect("tempdir");
    let response = write_response(&dir);
    let target = dir.path().join("notes").join("btn.md");

    let output = run_figx(
        &[
            "extract",
            "--from-json",
            response.to_str().unwrap(),
            "--node-id",
            "1:2",
            "--format",
            "summary",
            "--output",
            target.to_str().unwrap(),
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let summary = fs::read_to_string(&target).expect("summary written");
    assert!(summary.starts_with("# Btn"));
    assert!(summary.contains("## Component Tree"));
}

#[test]
fn config_file_supplies_default_format() {
    let dir = TempDir::new().expect("tempdir");
    let response = write_response(&dir);
    let config = dir.path().join("figx.toml");
    fs::write(&config, "format = \"yaml\"\n").expect("write config");

    let output = run_figx(
        &[
            "extract",
            "--config",
            config.to_str().unwrap(),
            "--from-json",
            response.to_str().unwrap(),
            "--node-id",
            "1:3",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("name: Label"), "{stdout}");
    assert!(stdout.contains("textContent: Buy now"), "{stdout}");
}

#[test]
fn unknown_node_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    let response = write_response(&dir);

    let output = run_figx(
        &[
            "extract",
            "--from-json",
            response.to_str().unwrap(),
            "--node-id",
            "9:9",
        ],
        dir.path(),
    );

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("9:9"), "{stderr}");
}
