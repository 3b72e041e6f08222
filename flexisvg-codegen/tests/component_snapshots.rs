//! Snapshot tests for the generated icon component.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fs;

use eyre::bail;
use flexisvg_codegen::{generate_component, generate_component_with, render_component};
use flexisvg_core::{FormatOptions, Formatter, IconRecord, VariantKind, sprite_web_path};
use tempfile::TempDir;

fn three_icons() -> Vec<IconRecord> {
    vec![
        IconRecord::new("logo", VariantKind::Static),
        IconRecord::new("arrow", VariantKind::Dynamic),
        IconRecord::new("banner", VariantKind::Resizable),
    ]
}

#[test]
fn test_three_variant_component() {
    let source = render_component(
        &three_icons(),
        &sprite_web_path("public/icons"),
        &FormatOptions::typescript(),
    )
    .unwrap();
    insta::assert_snapshot!("three_variant_component", source);
}

#[test]
fn test_empty_component() {
    let source =
        render_component(&[], &sprite_web_path("public"), &FormatOptions::typescript()).unwrap();
    insta::assert_snapshot!("empty_component", source);
}

#[test]
fn test_generate_writes_formatted_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("src/components/icon/index.tsx");

    generate_component(&output, &three_icons(), "/icons/sprite.svg").unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let rendered = render_component(
        &three_icons(),
        "/icons/sprite.svg",
        &FormatOptions::typescript(),
    )
    .unwrap();
    assert_eq!(written, rendered);
    assert!(written.contains("<use href={`/icons/sprite.svg#${id}`} />"));
}

#[test]
fn test_generate_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("index.tsx");

    generate_component(&output, &three_icons(), "/icons/sprite.svg").unwrap();
    let first = fs::read_to_string(&output).unwrap();
    generate_component(&output, &three_icons(), "/icons/sprite.svg").unwrap();
    assert_eq!(first, fs::read_to_string(&output).unwrap());
}

struct BrokenFormatter;

impl Formatter for BrokenFormatter {
    fn format(&self, _source: &str, _options: &FormatOptions) -> eyre::Result<String> {
        bail!("unexpected token")
    }
}

#[test]
fn test_format_failure_is_fatal() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("index.tsx");

    let err = generate_component_with(&output, &three_icons(), "/sprite.svg", &BrokenFormatter)
        .unwrap_err();
    assert!(err.to_string().contains("failed to format generated component"));
    assert!(!output.exists());
}
