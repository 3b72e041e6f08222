//! Generation of the typed icon component.

use std::path::Path;

use eyre::{Context, Result};
use flexisvg_core::{File, FormatOptions, Formatter, IconRecord, VariantKind};
use tracing::{error, info};

use crate::{
    CodeFile, CodeFragment, Style, TsxFormatter,
    ast::{ArrowFn, Const, Field, Import, ObjectType, Union, literal},
    style::escape_template,
};

/// First line of every generated component.
pub const GENERATED_HEADER: &str = "This file is auto-generated. Do not edit manually.";

/// `size` used when the component is rendered without one.
pub const DEFAULT_ICON_SIZE: u32 = 24;

/// Render the component source for `metadata`.
///
/// Declares one id union per variant (`never` when empty), the combined
/// `IconId`, the `Icon` component referencing `sprite_web_path`, and the
/// `iconMetadataMap` table. Ids keep collection order and are not
/// deduplicated.
pub fn render_component(
    metadata: &[IconRecord],
    sprite_web_path: &str,
    options: &FormatOptions,
) -> Result<String> {
    let style = Style::from(options);

    let variant_unions: Vec<Union> = VariantKind::ALL
        .iter()
        .map(|variant| {
            metadata
                .iter()
                .filter(|record| record.variant == *variant)
                .fold(Union::new(variant.type_name()).style(style), |union, record| {
                    union.literal(record.id.as_str())
                })
        })
        .collect();

    let icon_id = VariantKind::ALL
        .iter()
        .fold(Union::new("IconId").style(style), |union, variant| {
            union.member(variant.type_name())
        });

    let props = ObjectType::new("IconProps")
        .extends(format!("ComponentProps<{}>", style.string("svg")))
        .field(Field::new("id", "IconId"))
        .field(Field::new("size", "number").optional())
        .private();

    let href = format!("{{`{}#${{id}}`}}", escape_template(sprite_web_path));
    let component = ArrowFn::new(format!(
        "{{ id, size = {DEFAULT_ICON_SIZE}, ...props }}: IconProps"
    ))
    .body_fragment(CodeFragment::block(
        "return (",
        vec![CodeFragment::block(
            "<svg width={size} height={size} {...props}>",
            vec![CodeFragment::line(format!("<use href={href} />"))],
            "</svg>",
        )],
        ");",
    ));

    let table = serde_json::to_value(metadata).wrap_err("failed to serialize icon metadata")?;

    let source = CodeFile::new()
        .comment(GENERATED_HEADER)
        .import(
            Import::new("react")
                .named_type("ComponentProps")
                .style(style),
        )
        .group(variant_unions)
        .add(icon_id)
        .add(props)
        .add(Const::new("Icon", component.into()))
        .add(Const::new("iconMetadataMap", literal(&table, &style)).as_const())
        .render_with_indent(style.indent);

    Ok(source)
}

/// Generate the component and write it to `output_path`.
pub fn generate_component(
    output_path: &Path,
    metadata: &[IconRecord],
    sprite_web_path: &str,
) -> Result<()> {
    generate_component_with(output_path, metadata, sprite_web_path, &TsxFormatter)
}

/// Like [`generate_component`], formatting with `formatter`.
///
/// A formatting failure is fatal and nothing is written.
pub fn generate_component_with(
    output_path: &Path,
    metadata: &[IconRecord],
    sprite_web_path: &str,
    formatter: &dyn Formatter,
) -> Result<()> {
    let options = FormatOptions::typescript();
    let source = render_component(metadata, sprite_web_path, &options)?;

    let formatted = match formatter.format(&source, &options) {
        Ok(formatted) => formatted,
        Err(err) => {
            error!(
                path = %output_path.display(),
                error = %err,
                "Failed to format generated component"
            );
            return Err(err.wrap_err("failed to format generated component"));
        }
    };

    File::new(output_path, formatted).write()?;
    info!("Component written to {}", output_path.display());
    Ok(())
}
