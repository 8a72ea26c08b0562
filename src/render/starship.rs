//! Structured-config emitter: prompt definitions to sectioned key/value
//! text.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::quote;
use crate::error::RenderError;
use crate::model::{ModuleConfig, OptionValue, Palette, PromptDefinition};
use crate::resolve::resolve_placeholders;

/// Render a prompt definition into a complete prompt-engine config
/// document.
///
/// The output carries a header comment block, the global settings, a
/// generated `[palettes.<name>]` block, and one section per module.
/// Modules and palette colors are emitted in sorted order so the same
/// inputs always produce byte-identical text.
///
/// # Errors
///
/// Returns [`RenderError::EmptyDefinition`] if the definition has no name.
pub fn render_prompt(
    prompt: &PromptDefinition,
    palette: &Palette,
) -> Result<String, RenderError> {
    if prompt.name.is_empty() {
        return Err(RenderError::EmptyDefinition { kind: "prompt" });
    }

    let mut out = String::new();

    // Header comment block.
    out.push_str("# Generated by termrig\n");
    match &prompt.description {
        Some(desc) => {
            let _ = writeln!(out, "# Prompt: {} ({desc})", prompt.name);
        }
        None => {
            let _ = writeln!(out, "# Prompt: {}", prompt.name);
        }
    }
    let _ = writeln!(out, "# Palette: {}", palette.name);
    out.push('\n');

    // Global settings.
    let _ = writeln!(out, "palette = {}", quote(&palette.name));
    let _ = writeln!(out, "add_newline = {}", prompt.add_newline);
    if let Some(format) = &prompt.format {
        let _ = writeln!(
            out,
            "format = {}",
            quote(&resolve_placeholders(format, palette))
        );
    }

    // Generated palette block.
    let _ = writeln!(out, "\n[palettes.{}]", palette.name);
    for (key, value) in palette.merged_colors() {
        let _ = writeln!(out, "{key} = {}", quote(value));
    }

    // Module sections, sorted by module name.
    for (name, module) in &prompt.modules {
        write_module(&mut out, name, module, palette);
    }

    Ok(out)
}

fn write_module(out: &mut String, name: &str, module: &ModuleConfig, palette: &Palette) {
    let _ = writeln!(out, "\n[{name}]");
    let _ = writeln!(out, "disabled = {}", module.disabled);
    for (key, field) in [
        ("format", &module.format),
        ("style", &module.style),
        ("symbol", &module.symbol),
    ] {
        if let Some(value) = field {
            let _ = writeln!(out, "{key} = {}", quote(&resolve_placeholders(value, palette)));
        }
    }

    // Scalar options first; nested tables become subsections and must come
    // after every scalar key of this section.
    for (key, value) in &module.options {
        if !matches!(value, OptionValue::Table(_)) {
            let _ = writeln!(out, "{key} = {}", format_value(value, palette));
        }
    }
    for (key, value) in &module.options {
        if let OptionValue::Table(table) = value {
            let capitalize = name == "os" && key == "symbols";
            write_subsection(out, &format!("{name}.{key}"), table, palette, capitalize);
        }
    }
}

fn write_subsection(
    out: &mut String,
    path: &str,
    table: &BTreeMap<String, OptionValue>,
    palette: &Palette,
    capitalize: bool,
) {
    let _ = writeln!(out, "\n[{path}]");
    for (key, value) in table {
        if !matches!(value, OptionValue::Table(_)) {
            let key = if capitalize {
                capitalize_first(key)
            } else {
                key.clone()
            };
            let _ = writeln!(out, "{key} = {}", format_value(value, palette));
        }
    }
    for (key, value) in table {
        if let OptionValue::Table(nested) = value {
            write_subsection(out, &format!("{path}.{key}"), nested, palette, false);
        }
    }
}

/// Type-directed option formatting.
///
/// Strings are placeholder-resolved and quoted; booleans and numbers are
/// literal (integral floats print without a fractional part); lists are
/// bracketed and comma-separated; tables nested inside lists fall back to
/// inline-table syntax.
fn format_value(value: &OptionValue, palette: &Palette) -> String {
    match value {
        OptionValue::Bool(b) => b.to_string(),
        OptionValue::Int(i) => i.to_string(),
        OptionValue::Float(f) => f.to_string(),
        OptionValue::String(s) => quote(&resolve_placeholders(s, palette)),
        OptionValue::List(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| format_value(item, palette))
                .collect();
            format!("[{}]", rendered.join(", "))
        }
        OptionValue::Table(table) => {
            let rendered: Vec<String> = table
                .iter()
                .map(|(k, v)| format!("{k} = {}", format_value(v, palette)))
                .collect();
            format!("{{ {} }}", rendered.join(", "))
        }
    }
}

/// Uppercase the first character of a display-label key.
fn capitalize_first(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
