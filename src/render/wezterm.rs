//! Embedded-scripting emitter: emulator presets to a Lua configuration
//! script.

use std::fmt::Write as _;

use super::quote;
use crate::error::RenderError;
use crate::model::{ColorTable, EmulatorDefinition, KeyBinding, OptionValue, Palette};

/// Render an emulator preset into a complete Lua config script.
///
/// The script always opens with the fixed preamble (module import, action
/// alias, config-builder call) and ends with `return config`; the body in
/// between is a sequence of assignment statements. Fields at their
/// zero/default value are omitted.
///
/// Theme references must already be resolved: the emitter performs no
/// palette lookup of its own, it only serialises the `colors` table it is
/// given.
///
/// # Errors
///
/// Returns [`RenderError::EmptyDefinition`] if the definition has no name,
/// and [`RenderError::UnresolvedTheme`] if the definition references a
/// theme but its `colors` table was never populated.
pub fn render_emulator(
    def: &EmulatorDefinition,
    palette: &Palette,
) -> Result<String, RenderError> {
    if def.name.is_empty() {
        return Err(RenderError::EmptyDefinition { kind: "emulator" });
    }
    if def.colors.is_none()
        && let Some(theme) = &def.theme
    {
        return Err(RenderError::UnresolvedTheme {
            theme: theme.clone(),
        });
    }

    let mut out = String::new();

    // Header comment block.
    out.push_str("-- Generated by termrig\n");
    match &def.description {
        Some(desc) => {
            let _ = writeln!(out, "-- Emulator: {} ({desc})", def.name);
        }
        None => {
            let _ = writeln!(out, "-- Emulator: {}", def.name);
        }
    }
    let _ = writeln!(out, "-- Palette: {}", palette.name);
    out.push('\n');

    // Fixed preamble.
    out.push_str("local wezterm = require(\"wezterm\")\n");
    out.push_str("local act = wezterm.action\n");
    out.push('\n');
    out.push_str("local config = wezterm.config_builder()\n");
    out.push('\n');

    write_scalars(&mut out, def);
    if let Some(colors) = &def.colors {
        write_colors(&mut out, colors);
    }
    write_keys(&mut out, def);

    for plugin in &def.plugins {
        let _ = writeln!(
            out,
            "wezterm.plugin.require({}).apply_to_config(config)",
            quote(plugin)
        );
    }

    out.push_str("\nreturn config\n");
    Ok(out)
}

fn write_scalars(out: &mut String, def: &EmulatorDefinition) {
    if let Some(family) = &def.font.family {
        let _ = writeln!(out, "config.font = wezterm.font({})", quote(family));
    }
    if let Some(size) = def.font.size {
        let _ = writeln!(out, "config.font_size = {size}");
    }
    if let Some(opacity) = def.window.opacity {
        let _ = writeln!(out, "config.window_background_opacity = {opacity}");
    }
    if let Some(blur) = def.window.blur {
        let _ = writeln!(out, "config.macos_window_background_blur = {blur}");
    }
    if let Some(decorations) = &def.window.decorations {
        let _ = writeln!(out, "config.window_decorations = {}", quote(decorations));
    }
    if let Some(padding) = &def.window.padding {
        let _ = writeln!(
            out,
            "config.window_padding = {{ left = {}, right = {}, top = {}, bottom = {} }}",
            padding.left, padding.right, padding.top, padding.bottom
        );
    }
    if def.scrollback_lines != 0 {
        let _ = writeln!(out, "config.scrollback_lines = {}", def.scrollback_lines);
    }
    if let Some(workspace) = &def.default_workspace {
        let _ = writeln!(out, "config.default_workspace = {}", quote(workspace));
    }
    if let Some(enabled) = def.tab_bar.enabled {
        let _ = writeln!(out, "config.enable_tab_bar = {enabled}");
    }
    if let Some(hide) = def.tab_bar.hide_if_single_tab {
        let _ = writeln!(out, "config.hide_tab_bar_if_only_one_tab = {hide}");
    }
    if let Some(bottom) = def.tab_bar.at_bottom {
        let _ = writeln!(out, "config.tab_bar_at_bottom = {bottom}");
    }
}

fn write_colors(out: &mut String, colors: &ColorTable) {
    out.push_str("config.colors = {\n");
    for (key, value) in [
        ("foreground", &colors.foreground),
        ("background", &colors.background),
        ("cursor_bg", &colors.cursor_bg),
        ("cursor_fg", &colors.cursor_fg),
        ("cursor_border", &colors.cursor_border),
        ("selection_fg", &colors.selection_fg),
        ("selection_bg", &colors.selection_bg),
    ] {
        if let Some(color) = value {
            let _ = writeln!(out, "  {key} = {},", quote(color));
        }
    }
    for (key, entries) in [("ansi", &colors.ansi), ("brights", &colors.brights)] {
        if !entries.is_empty() {
            let rendered: Vec<String> = entries.iter().map(|c| quote(c)).collect();
            let _ = writeln!(out, "  {key} = {{ {} }},", rendered.join(", "));
        }
    }
    out.push_str("}\n");
}

fn write_keys(out: &mut String, def: &EmulatorDefinition) {
    if let Some(leader) = &def.leader {
        let mut fields = vec![format!("key = {}", quote(&leader.key))];
        if let Some(mods) = &leader.mods {
            fields.push(format!("mods = {}", quote(mods)));
        }
        if let Some(timeout) = leader.timeout_milliseconds {
            fields.push(format!("timeout_milliseconds = {timeout}"));
        }
        let _ = writeln!(out, "config.leader = {{ {} }}", fields.join(", "));
    }

    if !def.keys.is_empty() {
        out.push_str("config.keys = {\n");
        for binding in &def.keys {
            let _ = writeln!(out, "  {},", binding_literal(binding));
        }
        out.push_str("}\n");
    }

    if !def.key_tables.is_empty() {
        out.push_str("config.key_tables = {\n");
        for (table, bindings) in &def.key_tables {
            let _ = writeln!(out, "  {table} = {{");
            for binding in bindings {
                let _ = writeln!(out, "    {},", binding_literal(binding));
            }
            out.push_str("  },\n");
        }
        out.push_str("}\n");
    }
}

/// One keybinding as a Lua table literal, with the action wrapped as a
/// call into the `act` alias namespace.
fn binding_literal(binding: &KeyBinding) -> String {
    let mut fields = vec![format!("key = {}", quote(&binding.key))];
    if let Some(mods) = &binding.mods {
        fields.push(format!("mods = {}", quote(mods)));
    }
    let action = match &binding.arg {
        Some(arg) => format!("act.{}({})", binding.action, lua_value(arg)),
        None => format!("act.{}", binding.action),
    };
    fields.push(format!("action = {action}"));
    format!("{{ {} }}", fields.join(", "))
}

/// Type-directed scalar formatting for action arguments and table values.
fn lua_value(value: &OptionValue) -> String {
    match value {
        OptionValue::Bool(b) => b.to_string(),
        OptionValue::Int(i) => i.to_string(),
        OptionValue::Float(f) => f.to_string(),
        OptionValue::String(s) => quote(s),
        OptionValue::List(items) => {
            let rendered: Vec<String> = items.iter().map(lua_value).collect();
            format!("{{ {} }}", rendered.join(", "))
        }
        OptionValue::Table(table) => {
            let rendered: Vec<String> = table
                .iter()
                .map(|(k, v)| format!("{k} = {}", lua_value(v)))
                .collect();
            format!("{{ {} }}", rendered.join(", "))
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::model::{FontConfig, LeaderKey, Padding, TabBarConfig, WindowConfig};
    use std::collections::BTreeMap;

    fn minimal(name: &str) -> EmulatorDefinition {
        EmulatorDefinition {
            name: name.to_string(),
            description: None,
            theme: None,
            font: FontConfig::default(),
            window: WindowConfig::default(),
            scrollback_lines: 0,
            default_workspace: None,
            colors: None,
            leader: None,
            keys: Vec::new(),
            key_tables: BTreeMap::new(),
            tab_bar: TabBarConfig::default(),
            plugins: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Preamble and trailer
    // -----------------------------------------------------------------------

    #[test]
    fn preamble_and_trailer_are_fixed() {
        let text = render_emulator(&minimal("bare"), &builtin::catppuccin_mocha()).unwrap();
        assert!(text.contains("local wezterm = require(\"wezterm\")\n"));
        assert!(text.contains("local act = wezterm.action\n"));
        assert!(text.contains("local config = wezterm.config_builder()\n"));
        assert!(text.ends_with("\nreturn config\n"));
    }

    #[test]
    fn defaults_emit_no_assignments() {
        let text = render_emulator(&minimal("bare"), &builtin::catppuccin_mocha()).unwrap();
        assert!(!text.contains("config.font"));
        assert!(!text.contains("config.scrollback_lines"));
        assert!(!text.contains("config.colors"));
        assert!(!text.contains("config.keys"));
    }

    // -----------------------------------------------------------------------
    // Invalid input
    // -----------------------------------------------------------------------

    #[test]
    fn empty_name_is_rejected() {
        let err = render_emulator(&minimal(""), &builtin::catppuccin_mocha()).unwrap_err();
        assert_eq!(err, RenderError::EmptyDefinition { kind: "emulator" });
    }

    #[test]
    fn unpopulated_theme_reference_is_rejected() {
        let mut def = minimal("daily");
        def.theme = Some("catppuccin-mocha".to_string());
        let err = render_emulator(&def, &builtin::catppuccin_mocha()).unwrap_err();
        assert_eq!(
            err,
            RenderError::UnresolvedTheme {
                theme: "catppuccin-mocha".to_string()
            }
        );
    }

    #[test]
    fn theme_reference_with_populated_colors_renders() {
        let mut palette = Palette::new("tokyonight-night");
        palette
            .semantic
            .insert("background".to_string(), "#1a1b26".to_string());

        let mut def = minimal("daily");
        def.theme = Some("tokyonight-night".to_string());
        def.colors = Some(ColorTable::from_palette(&palette));

        let text = render_emulator(&def, &palette).unwrap();
        assert!(text.contains("  background = \"#1a1b26\",\n"));
    }

    // -----------------------------------------------------------------------
    // Scalar assignments
    // -----------------------------------------------------------------------

    #[test]
    fn font_window_and_workspace_assignments() {
        let mut def = minimal("daily");
        def.font = FontConfig {
            family: Some("JetBrains Mono".to_string()),
            size: Some(13.0),
        };
        def.window = WindowConfig {
            opacity: Some(0.95),
            blur: Some(20),
            decorations: Some("RESIZE".to_string()),
            padding: Some(Padding {
                left: 8,
                right: 8,
                top: 4,
                bottom: 4,
            }),
        };
        def.scrollback_lines = 10_000;
        def.default_workspace = Some("main".to_string());
        def.tab_bar = TabBarConfig {
            enabled: Some(true),
            hide_if_single_tab: Some(true),
            at_bottom: None,
        };

        let text = render_emulator(&def, &builtin::catppuccin_mocha()).unwrap();
        assert!(text.contains("config.font = wezterm.font(\"JetBrains Mono\")\n"));
        assert!(text.contains("config.font_size = 13\n"));
        assert!(text.contains("config.window_background_opacity = 0.95\n"));
        assert!(text.contains("config.macos_window_background_blur = 20\n"));
        assert!(text.contains("config.window_decorations = \"RESIZE\"\n"));
        assert!(text.contains(
            "config.window_padding = { left = 8, right = 8, top = 4, bottom = 4 }\n"
        ));
        assert!(text.contains("config.scrollback_lines = 10000\n"));
        assert!(text.contains("config.default_workspace = \"main\"\n"));
        assert!(text.contains("config.enable_tab_bar = true\n"));
        assert!(text.contains("config.hide_tab_bar_if_only_one_tab = true\n"));
        assert!(!text.contains("tab_bar_at_bottom"));
    }

    // -----------------------------------------------------------------------
    // Color table
    // -----------------------------------------------------------------------

    #[test]
    fn color_table_emits_fixed_keys_and_arrays() {
        let mut def = minimal("daily");
        def.colors = Some(ColorTable::from_palette(&builtin::catppuccin_mocha()));
        let text = render_emulator(&def, &builtin::catppuccin_mocha()).unwrap();
        assert!(text.contains("config.colors = {\n"));
        assert!(text.contains("  foreground = \"#cdd6f4\",\n"));
        assert!(text.contains("  background = \"#1e1e2e\",\n"));
        assert!(text.contains("  cursor_bg = \"#f5e0dc\",\n"));
        assert!(text.contains(
            "  ansi = { \"#45475a\", \"#f38ba8\", \"#a6e3a1\", \"#f9e2af\", \"#89b4fa\", \"#f5c2e7\", \"#94e2d5\", \"#bac2de\" },\n"
        ));
        assert!(text.contains("  brights = { "));
    }

    // -----------------------------------------------------------------------
    // Leader and keybindings
    // -----------------------------------------------------------------------

    #[test]
    fn leader_and_keys_emit_table_literals() {
        let mut def = minimal("daily");
        def.leader = Some(LeaderKey {
            key: "a".to_string(),
            mods: Some("CTRL".to_string()),
            timeout_milliseconds: Some(1000),
        });
        def.keys = vec![
            KeyBinding {
                key: "-".to_string(),
                mods: Some("LEADER".to_string()),
                action: "SplitVertical".to_string(),
                arg: Some(OptionValue::Table(BTreeMap::from([(
                    "domain".to_string(),
                    OptionValue::String("CurrentPaneDomain".to_string()),
                )]))),
            },
            KeyBinding {
                key: "c".to_string(),
                mods: None,
                action: "ActivateCopyMode".to_string(),
                arg: None,
            },
        ];

        let text = render_emulator(&def, &builtin::catppuccin_mocha()).unwrap();
        assert!(text.contains(
            "config.leader = { key = \"a\", mods = \"CTRL\", timeout_milliseconds = 1000 }\n"
        ));
        assert!(text.contains(
            "  { key = \"-\", mods = \"LEADER\", action = act.SplitVertical({ domain = \"CurrentPaneDomain\" }) },\n"
        ));
        assert!(text.contains("  { key = \"c\", action = act.ActivateCopyMode },\n"));
    }

    #[test]
    fn key_tables_emit_nested_literals() {
        let mut def = minimal("daily");
        def.key_tables = BTreeMap::from([(
            "resize_pane".to_string(),
            vec![KeyBinding {
                key: "h".to_string(),
                mods: None,
                action: "AdjustPaneSize".to_string(),
                arg: Some(OptionValue::List(vec![
                    OptionValue::String("Left".to_string()),
                    OptionValue::Int(1),
                ])),
            }],
        )]);

        let text = render_emulator(&def, &builtin::catppuccin_mocha()).unwrap();
        assert!(text.contains("config.key_tables = {\n"));
        assert!(text.contains("  resize_pane = {\n"));
        assert!(text.contains(
            "    { key = \"h\", action = act.AdjustPaneSize({ \"Left\", 1 }) },\n"
        ));
    }

    #[test]
    fn plugins_emit_require_lines() {
        let mut def = minimal("daily");
        def.plugins = vec!["https://github.com/owner/plugin.wezterm".to_string()];
        let text = render_emulator(&def, &builtin::catppuccin_mocha()).unwrap();
        assert!(text.contains(
            "wezterm.plugin.require(\"https://github.com/owner/plugin.wezterm\").apply_to_config(config)\n"
        ));
    }

    // -----------------------------------------------------------------------
    // Escaping
    // -----------------------------------------------------------------------

    #[test]
    fn strings_escape_backslashes_and_quotes() {
        let mut def = minimal("daily");
        def.keys = vec![KeyBinding {
            key: "s".to_string(),
            mods: Some("CTRL".to_string()),
            action: "SendString".to_string(),
            arg: Some(OptionValue::String("say \"hi\" \\ bye".to_string())),
        }];
        let text = render_emulator(&def, &builtin::catppuccin_mocha()).unwrap();
        assert!(text.contains("act.SendString(\"say \\\"hi\\\" \\\\ bye\")"));
    }

    #[test]
    fn empty_strings_stay_quoted() {
        let mut def = minimal("daily");
        def.default_workspace = Some(String::new());
        let text = render_emulator(&def, &builtin::catppuccin_mocha()).unwrap();
        assert!(text.contains("config.default_workspace = \"\"\n"));
    }

    #[test]
    fn rendering_twice_is_byte_identical() {
        let mut def = minimal("daily");
        def.colors = Some(ColorTable::from_palette(&builtin::catppuccin_mocha()));
        let palette = builtin::catppuccin_mocha();
        assert_eq!(
            render_emulator(&def, &palette).unwrap(),
            render_emulator(&def, &palette).unwrap()
        );
    }
}
