//! Terminal-emulator presets rendered into a Lua configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{OptionValue, Palette};

/// A declarative terminal-emulator specification.
///
/// Colors come from either an embedded [`ColorTable`] or a theme reference;
/// when only `theme` is set, the caller resolves it into `colors` before
/// the emitter runs. The emitter itself performs no theme lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmulatorDefinition {
    /// Unique preset name.
    pub name: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Named theme reference, resolved into `colors` by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Font settings.
    #[serde(default)]
    pub font: FontConfig,

    /// Window settings.
    #[serde(default)]
    pub window: WindowConfig,

    /// Scrollback buffer size in lines. Zero means the emulator default.
    #[serde(default)]
    pub scrollback_lines: u32,

    /// Workspace selected at startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_workspace: Option<String>,

    /// Literal color table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorTable>,

    /// Leader key, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<LeaderKey>,

    /// Keybinding list.
    #[serde(default)]
    pub keys: Vec<KeyBinding>,

    /// Named keybinding tables activated via modal actions.
    #[serde(default)]
    pub key_tables: BTreeMap<String, Vec<KeyBinding>>,

    /// Tab-bar settings.
    #[serde(default)]
    pub tab_bar: TabBarConfig,

    /// Emulator plugin URLs loaded at startup.
    #[serde(default)]
    pub plugins: Vec<String>,
}

/// Font family and size.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FontConfig {
    /// Font family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Font size in points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
}

/// Window appearance settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Background opacity in `0.0..=1.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    /// Background blur radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<u32>,

    /// Window decoration mode (e.g., `"RESIZE"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorations: Option<String>,

    /// Pane padding in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

/// Per-side window padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Padding {
    /// Left padding.
    #[serde(default)]
    pub left: u32,
    /// Right padding.
    #[serde(default)]
    pub right: u32,
    /// Top padding.
    #[serde(default)]
    pub top: u32,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: u32,
}

/// Tab-bar settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabBarConfig {
    /// Whether the tab bar is shown at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Hide the tab bar while only one tab is open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_if_single_tab: Option<bool>,

    /// Place the tab bar at the bottom of the window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_bottom: Option<bool>,
}

/// The emulator color table with fixed keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorTable {
    /// Default text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    /// Default background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Cursor block color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_bg: Option<String>,
    /// Text color under the cursor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_fg: Option<String>,
    /// Cursor border color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_border: Option<String>,
    /// Selected text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_fg: Option<String>,
    /// Selection background color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_bg: Option<String>,
    /// The eight normal ANSI colors, black through white.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ansi: Vec<String>,
    /// The eight bright ANSI colors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brights: Vec<String>,
}

/// ANSI slot names in emulator color-table order.
const ANSI_SLOTS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Bright ANSI slot names in emulator color-table order.
const BRIGHT_SLOTS: [&str; 8] = [
    "bright_black",
    "bright_red",
    "bright_green",
    "bright_yellow",
    "bright_blue",
    "bright_magenta",
    "bright_cyan",
    "bright_white",
];

impl ColorTable {
    /// Build a color table from a named palette.
    ///
    /// Maps the palette's semantic keys onto the fixed table keys and fills
    /// the two eight-entry arrays from the ANSI slots. An array is omitted
    /// when any of its eight slots is missing, since a partial array would
    /// shift the remaining colors into the wrong slots.
    #[must_use]
    pub fn from_palette(palette: &Palette) -> Self {
        let slot_values = |slots: &[&str; 8]| -> Vec<String> {
            let resolved: Vec<&str> = slots
                .iter()
                .filter_map(|slot| palette.lookup(slot))
                .collect();
            if resolved.len() == slots.len() {
                resolved.into_iter().map(ToString::to_string).collect()
            } else {
                Vec::new()
            }
        };

        let semantic = |key: &str| palette.lookup(key).map(ToString::to_string);

        Self {
            foreground: semantic("foreground"),
            background: semantic("background"),
            cursor_bg: semantic("cursor"),
            cursor_fg: semantic("background"),
            cursor_border: semantic("cursor"),
            selection_fg: semantic("selection_fg"),
            selection_bg: semantic("selection_bg"),
            ansi: slot_values(&ANSI_SLOTS),
            brights: slot_values(&BRIGHT_SLOTS),
        }
    }
}

/// The leader key chord.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderKey {
    /// Key name.
    pub key: String,
    /// Modifier string (e.g., `"CTRL"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mods: Option<String>,
    /// How long the leader stays active, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_milliseconds: Option<u64>,
}

/// A single keybinding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key name.
    pub key: String,
    /// Modifier string (e.g., `"LEADER"`, `"CTRL|SHIFT"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mods: Option<String>,
    /// Action name in the emulator's action namespace.
    pub action: String,
    /// Optional argument passed to the action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg: Option<OptionValue>,
}
