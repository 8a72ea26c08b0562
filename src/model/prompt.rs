//! Prompt definitions rendered into prompt-engine configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::OptionValue;

/// A declarative prompt specification.
///
/// Any string-valued field, including module options, may embed
/// `${theme.<name>}` placeholders; they are resolved against a palette at
/// render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptDefinition {
    /// Unique prompt name.
    pub name: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name of the palette this prompt prefers, overridable at render time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,

    /// Insert a leading blank line before the prompt.
    #[serde(default = "default_true")]
    pub add_newline: bool,

    /// Top-level format string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Per-module configuration, keyed by module name.
    #[serde(default)]
    pub modules: BTreeMap<String, ModuleConfig>,
}

/// Configuration for a single prompt module.
///
/// Fields beyond the well-known four are captured as typed option values
/// and emitted with type-directed formatting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Whether the module is disabled. Always emitted explicitly.
    #[serde(default)]
    pub disabled: bool,

    /// Module format string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Module style string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Module symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,

    /// All remaining module options.
    #[serde(flatten)]
    pub options: BTreeMap<String, OptionValue>,
}

const fn default_true() -> bool {
    true
}
