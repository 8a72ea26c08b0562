//! Shell startup definitions rendered into script snippets.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The shell dialects snippets can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShellDialect {
    /// Z shell.
    #[default]
    Zsh,
    /// GNU Bash.
    Bash,
    /// Fish shell.
    Fish,
}

impl ShellDialect {
    /// Lowercase dialect name as used in documents and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zsh => "zsh",
            Self::Bash => "bash",
            Self::Fish => "fish",
        }
    }
}

impl std::fmt::Display for ShellDialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How plugins are registered in the generated snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PluginManager {
    /// `zinit light <repo>` registration lines.
    Zinit,
    /// Append to the oh-my-zsh `plugins` array.
    OhMyZsh,
    /// Plain `source <path>` statements.
    #[default]
    Source,
}

impl PluginManager {
    /// Kebab-case manager name as used in documents and flags.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Zinit => "zinit",
            Self::OhMyZsh => "oh-my-zsh",
            Self::Source => "source",
        }
    }
}

impl std::fmt::Display for PluginManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a shell plugin.
///
/// Which field identifies the plugin depends on the plugin manager:
/// `repo` for framework registration, `path` for raw sourcing. Entries
/// missing the required field are skipped with a warning at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRef {
    /// Plugin name.
    pub name: String,

    /// `owner/repo` shorthand for framework-managed plugins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Filesystem path for raw-sourced plugins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl PluginRef {
    /// Build a reference from a bare component name.
    ///
    /// Names containing a `/` are treated as `owner/repo` shorthand.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let repo = name.contains('/').then(|| name.to_string());
        Self {
            name: name.to_string(),
            repo,
            path: None,
        }
    }
}

/// A shell alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// Alias name.
    pub name: String,
    /// Command the alias expands to.
    pub command: String,
}

/// An exported environment variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    /// Variable name.
    pub name: String,
    /// Variable value.
    pub value: String,
}

/// A shell function definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellFunction {
    /// Function name.
    pub name: String,
    /// Function body, one or more lines.
    pub body: String,
}

/// Shell history settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// In-memory history size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Persisted history size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub save: Option<u64>,

    /// Share history between concurrent sessions.
    #[serde(default)]
    pub share: bool,

    /// Drop duplicate entries.
    #[serde(default)]
    pub ignore_dups: bool,
}

/// A line-editor keybinding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellKeybinding {
    /// Key sequence (e.g., `"^R"`).
    pub sequence: String,
    /// Editor widget or command bound to the sequence.
    pub widget: String,
}

/// A declarative shell startup specification.
///
/// Flat lists of simple entries; rendering is direct serialization with no
/// resolution step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellDefinition {
    /// Unique definition name.
    pub name: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Target shell dialect.
    #[serde(default)]
    pub dialect: ShellDialect,

    /// Plugin registration style.
    #[serde(default)]
    pub plugin_manager: PluginManager,

    /// Plugins to register.
    #[serde(default)]
    pub plugins: Vec<PluginRef>,

    /// Aliases, in declaration order.
    #[serde(default)]
    pub aliases: Vec<Alias>,

    /// Environment variables, in declaration order.
    #[serde(default)]
    pub env: Vec<EnvVar>,

    /// Function definitions.
    #[serde(default)]
    pub functions: Vec<ShellFunction>,

    /// Directories prepended to `PATH`.
    #[serde(default)]
    pub path_prepend: Vec<String>,

    /// Directories appended to `PATH`.
    #[serde(default)]
    pub path_append: Vec<String>,

    /// Shell options to enable.
    #[serde(default)]
    pub options: Vec<String>,

    /// History settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<HistoryConfig>,

    /// Line-editor keybindings.
    #[serde(default)]
    pub keybindings: Vec<ShellKeybinding>,
}
