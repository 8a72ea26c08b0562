//! In-memory resource document types.
//!
//! Each resource kind has a serde-deserialisable struct parsed once from a
//! YAML or TOML document. All types here are plain immutable data: the
//! resolution and rendering pipeline never mutates a loaded resource.

pub mod emulator;
pub mod package;
pub mod palette;
pub mod prompt;
pub mod shell;
pub mod value;

pub use emulator::{
    ColorTable, EmulatorDefinition, FontConfig, KeyBinding, LeaderKey, Padding, TabBarConfig,
    WindowConfig,
};
pub use package::{ComponentKind, Package};
pub use palette::Palette;
pub use prompt::{ModuleConfig, PromptDefinition};
pub use shell::{
    Alias, EnvVar, HistoryConfig, PluginManager, PluginRef, ShellDefinition, ShellDialect,
    ShellFunction, ShellKeybinding,
};
pub use value::OptionValue;
