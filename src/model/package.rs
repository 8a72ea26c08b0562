//! Packages: named bundles of component references with single-parent
//! inheritance.

use serde::{Deserialize, Serialize};

/// A named bundle of component references.
///
/// A package lists the plugins, prompts, and profiles it provides and may
/// extend exactly one parent package by name. The `extends` field is a
/// name, not an object reference, so package graphs stay acyclic by
/// construction and resolution state never lives on the package itself.
///
/// Packages are immutable once loaded; resolution never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Unique package name.
    pub name: String,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Name of the parent package, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Plugin names this package provides, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Prompt names this package provides, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prompts: Vec<String>,

    /// Profile names this package provides, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<String>,
}

/// The three component list kinds a package may contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    /// Shell plugin references.
    Plugin,
    /// Prompt definition references.
    Prompt,
    /// Profile references.
    Profile,
}

impl ComponentKind {
    /// The component list of `pkg` for this kind.
    #[must_use]
    pub fn list(self, pkg: &Package) -> &[String] {
        match self {
            Self::Plugin => &pkg.plugins,
            Self::Prompt => &pkg.prompts,
            Self::Profile => &pkg.profiles,
        }
    }

    /// Singular display label for this kind.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Plugin => "plugin",
            Self::Prompt => "prompt",
            Self::Profile => "profile",
        }
    }
}
