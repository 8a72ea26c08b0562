//! Domain-specific error types for the termrig engine.
//!
//! This module provides a structured error hierarchy using [`thiserror`].
//! Internal modules return typed errors (e.g., [`ResolveError`],
//! [`RenderError`]) while command handlers at the CLI boundary convert them
//! to [`anyhow::Error`] via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! TermrigError
//! ├── Resolve(ResolveError) — inheritance cycles, missing parents
//! ├── Render(RenderError)   — invalid emitter input
//! └── Store(StoreError)     — document loading and lookup
//! ```
//!
//! Unresolvable `${theme.…}` placeholders and skippable shell entries are
//! deliberately *not* errors: the former pass through verbatim, the latter
//! are logged and skipped.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the termrig engine.
///
/// Aggregates domain-specific sub-errors and is convertible to
/// [`anyhow::Error`] for use at CLI command boundaries.
#[derive(Error, Debug)]
pub enum TermrigError {
    /// Package inheritance resolution error.
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Renderer invoked with invalid input.
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Resource document loading or lookup error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors that arise from package inheritance resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A package's `extends` chain revisits a package already being resolved.
    #[error("inheritance cycle detected at package '{package}'")]
    InheritanceCycle {
        /// Name of the package encountered a second time.
        package: String,
    },

    /// A package's `extends` target is absent from the lookup set.
    #[error("package '{package}' extends unknown package '{parent}'")]
    ParentNotFound {
        /// Name of the package whose parent is missing.
        package: String,
        /// Name of the missing parent.
        parent: String,
    },
}

/// Errors that arise when an emitter is invoked with invalid input.
///
/// Emitters never fail part-way: output is built wholly in memory, so any
/// error here means no text was produced at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The definition passed to the emitter has no name.
    #[error("cannot render {kind}: definition has no name")]
    EmptyDefinition {
        /// Resource kind being rendered (e.g., `"prompt"`).
        kind: &'static str,
    },

    /// An emulator definition references a theme whose colors were never
    /// populated before the emitter ran.
    #[error("emulator references theme '{theme}' but no colors were resolved")]
    UnresolvedTheme {
        /// Name of the referenced theme.
        theme: String,
    },
}

/// Errors that arise from loading and looking up resource documents.
#[derive(Error, Debug)]
pub enum StoreError {
    /// An I/O error occurred while reading a resource document.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A YAML resource document failed to parse.
    #[error("invalid YAML in {path}: {source}")]
    Yaml {
        /// Path to the offending document.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_yaml::Error,
    },

    /// A TOML resource document failed to parse.
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        /// Path to the offending document.
        path: PathBuf,
        /// Underlying parse error.
        source: toml::de::Error,
    },

    /// A resource document declares a kind this engine does not know.
    #[error("unknown resource kind '{kind}' in {path}")]
    UnknownKind {
        /// Path to the offending document.
        path: PathBuf,
        /// The declared kind.
        kind: String,
    },

    /// A named resource of the requested kind does not exist.
    #[error("no {kind} named '{name}'")]
    NotFound {
        /// Resource kind (e.g., `"package"`).
        kind: &'static str,
        /// Requested resource name.
        name: String,
    },
}
