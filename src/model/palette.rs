//! Named color palettes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named, immutable mapping from color keys to literal color values.
///
/// A palette exposes two views: the terminal/ANSI slots (`red`,
/// `bright_blue`, …) and the semantic names (`primary`, `error`,
/// `background`, …). Keys are case-sensitive. An absent key resolves to
/// "not found" rather than an error; the placeholder engine turns that
/// into verbatim pass-through.
///
/// # Examples
///
/// ```
/// use termrig::model::Palette;
///
/// let mut palette = Palette::new("demo");
/// palette.semantic.insert("primary".to_string(), "#89b4fa".to_string());
/// assert_eq!(palette.lookup("primary"), Some("#89b4fa"));
/// assert_eq!(palette.lookup("missing"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Unique palette name.
    pub name: String,

    /// Semantic color names (`primary`, `error`, `background`, …).
    #[serde(default)]
    pub semantic: BTreeMap<String, String>,

    /// Terminal/ANSI color slots (`black` … `white`, `bright_*`).
    #[serde(default)]
    pub ansi: BTreeMap<String, String>,
}

impl Palette {
    /// Create an empty palette with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            semantic: BTreeMap::new(),
            ansi: BTreeMap::new(),
        }
    }

    /// Look up a color key, checking the terminal/ANSI slots first and the
    /// semantic names second.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.ansi
            .get(key)
            .or_else(|| self.semantic.get(key))
            .map(String::as_str)
    }

    /// All color entries for generated palette blocks: every ANSI slot plus
    /// any semantic key not shadowed by an ANSI slot, sorted by key.
    #[must_use]
    pub fn merged_colors(&self) -> BTreeMap<&str, &str> {
        let mut merged: BTreeMap<&str, &str> = self
            .ansi
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        for (k, v) in &self.semantic {
            merged.entry(k.as_str()).or_insert(v.as_str());
        }
        merged
    }
}
