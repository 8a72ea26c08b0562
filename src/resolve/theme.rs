//! Theme placeholder resolution.
//!
//! Substitutes `${theme.<name>}` placeholders in string fields against a
//! palette. Substitution is best-effort: a placeholder with no matching
//! palette key passes through verbatim, so a literal `${theme.…}` in a
//! generated file is the visible signal of a missing color, not a render
//! failure.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::Palette;

/// Compiled `${theme.<identifier>}` pattern. Identifiers are
/// alphanumeric/underscore tokens not starting with a digit.
#[allow(clippy::expect_used)] // pattern is a compile-time literal
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{theme\.([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern compiles")
});

/// Identifier-to-palette-key aliases.
///
/// Covers the shorthand names (`bg`, `fg`) and the third-party theme
/// vocabulary (Catppuccin-style surface/overlay/accent names) that
/// documents commonly use, mapped onto the palette's own semantic and
/// ANSI keys. Identifiers with no alias are used as palette keys
/// directly.
static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("bg", "background"),
        ("fg", "foreground"),
        ("base", "background"),
        ("mantle", "background"),
        ("crust", "background"),
        ("text", "foreground"),
        ("subtext0", "muted"),
        ("subtext1", "muted"),
        ("surface0", "surface"),
        ("surface1", "surface"),
        ("surface2", "overlay"),
        ("overlay0", "overlay"),
        ("overlay1", "overlay"),
        ("overlay2", "overlay"),
        ("rosewater", "cursor"),
        ("flamingo", "secondary"),
        ("pink", "magenta"),
        ("mauve", "primary"),
        ("maroon", "error"),
        ("peach", "warning"),
        ("sky", "cyan"),
        ("sapphire", "info"),
        ("lavender", "accent"),
        ("teal", "cyan"),
        ("purple", "magenta"),
        ("orange", "warning"),
        ("grey", "bright_black"),
        ("gray", "bright_black"),
    ])
});

/// Resolve every `${theme.<name>}` placeholder in `input` against
/// `palette`.
///
/// Each captured identifier is first mapped through the alias table, then
/// looked up among the palette's terminal/ANSI slots and finally its
/// semantic names. On a hit the whole placeholder is replaced with the
/// literal color value; on a miss the placeholder is left unchanged.
///
/// # Examples
///
/// ```
/// use termrig::model::Palette;
/// use termrig::resolve::resolve_placeholders;
///
/// let mut palette = Palette::new("demo");
/// palette.semantic.insert("primary".to_string(), "#89b4fa".to_string());
///
/// assert_eq!(
///     resolve_placeholders("${theme.primary} text", &palette),
///     "#89b4fa text"
/// );
/// assert_eq!(
///     resolve_placeholders("${theme.doesnotexist}", &palette),
///     "${theme.doesnotexist}"
/// );
/// ```
#[must_use]
pub fn resolve_placeholders(input: &str, palette: &Palette) -> String {
    PLACEHOLDER
        .replace_all(input, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            let ident = caps.get(1).map_or("", |m| m.as_str());
            let key = ALIASES.get(ident).copied().unwrap_or(ident);
            palette
                .lookup(key)
                .map_or_else(|| whole.to_string(), ToString::to_string)
        })
        .into_owned()
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        let mut p = Palette::new("test");
        p.semantic
            .insert("primary".to_string(), "#89b4fa".to_string());
        p.semantic
            .insert("background".to_string(), "#1e1e2e".to_string());
        p.ansi.insert("red".to_string(), "#f38ba8".to_string());
        p
    }

    #[test]
    fn semantic_key_resolves() {
        assert_eq!(
            resolve_placeholders("${theme.primary} text", &palette()),
            "#89b4fa text"
        );
    }

    #[test]
    fn ansi_key_resolves() {
        assert_eq!(resolve_placeholders("${theme.red}", &palette()), "#f38ba8");
    }

    #[test]
    fn alias_maps_onto_palette_key() {
        assert_eq!(resolve_placeholders("${theme.bg}", &palette()), "#1e1e2e");
        assert_eq!(
            resolve_placeholders("${theme.crust}", &palette()),
            "#1e1e2e"
        );
        assert_eq!(
            resolve_placeholders("${theme.mauve}", &palette()),
            "#89b4fa"
        );
    }

    #[test]
    fn unknown_identifier_passes_through_verbatim() {
        assert_eq!(
            resolve_placeholders("${theme.doesnotexist}", &palette()),
            "${theme.doesnotexist}"
        );
    }

    #[test]
    fn multiple_placeholders_in_one_string() {
        assert_eq!(
            resolve_placeholders("bold ${theme.primary} on ${theme.bg}", &palette()),
            "bold #89b4fa on #1e1e2e"
        );
    }

    #[test]
    fn mixed_hits_and_misses() {
        assert_eq!(
            resolve_placeholders("${theme.red}/${theme.nope}", &palette()),
            "#f38ba8/${theme.nope}"
        );
    }

    #[test]
    fn ansi_view_wins_over_semantic_on_shared_keys() {
        let mut p = palette();
        p.ansi
            .insert("primary".to_string(), "#000001".to_string());
        assert_eq!(resolve_placeholders("${theme.primary}", &p), "#000001");
    }

    #[test]
    fn malformed_placeholders_are_not_matched() {
        // Digit-leading identifier, missing brace, wrong namespace.
        assert_eq!(
            resolve_placeholders("${theme.0bad}", &palette()),
            "${theme.0bad}"
        );
        assert_eq!(
            resolve_placeholders("${theme.primary", &palette()),
            "${theme.primary"
        );
        assert_eq!(
            resolve_placeholders("${color.primary}", &palette()),
            "${color.primary}"
        );
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        assert_eq!(resolve_placeholders("plain text", &palette()), "plain text");
        assert_eq!(resolve_placeholders("", &palette()), "");
    }

    #[test]
    fn resolution_is_idempotent_on_resolved_output() {
        let once = resolve_placeholders("${theme.primary}", &palette());
        let twice = resolve_placeholders(&once, &palette());
        assert_eq!(once, twice);
    }
}
