//! Built-in resource library.
//!
//! Defaults constructed in code so a fresh install can render something
//! useful without any resource documents on disk. User documents of the
//! same name shadow these.

use crate::model::{Package, Palette};

/// The palette used when neither the CLI nor the definition names one.
pub const DEFAULT_PALETTE: &str = "catppuccin-mocha";

/// All built-in palettes.
#[must_use]
pub fn palettes() -> Vec<Palette> {
    vec![catppuccin_mocha(), tokyonight_night()]
}

/// All built-in packages.
#[must_use]
pub fn packages() -> Vec<Package> {
    vec![
        Package {
            name: "core".to_string(),
            description: Some("Baseline shell setup".to_string()),
            extends: None,
            plugins: vec![
                "zsh-autosuggestions".to_string(),
                "zsh-syntax-highlighting".to_string(),
            ],
            prompts: vec!["minimal".to_string()],
            profiles: vec!["base".to_string()],
        },
        Package {
            name: "developer".to_string(),
            description: Some("Everyday development additions".to_string()),
            extends: Some("core".to_string()),
            plugins: vec!["fzf".to_string(), "zoxide".to_string()],
            prompts: vec!["powerline".to_string()],
            profiles: vec!["coding".to_string()],
        },
    ]
}

/// The Catppuccin Mocha palette.
#[must_use]
pub fn catppuccin_mocha() -> Palette {
    let mut p = Palette::new("catppuccin-mocha");
    let ansi = [
        ("black", "#45475a"),
        ("red", "#f38ba8"),
        ("green", "#a6e3a1"),
        ("yellow", "#f9e2af"),
        ("blue", "#89b4fa"),
        ("magenta", "#f5c2e7"),
        ("cyan", "#94e2d5"),
        ("white", "#bac2de"),
        ("bright_black", "#585b70"),
        ("bright_red", "#f38ba8"),
        ("bright_green", "#a6e3a1"),
        ("bright_yellow", "#f9e2af"),
        ("bright_blue", "#89b4fa"),
        ("bright_magenta", "#f5c2e7"),
        ("bright_cyan", "#94e2d5"),
        ("bright_white", "#a6adc8"),
    ];
    let semantic = [
        ("background", "#1e1e2e"),
        ("foreground", "#cdd6f4"),
        ("cursor", "#f5e0dc"),
        ("selection_bg", "#585b70"),
        ("selection_fg", "#cdd6f4"),
        ("primary", "#89b4fa"),
        ("secondary", "#f2cdcd"),
        ("accent", "#b4befe"),
        ("success", "#a6e3a1"),
        ("warning", "#fab387"),
        ("error", "#f38ba8"),
        ("info", "#74c7ec"),
        ("surface", "#313244"),
        ("overlay", "#6c7086"),
        ("muted", "#a6adc8"),
        ("text", "#cdd6f4"),
    ];
    for (k, v) in ansi {
        p.ansi.insert(k.to_string(), v.to_string());
    }
    for (k, v) in semantic {
        p.semantic.insert(k.to_string(), v.to_string());
    }
    p
}

/// The Tokyo Night (night variant) palette.
#[must_use]
pub fn tokyonight_night() -> Palette {
    let mut p = Palette::new("tokyonight-night");
    let ansi = [
        ("black", "#15161e"),
        ("red", "#f7768e"),
        ("green", "#9ece6a"),
        ("yellow", "#e0af68"),
        ("blue", "#7aa2f7"),
        ("magenta", "#bb9af7"),
        ("cyan", "#7dcfff"),
        ("white", "#a9b1d6"),
        ("bright_black", "#414868"),
        ("bright_red", "#f7768e"),
        ("bright_green", "#9ece6a"),
        ("bright_yellow", "#e0af68"),
        ("bright_blue", "#7aa2f7"),
        ("bright_magenta", "#bb9af7"),
        ("bright_cyan", "#7dcfff"),
        ("bright_white", "#c0caf5"),
    ];
    let semantic = [
        ("background", "#1a1b26"),
        ("foreground", "#c0caf5"),
        ("cursor", "#c0caf5"),
        ("selection_bg", "#283457"),
        ("selection_fg", "#c0caf5"),
        ("primary", "#7aa2f7"),
        ("secondary", "#bb9af7"),
        ("accent", "#7dcfff"),
        ("success", "#9ece6a"),
        ("warning", "#e0af68"),
        ("error", "#f7768e"),
        ("info", "#7dcfff"),
        ("surface", "#24283b"),
        ("overlay", "#565f89"),
        ("muted", "#565f89"),
        ("text", "#c0caf5"),
    ];
    for (k, v) in ansi {
        p.ansi.insert(k.to_string(), v.to_string());
    }
    for (k, v) in semantic {
        p.semantic.insert(k.to_string(), v.to_string());
    }
    p
}
