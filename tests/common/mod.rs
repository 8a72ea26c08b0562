// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed resource set so each integration
// test can build an isolated store without repeating document boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::Path;

/// Write one resource document into `dir`.
pub fn write_doc(dir: &Path, name: &str, content: &str) {
    std::fs::write(dir.join(name), content).expect("write resource document");
}

/// Write the standard fixture documents used across the integration
/// tests:
///
/// - `duotone.yaml`  — a small palette with two semantic keys and one
///   ANSI slot
/// - `demo.yaml`     — a prompt with two modules and a theme placeholder
/// - `daily.yaml`    — an emulator preset referencing the palette as its
///   theme
/// - `work.yaml`     — a zsh shell definition with a skippable plugin
/// - `workstation.yaml` — a package extending the built-in `developer`
pub fn setup_resources(dir: &Path) {
    write_doc(
        dir,
        "duotone.yaml",
        r##"kind: palette
name: duotone
semantic:
  primary: "#89b4fa"
  background: "#1e1e2e"
ansi:
  red: "#f38ba8"
"##,
    );

    write_doc(
        dir,
        "demo.yaml",
        r##"kind: prompt
name: demo
description: Demo prompt
palette: duotone
format: "$directory$character"
modules:
  character:
    style: "bold ${theme.primary}"
    symbol: "❯"
  directory:
    truncation_length: 3
"##,
    );

    write_doc(
        dir,
        "daily.yaml",
        r##"kind: emulator
name: daily
theme: duotone
font:
  family: JetBrains Mono
  size: 13
window:
  opacity: 0.95
scrollback_lines: 5000
keys:
  - key: "-"
    mods: LEADER
    action: SplitVertical
    arg:
      domain: CurrentPaneDomain
"##,
    );

    write_doc(
        dir,
        "work.yaml",
        r##"kind: shell
name: work
dialect: zsh
plugin_manager: zinit
plugins:
  - name: autosuggestions
    repo: zsh-users/zsh-autosuggestions
  - name: broken
env:
  - name: EDITOR
    value: nvim
aliases:
  - name: ll
    command: ls -la
"##,
    );

    write_doc(
        dir,
        "workstation.yaml",
        r##"kind: package
name: workstation
extends: developer
plugins: [direnv]
profiles: [ops]
"##,
    );
}
