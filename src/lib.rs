//! Declarative terminal-configuration engine.
//!
//! Manages declarative terminal resources — prompts, plugins, shell
//! settings, emulator presets, and packages that bundle them — and renders
//! them into the native formats of third-party terminal tools: a
//! prompt-engine TOML config, a Lua emulator config, and shell startup
//! snippets.
//!
//! The public API is organised into four layers:
//!
//! - **[`model`]** — parsed resource document types
//! - **[`resolve`]** — inheritance chains and theme placeholders
//! - **[`render`]** — the three target emitters
//! - **[`commands`]** — top-level subcommand orchestration
//!
//! [`store`] loads documents from disk and merges the [`builtin`] library;
//! the resolution and rendering layers themselves perform no I/O and hold
//! no shared state, so every call is a pure function over its inputs.
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod builtin;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod model;
pub mod render;
pub mod resolve;
pub mod store;
