//! Shell-snippet emitter: shell definitions and plugin lists to startup
//! script fragments.
//!
//! Output is a sequence of newline-terminated statements with no
//! surrounding boilerplate; callers assemble the fragments into a larger
//! file. Entries missing a required field are skipped with a warning
//! rather than failing the whole render.

use std::fmt::Write as _;

use tracing::warn;

use crate::error::RenderError;
use crate::model::{
    HistoryConfig, PluginManager, PluginRef, ShellDefinition, ShellDialect,
};

/// Render a shell definition into startup snippets for its dialect.
///
/// # Errors
///
/// Returns [`RenderError::EmptyDefinition`] if the definition has no name.
pub fn render_shell(def: &ShellDefinition) -> Result<String, RenderError> {
    if def.name.is_empty() {
        return Err(RenderError::EmptyDefinition { kind: "shell" });
    }

    let dialect = def.dialect;
    let mut out = String::new();

    for var in &def.env {
        if var.name.is_empty() {
            warn!("skipping env entry with no name");
            continue;
        }
        match dialect {
            ShellDialect::Zsh | ShellDialect::Bash => {
                let _ = writeln!(out, "export {}={}", var.name, double_quote(&var.value));
            }
            ShellDialect::Fish => {
                let _ = writeln!(out, "set -gx {} {}", var.name, double_quote(&var.value));
            }
        }
    }

    for entry in &def.path_prepend {
        match dialect {
            ShellDialect::Zsh | ShellDialect::Bash => {
                let _ = writeln!(out, "export PATH=\"{entry}:$PATH\"");
            }
            ShellDialect::Fish => {
                let _ = writeln!(out, "fish_add_path --prepend {}", double_quote(entry));
            }
        }
    }
    for entry in &def.path_append {
        match dialect {
            ShellDialect::Zsh | ShellDialect::Bash => {
                let _ = writeln!(out, "export PATH=\"$PATH:{entry}\"");
            }
            ShellDialect::Fish => {
                let _ = writeln!(out, "fish_add_path --append {}", double_quote(entry));
            }
        }
    }

    for alias in &def.aliases {
        if alias.name.is_empty() {
            warn!("skipping alias with no name");
            continue;
        }
        match dialect {
            ShellDialect::Zsh | ShellDialect::Bash => {
                let _ = writeln!(out, "alias {}={}", alias.name, single_quote(&alias.command));
            }
            ShellDialect::Fish => {
                let _ = writeln!(out, "alias {} {}", alias.name, single_quote(&alias.command));
            }
        }
    }

    for function in &def.functions {
        if function.name.is_empty() {
            warn!("skipping function with no name");
            continue;
        }
        match dialect {
            ShellDialect::Zsh | ShellDialect::Bash => {
                let _ = writeln!(out, "{}() {{", function.name);
                for line in function.body.lines() {
                    let _ = writeln!(out, "  {line}");
                }
                out.push_str("}\n");
            }
            ShellDialect::Fish => {
                let _ = writeln!(out, "function {}", function.name);
                for line in function.body.lines() {
                    let _ = writeln!(out, "  {line}");
                }
                out.push_str("end\n");
            }
        }
    }

    for option in &def.options {
        match dialect {
            ShellDialect::Zsh => {
                let _ = writeln!(out, "setopt {option}");
            }
            ShellDialect::Bash => {
                let _ = writeln!(out, "shopt -s {option}");
            }
            ShellDialect::Fish => {
                warn!("shell option '{option}' has no fish equivalent; skipping");
            }
        }
    }

    if let Some(history) = &def.history {
        write_history(&mut out, history, dialect);
    }

    for binding in &def.keybindings {
        if binding.sequence.is_empty() {
            warn!("skipping keybinding with no sequence");
            continue;
        }
        match dialect {
            ShellDialect::Zsh => {
                let _ = writeln!(out, "bindkey '{}' {}", binding.sequence, binding.widget);
            }
            ShellDialect::Bash => {
                let _ = writeln!(out, "bind '\"{}\": {}'", binding.sequence, binding.widget);
            }
            ShellDialect::Fish => {
                let _ = writeln!(out, "bind {} {}", binding.sequence, binding.widget);
            }
        }
    }

    out.push_str(&render_plugins(&def.plugins, dialect, def.plugin_manager));
    Ok(out)
}

/// Render a plugin list into registration statements.
///
/// Each entry produces one statement in the syntax of the given plugin
/// manager; entries missing the field that manager requires are skipped
/// with a warning. Framework registration only exists for zsh, so those
/// managers skip every entry under other dialects.
#[must_use]
pub fn render_plugins(
    plugins: &[PluginRef],
    dialect: ShellDialect,
    manager: PluginManager,
) -> String {
    if dialect != ShellDialect::Zsh && manager != PluginManager::Source {
        if !plugins.is_empty() {
            warn!(
                "plugin manager {:?} requires zsh; skipping {} plugin(s) for {}",
                manager,
                plugins.len(),
                dialect.as_str()
            );
        }
        return String::new();
    }

    let mut out = String::new();
    for plugin in plugins {
        match plugin_statement(plugin, manager) {
            Some(statement) => {
                out.push_str(&statement);
                out.push('\n');
            }
            None => {
                warn!(
                    "skipping plugin '{}': missing {} for {:?} registration",
                    plugin.name,
                    match manager {
                        PluginManager::Zinit => "repository",
                        PluginManager::OhMyZsh => "name",
                        PluginManager::Source => "path",
                    },
                    manager
                );
            }
        }
    }
    out
}

fn plugin_statement(plugin: &PluginRef, manager: PluginManager) -> Option<String> {
    match manager {
        PluginManager::Zinit => {
            let repo = plugin.repo.as_deref()?;
            Some(format!("zinit light {repo}"))
        }
        PluginManager::OhMyZsh => {
            if plugin.name.is_empty() {
                return None;
            }
            Some(format!("plugins+=({})", plugin.name))
        }
        PluginManager::Source => {
            let path = plugin.path.as_deref()?;
            Some(format!("source {}", double_quote(path)))
        }
    }
}

fn write_history(out: &mut String, history: &HistoryConfig, dialect: ShellDialect) {
    match dialect {
        ShellDialect::Zsh => {
            if let Some(size) = history.size {
                let _ = writeln!(out, "HISTSIZE={size}");
            }
            if let Some(save) = history.save {
                let _ = writeln!(out, "SAVEHIST={save}");
            }
            if history.share {
                out.push_str("setopt SHARE_HISTORY\n");
            }
            if history.ignore_dups {
                out.push_str("setopt HIST_IGNORE_ALL_DUPS\n");
            }
        }
        ShellDialect::Bash => {
            if let Some(size) = history.size {
                let _ = writeln!(out, "HISTSIZE={size}");
            }
            if let Some(save) = history.save {
                let _ = writeln!(out, "HISTFILESIZE={save}");
            }
            if history.share {
                out.push_str("shopt -s histappend\n");
            }
            if history.ignore_dups {
                out.push_str("HISTCONTROL=ignoredups\n");
            }
        }
        ShellDialect::Fish => {
            // Fish manages history itself; nothing to emit.
        }
    }
}

/// Double-quote a value for shell output, escaping embedded quotes and
/// backslashes. `$` is left alone so values may reference variables.
fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Single-quote a value for shell output; embedded single quotes use the
/// `'\''` splice.
fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
