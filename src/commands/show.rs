//! The `show` command: resolved package listing with provenance.

use anyhow::Result;
use serde::Serialize;

use crate::cli::{GlobalOpts, ShowOpts};
use crate::model::{ComponentKind, Package};
use crate::resolve::{self, ResolvedComponentSet};
use crate::store::Store;

/// Machine-readable `show` output.
#[derive(Debug, Serialize)]
struct ShowOutput<'a> {
    package: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    extends: Option<&'a str>,
    components: &'a ResolvedComponentSet,
}

/// Run the show command.
///
/// Prints what installing the package would bring in: the merged plugin,
/// prompt, and profile lists, each component annotated with the package
/// in the inheritance chain that declared it.
///
/// # Errors
///
/// Returns an error if the package cannot be found or its inheritance
/// chain fails to resolve.
pub fn run(global: &GlobalOpts, opts: &ShowOpts) -> Result<()> {
    let store = super::load_store(global)?;
    let pkg = store.package(&opts.name)?;
    let set = resolve::resolve(pkg, &store.packages)?;

    if opts.json {
        let output = ShowOutput {
            package: &pkg.name,
            extends: pkg.extends.as_deref(),
            components: &set,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", listing(pkg, &set, &store));
    Ok(())
}

/// The human-readable listing, built in memory for testability.
fn listing(pkg: &Package, set: &ResolvedComponentSet, store: &Store) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "package: {}", pkg.name);
    if let Some(desc) = &pkg.description {
        let _ = writeln!(out, "  {desc}");
    }
    if let Some(parent) = &pkg.extends {
        let _ = writeln!(out, "extends: {parent}");
    }

    for (kind, names) in [
        (ComponentKind::Plugin, &set.plugins),
        (ComponentKind::Prompt, &set.prompts),
        (ComponentKind::Profile, &set.profiles),
    ] {
        if names.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}s:", kind.label());
        for name in names {
            match resolve::source_of(name, pkg, &store.packages, kind) {
                Some(origin) if origin != pkg.name => {
                    let _ = writeln!(out, "  {name} (from {origin})");
                }
                _ => {
                    let _ = writeln!(out, "  {name}");
                }
            }
        }
    }
    out
}
