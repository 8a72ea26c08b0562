//! The `list` command: available resources by kind.

use anyhow::Result;
use std::collections::BTreeMap;

use crate::cli::{GlobalOpts, ListOpts, ResourceKindArg};
use crate::store::Store;

/// Run the list command.
///
/// # Errors
///
/// Returns an error if the resource directory cannot be loaded.
pub fn run(global: &GlobalOpts, opts: &ListOpts) -> Result<()> {
    let store = super::load_store(global)?;
    let sections = sections(&store, opts.kind);

    if opts.json {
        let map: BTreeMap<&str, &[String]> = sections
            .iter()
            .map(|(kind, names)| (*kind, names.as_slice()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    for (kind, names) in &sections {
        println!("{kind}:");
        for name in names {
            println!("  {name}");
        }
    }
    Ok(())
}

/// Resource names per kind, optionally restricted to a single kind.
fn sections(store: &Store, kind: Option<ResourceKindArg>) -> Vec<(&'static str, Vec<String>)> {
    let all: [(&'static str, ResourceKindArg, Vec<String>); 5] = [
        (
            "packages",
            ResourceKindArg::Packages,
            store.packages.keys().cloned().collect(),
        ),
        (
            "palettes",
            ResourceKindArg::Palettes,
            store.palettes.keys().cloned().collect(),
        ),
        (
            "prompts",
            ResourceKindArg::Prompts,
            store.prompts.keys().cloned().collect(),
        ),
        (
            "emulators",
            ResourceKindArg::Emulators,
            store.emulators.keys().cloned().collect(),
        ),
        (
            "shells",
            ResourceKindArg::Shells,
            store.shells.keys().cloned().collect(),
        ),
    ];

    all.into_iter()
        .filter(|(_, arg, _)| kind.is_none_or(|k| k == *arg))
        .map(|(label, _, names)| (label, names))
        .collect()
}
