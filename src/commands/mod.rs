//! Top-level subcommand orchestration.
//!
//! Each submodule wires one CLI subcommand to the store, the resolvers,
//! and the emitters. Commands convert typed pipeline errors to
//! [`anyhow::Error`] at this boundary and never log-and-swallow them.

pub mod completion;
pub mod list;
pub mod render;
pub mod show;

use anyhow::{Context as _, Result};
use std::path::Path;

use crate::cli::GlobalOpts;
use crate::store::Store;

/// Load the resource store for a command invocation.
pub(crate) fn load_store(global: &GlobalOpts) -> Result<Store> {
    let store =
        Store::load(global.resources.as_deref()).context("loading resource documents")?;
    Ok(store)
}

/// Write rendered text to a file, or to stdout when no path is given.
pub(crate) fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("writing {}", path.display())),
        None => {
            print!("{text}");
            Ok(())
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.toml");
        write_output("rendered\n", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "rendered\n");
    }

    #[test]
    fn write_output_to_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.toml");
        assert!(write_output("x", Some(&path)).is_err());
    }

    #[test]
    fn load_store_without_resources_dir() {
        let global = GlobalOpts { resources: None };
        let store = load_store(&global).unwrap();
        assert!(store.package("core").is_ok());
    }
}
