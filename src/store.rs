//! Resource document loading.
//!
//! Loads resource documents from a directory into name-indexed maps, one
//! per kind. Documents are YAML or TOML, selected by file extension, and
//! carry a `kind` field naming the resource type. The built-in library is
//! loaded first; user documents of the same name shadow it.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::builtin;
use crate::error::StoreError;
use crate::model::{
    EmulatorDefinition, Package, Palette, PromptDefinition, ShellDefinition,
};

/// All loaded resources, indexed by name within each kind.
#[derive(Debug, Default)]
pub struct Store {
    /// Packages by name.
    pub packages: BTreeMap<String, Package>,
    /// Palettes by name.
    pub palettes: BTreeMap<String, Palette>,
    /// Prompt definitions by name.
    pub prompts: BTreeMap<String, PromptDefinition>,
    /// Emulator presets by name.
    pub emulators: BTreeMap<String, EmulatorDefinition>,
    /// Shell definitions by name.
    pub shells: BTreeMap<String, ShellDefinition>,
}

/// Minimal probe for the `kind` discriminator of a document.
#[derive(Deserialize)]
struct KindProbe {
    kind: String,
}

impl Store {
    /// The built-in library alone.
    #[must_use]
    pub fn builtin() -> Self {
        let mut store = Self::default();
        for package in builtin::packages() {
            store.packages.insert(package.name.clone(), package);
        }
        for palette in builtin::palettes() {
            store.palettes.insert(palette.name.clone(), palette);
        }
        store
    }

    /// Load the built-in library plus, if given, every resource document
    /// in `dir`.
    ///
    /// Files are processed in sorted name order; a user document shadows a
    /// built-in resource of the same name. Files whose extension is not
    /// `yaml`, `yml`, or `toml` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read or any resource
    /// document fails to parse.
    pub fn load(dir: Option<&Path>) -> Result<Self, StoreError> {
        let mut store = Self::builtin();
        if let Some(dir) = dir {
            store.load_dir(dir)?;
        }
        Ok(store)
    }

    fn load_dir(&mut self, dir: &Path) -> Result<(), StoreError> {
        let entries = std::fs::read_dir(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("yaml" | "yml" | "toml")
                )
            })
            .collect();
        paths.sort();

        for path in paths {
            self.load_document(&path)?;
        }
        Ok(())
    }

    fn load_document(&mut self, path: &Path) -> Result<(), StoreError> {
        let content = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");

        let kind = parse::<KindProbe>(&content, is_toml, path)?.kind;
        tracing::debug!("loading {kind} document from {}", path.display());

        match kind.as_str() {
            "package" => {
                let package: Package = parse(&content, is_toml, path)?;
                self.packages.insert(package.name.clone(), package);
            }
            "palette" => {
                let palette: Palette = parse(&content, is_toml, path)?;
                self.palettes.insert(palette.name.clone(), palette);
            }
            "prompt" => {
                let prompt: PromptDefinition = parse(&content, is_toml, path)?;
                self.prompts.insert(prompt.name.clone(), prompt);
            }
            "emulator" => {
                let emulator: EmulatorDefinition = parse(&content, is_toml, path)?;
                self.emulators.insert(emulator.name.clone(), emulator);
            }
            "shell" => {
                let shell: ShellDefinition = parse(&content, is_toml, path)?;
                self.shells.insert(shell.name.clone(), shell);
            }
            _ => {
                return Err(StoreError::UnknownKind {
                    path: path.to_path_buf(),
                    kind,
                });
            }
        }
        Ok(())
    }

    /// Look up a package by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such package exists.
    pub fn package(&self, name: &str) -> Result<&Package, StoreError> {
        self.packages.get(name).ok_or_else(|| StoreError::NotFound {
            kind: "package",
            name: name.to_string(),
        })
    }

    /// Look up a palette by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such palette exists.
    pub fn palette(&self, name: &str) -> Result<&Palette, StoreError> {
        self.palettes.get(name).ok_or_else(|| StoreError::NotFound {
            kind: "palette",
            name: name.to_string(),
        })
    }

    /// Look up a prompt definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such prompt exists.
    pub fn prompt(&self, name: &str) -> Result<&PromptDefinition, StoreError> {
        self.prompts.get(name).ok_or_else(|| StoreError::NotFound {
            kind: "prompt",
            name: name.to_string(),
        })
    }

    /// Look up an emulator preset by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such preset exists.
    pub fn emulator(&self, name: &str) -> Result<&EmulatorDefinition, StoreError> {
        self.emulators
            .get(name)
            .ok_or_else(|| StoreError::NotFound {
                kind: "emulator",
                name: name.to_string(),
            })
    }

    /// Look up a shell definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such definition exists.
    pub fn shell(&self, name: &str) -> Result<&ShellDefinition, StoreError> {
        self.shells.get(name).ok_or_else(|| StoreError::NotFound {
            kind: "shell",
            name: name.to_string(),
        })
    }
}

fn parse<T: serde::de::DeserializeOwned>(
    content: &str,
    is_toml: bool,
    path: &Path,
) -> Result<T, StoreError> {
    if is_toml {
        toml::from_str(content).map_err(|source| StoreError::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_yaml::from_str(content).map_err(|source| StoreError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}
