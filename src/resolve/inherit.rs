//! Package inheritance resolution.
//!
//! Walks the single-parent `extends` chain of a package and produces the
//! merged component lists, plus a provenance lookup answering "which
//! package in the chain declared this component".

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::ResolveError;
use crate::model::{ComponentKind, Package};

/// The merged, de-duplicated component lists of a resolved package.
///
/// Invariants: no list contains a repeated name, and insertion order is
/// ancestor-before-descendant, so a component declared by the ultimate
/// ancestor appears before components first introduced further down the
/// chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedComponentSet {
    /// Merged plugin names.
    pub plugins: Vec<String>,
    /// Merged prompt names.
    pub prompts: Vec<String>,
    /// Merged profile names.
    pub profiles: Vec<String>,
}

impl ResolvedComponentSet {
    /// Total number of components across all three lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len() + self.prompts.len() + self.profiles.len()
    }

    /// Whether the set contains no components at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Resolve a package against a name-indexed lookup of all known packages.
///
/// The `extends` chain is walked leaf to root with a transient
/// "currently visiting" set; components are then merged root-first, so
/// ancestor entries precede descendant entries. A name already present in
/// a list is not appended again (first seen wins).
///
/// The inputs are never mutated and the output is freshly allocated, so
/// resolving the same package twice yields identical results.
///
/// # Errors
///
/// Returns [`ResolveError::InheritanceCycle`] if the chain revisits a
/// package, and [`ResolveError::ParentNotFound`] if an `extends` target is
/// absent from `lookup`.
pub fn resolve(
    pkg: &Package,
    lookup: &BTreeMap<String, Package>,
) -> Result<ResolvedComponentSet, ResolveError> {
    let chain = ancestor_chain(pkg, lookup)?;

    let mut set = ResolvedComponentSet::default();
    for ancestor in chain.iter().rev() {
        append_unique(&mut set.plugins, &ancestor.plugins);
        append_unique(&mut set.prompts, &ancestor.prompts);
        append_unique(&mut set.profiles, &ancestor.profiles);
    }
    Ok(set)
}

/// Name of the package in the chain that declares `component` for `kind`.
///
/// Checks the most specific (leaf) package first, then walks up through
/// `extends`. Returns `None` when no package in the chain declares the
/// component, or when the chain itself is broken (a cycle or a missing
/// parent stops the walk).
#[must_use]
pub fn source_of(
    component: &str,
    pkg: &Package,
    lookup: &BTreeMap<String, Package>,
    kind: ComponentKind,
) -> Option<String> {
    let mut visiting: BTreeSet<&str> = BTreeSet::new();
    let mut current = pkg;
    loop {
        if !visiting.insert(&current.name) {
            return None;
        }
        if kind.list(current).iter().any(|c| c == component) {
            return Some(current.name.clone());
        }
        current = lookup.get(current.extends.as_deref()?)?;
    }
}

/// The `extends` chain from `pkg` (first) up to the ultimate ancestor
/// (last), with cycle and missing-parent detection.
fn ancestor_chain<'a>(
    pkg: &'a Package,
    lookup: &'a BTreeMap<String, Package>,
) -> Result<Vec<&'a Package>, ResolveError> {
    let mut visiting: BTreeSet<&str> = BTreeSet::new();
    let mut chain = Vec::new();
    let mut current = pkg;
    loop {
        if !visiting.insert(&current.name) {
            return Err(ResolveError::InheritanceCycle {
                package: current.name.clone(),
            });
        }
        chain.push(current);
        let Some(parent) = current.extends.as_deref() else {
            return Ok(chain);
        };
        current = lookup
            .get(parent)
            .ok_or_else(|| ResolveError::ParentNotFound {
                package: current.name.clone(),
                parent: parent.to_string(),
            })?;
    }
}

fn append_unique(list: &mut Vec<String>, additions: &[String]) {
    for name in additions {
        if !list.iter().any(|existing| existing == name) {
            list.push(name.clone());
        }
    }
}
