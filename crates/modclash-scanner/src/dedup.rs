//! Identity deduplication
//!
//! A package takes part in a script-name collision at most once, however
//! many same-named files it holds in different subfolders.

use crate::baseline::BaselineClassifier;
use crate::types::{Package, ScriptReference};
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::debug;

/// Script name to its retained references, one per package
///
/// First write wins: the first reference seen for a
/// `(script name, package)` pair is kept and later ones are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptIndex {
    groups: BTreeMap<String, Vec<ScriptReference>>,
}

impl ScriptIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every script of every package
    ///
    /// Packages are visited by name, then scripts by path, so the kept
    /// physical path is the smallest one for each pair.
    #[must_use]
    pub fn from_packages(packages: &[Package], classifier: &BaselineClassifier) -> Self {
        let mut index = Self::new();
        index.extend(project_references(packages, classifier));
        index
    }

    /// Add a reference, returning `false` if its package already has one
    /// under the same script name
    pub fn insert(&mut self, reference: ScriptReference) -> bool {
        let name = reference.script_name();
        match self.groups.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(vec![reference]);
                true
            }
            Entry::Occupied(mut slot) => {
                if slot.get().iter().any(|r| r.package == reference.package) {
                    debug!(
                        script = %slot.key(),
                        package = %reference.package,
                        path = %reference.path.display(),
                        "dropping duplicate script in same package"
                    );
                    false
                } else {
                    slot.get_mut().push(reference);
                    true
                }
            }
        }
    }

    /// Fold another index in, keeping the per-package rule across both
    pub fn merge(&mut self, other: ScriptIndex) {
        for reference in other.groups.into_values().flatten() {
            self.insert(reference);
        }
    }

    /// Retained references for a script name
    #[must_use]
    pub fn get(&self, script_name: &str) -> Option<&[ScriptReference]> {
        self.groups.get(script_name).map(Vec::as_slice)
    }

    /// Groups in script-name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ScriptReference])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of distinct script names
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub(crate) fn into_groups(self) -> BTreeMap<String, Vec<ScriptReference>> {
        self.groups
    }
}

impl Extend<ScriptReference> for ScriptIndex {
    fn extend<T: IntoIterator<Item = ScriptReference>>(&mut self, iter: T) {
        for reference in iter {
            self.insert(reference);
        }
    }
}

impl FromIterator<ScriptReference> for ScriptIndex {
    fn from_iter<T: IntoIterator<Item = ScriptReference>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

/// Flatten packages into references, flagged by baseline membership
#[must_use]
pub fn project_references(
    packages: &[Package],
    classifier: &BaselineClassifier,
) -> Vec<ScriptReference> {
    let mut ordered: Vec<(String, &Package)> = packages.iter().map(|p| (p.name(), p)).collect();
    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    ordered
        .into_iter()
        .flat_map(|(name, package)| {
            let baseline = classifier.is_baseline(&name);
            let mut scripts: Vec<_> = package.scripts.iter().collect();
            scripts.sort();
            scripts
                .into_iter()
                .map(move |path| ScriptReference::new(path.clone(), name.clone(), baseline))
        })
        .collect()
}
