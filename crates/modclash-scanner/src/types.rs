//! Shared types for the modclash scanner

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// A mod directory: one manifest plus every script found beneath it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Manifest file path
    pub manifest: PathBuf,
    /// Script files, sorted by path
    pub scripts: Vec<PathBuf>,
}

impl Package {
    /// Create a package, sorting its scripts for stable output
    #[must_use]
    pub fn new(manifest: PathBuf, mut scripts: Vec<PathBuf>) -> Self {
        scripts.sort();
        Self { manifest, scripts }
    }

    /// Display name: the manifest file name without its extension
    #[must_use]
    pub fn name(&self) -> String {
        self.manifest.file_stem().map_or_else(
            || self.manifest.display().to_string(),
            |s| s.to_string_lossy().to_string(),
        )
    }
}

/// A script file attributed to the package that ships it
///
/// Identity is `(path, package)`. The baseline flag is derived from the
/// package name and takes no part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptReference {
    /// Path to the script file
    pub path: PathBuf,
    /// Owning package name
    pub package: String,
    /// Whether the owning package is a baseline package
    pub baseline: bool,
}

impl ScriptReference {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, package: impl Into<String>, baseline: bool) -> Self {
        Self {
            path: path.into(),
            package: package.into(),
            baseline,
        }
    }

    /// Final path component, the key scripts collide on
    #[must_use]
    pub fn script_name(&self) -> String {
        script_name(&self.path)
    }
}

impl PartialEq for ScriptReference {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.package == other.package
    }
}

impl Eq for ScriptReference {}

impl Hash for ScriptReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.package.hash(state);
    }
}

pub(crate) fn script_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |n| n.to_string_lossy().to_string(),
    )
}
