//! Scan configuration
//!
//! Everything here is plain data so it can come from a JSON file, CLI flags,
//! or a test fixture. Missing fields fall back to the Vox Populi defaults.

use crate::error::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Baseline mod names shipped with the Vox Populi / Community Patch install
pub const DEFAULT_BASELINE: [&str; 10] = [
    "(1) Community Patch",
    "(2) Vox Populi",
    "(2) Community Balance Overhaul",
    "(3) City-State Diplomacy Mod for CBP",
    "(3a) VP - EUI Compatibility Files",
    "(3b) 43 Civs Community Patch",
    "(4) C4DF - CBP",
    "(4a) Squads for VP",
    "(5) More Luxuries",
    "(6a) Community Balance Overhaul - Compatibility Files (EUI)",
];

/// Settings for a single scan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ScanConfig {
    /// Ordered baseline name fragments, matched by substring
    pub baseline: Vec<String>,
    /// Script file extension without the dot
    pub script_extension: String,
    /// Manifest file extension without the dot
    pub manifest_extension: String,
    /// Pick the first manifest (sorted) instead of failing on several
    pub first_manifest_wins: bool,
    /// Minimum members for a baseline-involving group to be reported
    pub certain_threshold: usize,
    /// Minimum members for a baseline-free group to be reported
    pub potential_threshold: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE.iter().map(ToString::to_string).collect(),
            script_extension: "lua".to_string(),
            manifest_extension: "modinfo".to_string(),
            first_manifest_wins: false,
            certain_threshold: 3,
            potential_threshold: 2,
        }
    }
}

impl ScanConfig {
    /// Load a config from a JSON file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(path: &Path) -> ScanResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ScanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(path, &content)
    }

    /// Parse a config from JSON text; `path` is only used in error messages
    ///
    /// # Errors
    /// Returns an error if the text is not valid config JSON
    pub fn from_json(path: &Path, content: &str) -> ScanResult<Self> {
        let config: Self = serde_json::from_str(content).map_err(|e| ScanError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the scan meaningless
    ///
    /// # Errors
    /// Returns `InvalidConfig` describing the first bad field
    pub fn validate(&self) -> ScanResult<()> {
        if normalize_extension(&self.script_extension).is_empty() {
            return Err(ScanError::InvalidConfig(
                "script_extension must not be empty".to_string(),
            ));
        }
        if normalize_extension(&self.manifest_extension).is_empty() {
            return Err(ScanError::InvalidConfig(
                "manifest_extension must not be empty".to_string(),
            ));
        }
        if self.certain_threshold < 2 {
            return Err(ScanError::InvalidConfig(format!(
                "certain_threshold must be at least 2, got {}",
                self.certain_threshold
            )));
        }
        if self.potential_threshold < 2 {
            return Err(ScanError::InvalidConfig(format!(
                "potential_threshold must be at least 2, got {}",
                self.potential_threshold
            )));
        }
        if let Some(empty) = self.baseline.iter().position(|b| b.trim().is_empty()) {
            return Err(ScanError::InvalidConfig(format!(
                "baseline entry #{} is empty",
                empty + 1
            )));
        }
        Ok(())
    }
}

/// Strip a leading dot and lowercase, so ".LUA" and "lua" compare equal
pub(crate) fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Case-insensitive extension check
pub(crate) fn has_extension(path: &Path, normalized: &str) -> bool {
    path.extension()
        .is_some_and(|e| e.to_string_lossy().to_lowercase() == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_has_ten_baseline_names() {
        let config = ScanConfig::default();
        assert_eq!(config.baseline.len(), 10);
        assert_eq!(config.baseline[0], "(1) Community Patch");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            ScanConfig::from_json(Path::new("c.json"), r#"{"baseline": ["Core"]}"#).unwrap();
        assert_eq!(config.baseline, vec!["Core".to_string()]);
        assert_eq!(config.script_extension, "lua");
        assert_eq!(config.certain_threshold, 3);
    }

    #[test]
    fn test_malformed_json_names_file() {
        let err = ScanConfig::from_json(Path::new("bad.json"), "{ nope").unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let config = ScanConfig {
            script_extension: ".".to_string(),
            ..ScanConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ScanError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_low_threshold() {
        let config = ScanConfig {
            potential_threshold: 1,
            ..ScanConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_extension_matching_ignores_case_and_dot() {
        let ext = normalize_extension(".LUA");
        assert_eq!(ext, "lua");
        assert!(has_extension(&PathBuf::from("a/Foo.Lua"), &ext));
        assert!(!has_extension(&PathBuf::from("a/foo.luac"), &ext));
        assert!(!has_extension(&PathBuf::from("a/lua"), &ext));
    }
}
