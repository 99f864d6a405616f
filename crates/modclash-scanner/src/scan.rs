//! Main scanner implementation

use crate::baseline::BaselineClassifier;
use crate::collision::{ConflictClassifier, ConflictReport, Thresholds};
use crate::config::{normalize_extension, ScanConfig};
use crate::dedup::ScriptIndex;
use crate::enumerate::enumerate_packages;
use crate::error::ScanResult;
use crate::inventory::Inventory;
use crate::types::Package;
use chrono::Utc;
use std::path::Path;
use tracing::info;

/// The main scanner struct
#[derive(Debug, Default)]
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    /// Create a scanner with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom configuration
    #[must_use]
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Enumerate and classify every mod under `root`
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or enumeration
    /// fails; nothing is classified in that case
    pub fn scan(&self, root: &Path) -> ScanResult<Inventory> {
        self.config.validate()?;

        let mut packages = enumerate_packages(root, &self.config)?;
        packages.sort_by_key(Package::name);
        let script_count = packages.iter().map(|p| p.scripts.len()).sum();

        let conflicts = self.classify(&packages);
        info!(
            packages = packages.len(),
            scripts = script_count,
            certain = conflicts.certain.len(),
            potential = conflicts.potential.len(),
            "scan complete"
        );

        Ok(Inventory {
            root: root.to_path_buf(),
            packages,
            script_count,
            script_extension: normalize_extension(&self.config.script_extension),
            conflicts,
            scanned_at: Utc::now(),
        })
    }

    /// Classify an already enumerated package set
    #[must_use]
    pub fn classify(&self, packages: &[Package]) -> ConflictReport {
        let classifier = BaselineClassifier::from_config(&self.config);
        let index = ScriptIndex::from_packages(packages, &classifier);
        ConflictClassifier::new(index)
            .with_thresholds(Thresholds::from(&self.config))
            .report()
    }
}
