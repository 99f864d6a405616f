//! Inventory types for scan results

use crate::collision::ConflictReport;
use crate::types::Package;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete result of one scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// Scanned mods directory
    pub root: PathBuf,
    /// Every package found, sorted by name
    pub packages: Vec<Package>,
    /// Total script files across all packages, duplicates included
    pub script_count: usize,
    /// Script extension the scan looked for, without the dot
    pub script_extension: String,
    /// Classified conflicts
    pub conflicts: ConflictReport,
    /// When the scan was performed
    pub scanned_at: DateTime<Utc>,
}

impl Inventory {
    /// Package names in display order
    #[must_use]
    pub fn package_names(&self) -> Vec<String> {
        self.packages.iter().map(Package::name).collect()
    }
}
