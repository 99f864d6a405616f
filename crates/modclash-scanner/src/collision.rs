//! Conflict classification
//!
//! Groups of same-named scripts from distinct packages are sorted into two
//! severities. A group touching a baseline package is only reported once
//! enough other mods pile onto it; a group without baseline members is
//! reported as soon as two packages share the name.

use crate::config::ScanConfig;
use crate::dedup::ScriptIndex;
use crate::types::ScriptReference;
use serde::{Deserialize, Serialize};

/// How sure we are that a group is a real conflict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A baseline script overwritten by several mods
    Certain,
    /// Two or more non-baseline mods ship the same script
    Potential,
}

/// All retained references sharing one script name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictGroup {
    /// The colliding file name
    pub script_name: String,
    /// One reference per package
    pub members: Vec<ScriptReference>,
}

impl ConflictGroup {
    #[must_use]
    pub fn has_baseline(&self) -> bool {
        self.members.iter().any(|m| m.baseline)
    }

    /// Names of the packages involved
    #[must_use]
    pub fn packages(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.package.as_str()).collect()
    }
}

/// Thresholds applied to each group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub certain: usize,
    pub potential: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            certain: 3,
            potential: 2,
        }
    }
}

impl From<&ScanConfig> for Thresholds {
    fn from(config: &ScanConfig) -> Self {
        Self {
            certain: config.certain_threshold,
            potential: config.potential_threshold,
        }
    }
}

impl Thresholds {
    /// Severity of a group, or `None` if it is not worth reporting
    ///
    /// Baseline presence decides the category first; a baseline group below
    /// the certain threshold is dropped rather than downgraded.
    #[must_use]
    pub fn classify(&self, members: &[ScriptReference]) -> Option<Severity> {
        if members.iter().any(|m| m.baseline) {
            (members.len() >= self.certain).then_some(Severity::Certain)
        } else {
            (members.len() >= self.potential).then_some(Severity::Potential)
        }
    }
}

/// Classifies a deduplicated script index
#[derive(Debug, Clone, Default)]
pub struct ConflictClassifier {
    index: ScriptIndex,
    thresholds: Thresholds,
}

impl ConflictClassifier {
    #[must_use]
    pub fn new(index: ScriptIndex) -> Self {
        Self {
            index,
            thresholds: Thresholds::default(),
        }
    }

    /// Build from separately deduplicated baseline and non-baseline indexes
    #[must_use]
    pub fn from_partitioned(baseline: ScriptIndex, others: ScriptIndex) -> Self {
        let mut index = baseline;
        index.merge(others);
        Self::new(index)
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Groups with a baseline member and at least `certain` packages
    #[must_use]
    pub fn certain_conflicts(&self) -> Vec<ConflictGroup> {
        self.conflicts(Severity::Certain)
    }

    /// Groups without baseline members and at least `potential` packages
    #[must_use]
    pub fn potential_conflicts(&self) -> Vec<ConflictGroup> {
        self.conflicts(Severity::Potential)
    }

    /// Both severities in one pass
    #[must_use]
    pub fn report(self) -> ConflictReport {
        let thresholds = self.thresholds;
        let mut report = ConflictReport::default();
        for (script_name, members) in self.index.into_groups() {
            match thresholds.classify(&members) {
                Some(Severity::Certain) => report.certain.push(ConflictGroup {
                    script_name,
                    members,
                }),
                Some(Severity::Potential) => report.potential.push(ConflictGroup {
                    script_name,
                    members,
                }),
                None => {}
            }
        }
        report
    }

    fn conflicts(&self, severity: Severity) -> Vec<ConflictGroup> {
        self.index
            .iter()
            .filter(|(_, members)| self.thresholds.classify(members) == Some(severity))
            .map(|(name, members)| ConflictGroup {
                script_name: name.to_string(),
                members: members.to_vec(),
            })
            .collect()
    }
}

/// Classified conflicts, each list sorted by script name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// Baseline scripts overwritten by several mods
    #[serde(default)]
    pub certain: Vec<ConflictGroup>,
    /// Scripts shared by non-baseline mods
    #[serde(default)]
    pub potential: Vec<ConflictGroup>,
}

impl ConflictReport {
    /// Check if there are any conflicts
    #[must_use]
    pub fn has_conflicts(&self) -> bool {
        !self.certain.is_empty() || !self.potential.is_empty()
    }

    /// Get total number of conflict groups
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.certain.len() + self.potential.len()
    }
}
