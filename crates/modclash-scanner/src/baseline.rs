//! Baseline package classification

use crate::config::ScanConfig;

/// Decides whether a package belongs to the baseline set
///
/// Manifest-derived names usually carry version suffixes such as
/// `(1) Community Patch (v 89)`, so membership is a substring test.
#[derive(Debug, Clone, Default)]
pub struct BaselineClassifier {
    names: Vec<String>,
}

impl BaselineClassifier {
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ScanConfig) -> Self {
        Self::new(config.baseline.iter().cloned())
    }

    /// First baseline entry contained in `package_name`, if any
    #[must_use]
    pub fn matching(&self, package_name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|name| package_name.contains(name.as_str()))
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_baseline(&self, package_name: &str) -> bool {
        self.matching(package_name).is_some()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }
}
