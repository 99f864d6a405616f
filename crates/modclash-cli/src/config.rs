//! Config resolution: defaults, then a JSON file, then command-line flags

use modclash_scanner::ScanConfig;
use std::path::PathBuf;
use tracing::debug;

/// Values taken from the command line
#[derive(Debug, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub baseline: Vec<String>,
    pub script_ext: Option<String>,
    pub manifest_ext: Option<String>,
    pub first_manifest_wins: bool,
}

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("modclash").join("config.json"))
}

/// Build the effective scan configuration
///
/// An explicit `--config` must exist; the default location is only read
/// when a file is actually there.
pub fn resolve(overrides: &Overrides) -> anyhow::Result<ScanConfig> {
    let file = match &overrides.config_file {
        Some(path) => Some(path.clone()),
        None => default_config_path().filter(|path| path.is_file()),
    };

    let mut config = match file {
        Some(path) => {
            debug!(path = %path.display(), "loading config file");
            ScanConfig::load(&path)?
        }
        None => ScanConfig::default(),
    };

    if !overrides.baseline.is_empty() {
        config.baseline.clone_from(&overrides.baseline);
    }
    if let Some(ext) = &overrides.script_ext {
        config.script_extension.clone_from(ext);
    }
    if let Some(ext) = &overrides.manifest_ext {
        config.manifest_extension.clone_from(ext);
    }
    if overrides.first_manifest_wins {
        config.first_manifest_wins = true;
    }

    config.validate()?;
    Ok(config)
}
