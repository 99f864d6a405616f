//! Package enumeration
//!
//! Every immediate subdirectory of the scan root is one mod. Its manifest
//! must sit directly inside it; scripts are collected recursively.

use crate::config::{has_extension, normalize_extension, ScanConfig};
use crate::error::{ScanError, ScanResult};
use crate::types::Package;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Enumerate all packages under `root`
///
/// Subdirectories are walked in parallel. Results keep sorted directory
/// order, so when several directories fail the first one is reported.
///
/// # Errors
/// Returns `NotADirectory` if `root` is not a directory, or a manifest
/// error naming the first subdirectory without exactly one manifest.
pub fn enumerate_packages(root: &Path, config: &ScanConfig) -> ScanResult<Vec<Package>> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let dirs = package_dirs(root)?;
    debug!(root = %root.display(), count = dirs.len(), "found mod directories");

    let results: Vec<ScanResult<Package>> = dirs
        .par_iter()
        .map(|dir| scan_package(dir, config))
        .collect();

    results.into_iter().collect()
}

/// Immediate subdirectories of `root`, sorted
fn package_dirs(root: &Path) -> ScanResult<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| ScanError::io(root, e))? {
        let path = entry.map_err(|e| ScanError::io(root, e))?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

/// Build the package for a single mod directory
///
/// # Errors
/// Returns an error if the manifest is missing or ambiguous, or the walk fails
pub fn scan_package(dir: &Path, config: &ScanConfig) -> ScanResult<Package> {
    let manifest = find_manifest(dir, config)?;
    let scripts = collect_scripts(dir, &normalize_extension(&config.script_extension))?;
    let package = Package::new(manifest, scripts);
    debug!(
        package = %package.name(),
        scripts = package.scripts.len(),
        "enumerated package"
    );
    Ok(package)
}

fn find_manifest(dir: &Path, config: &ScanConfig) -> ScanResult<PathBuf> {
    let extension = normalize_extension(&config.manifest_extension);

    let mut manifests = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))? {
        let path = entry.map_err(|e| ScanError::io(dir, e))?.path();
        if path.is_file() && has_extension(&path, &extension) {
            manifests.push(path);
        }
    }
    manifests.sort();

    match manifests.len() {
        0 => Err(ScanError::MissingManifest {
            dir: dir.to_path_buf(),
            extension,
        }),
        1 => Ok(manifests.remove(0)),
        n if config.first_manifest_wins => {
            let chosen = manifests.remove(0);
            warn!(
                dir = %dir.display(),
                manifests = n,
                chosen = %chosen.display(),
                "multiple manifests, using the first"
            );
            Ok(chosen)
        }
        _ => Err(ScanError::MultipleManifests {
            dir: dir.to_path_buf(),
            manifests,
        }),
    }
}

fn collect_scripts(dir: &Path, extension: &str) -> ScanResult<Vec<PathBuf>> {
    let mut scripts = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            scripts.push(entry.into_path());
        }
    }
    Ok(scripts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_not_a_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        write(&file);

        let err = enumerate_packages(&file, &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::NotADirectory { .. }));
        assert!(err.to_string().contains("file.txt"));
    }

    #[test]
    fn test_scripts_collected_recursively_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("modA");
        write(&dir.join("modA (v 1).modinfo"));
        write(&dir.join("UI/InGame/Top.LUA"));
        write(&dir.join("Lua/deep/nested/helper.lua"));
        write(&dir.join("Lua/readme.txt"));

        let packages = enumerate_packages(temp.path(), &ScanConfig::default()).unwrap();
        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name(), "modA (v 1)");
        assert_eq!(packages[0].scripts.len(), 2);
    }

    #[test]
    fn test_manifest_must_be_top_level() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");
        write(&dir.join("inner/nested.modinfo"));

        let err = enumerate_packages(temp.path(), &ScanConfig::default()).unwrap_err();
        match err {
            ScanError::MissingManifest { dir: reported, .. } => assert_eq!(reported, dir),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_multiple_manifests() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("twice");
        write(&dir.join("b.modinfo"));
        write(&dir.join("a.MODINFO"));

        let err = enumerate_packages(temp.path(), &ScanConfig::default()).unwrap_err();
        assert!(matches!(err, ScanError::MultipleManifests { ref manifests, .. } if manifests.len() == 2));

        let config = ScanConfig {
            first_manifest_wins: true,
            ..ScanConfig::default()
        };
        let packages = enumerate_packages(temp.path(), &config).unwrap();
        assert_eq!(packages[0].name(), "a");
    }

    #[test]
    fn test_empty_package_is_kept_and_files_at_root_ignored() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("empty/empty.modinfo"));
        write(&temp.path().join("stray.lua"));

        let packages = enumerate_packages(temp.path(), &ScanConfig::default()).unwrap();
        assert_eq!(packages.len(), 1);
        assert!(packages[0].scripts.is_empty());
    }

    #[test]
    fn test_packages_sorted_by_directory() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("b/zeta.modinfo"));
        write(&temp.path().join("a/alpha.modinfo"));

        let packages = enumerate_packages(temp.path(), &ScanConfig::default()).unwrap();
        let names: Vec<_> = packages.iter().map(Package::name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
