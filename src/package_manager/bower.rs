//! Bower conventions.

use super::PackageManager;
use crate::error::Result;
use crate::shell::execute_in;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default install directory when `.bowerrc` doesn't override it.
const DEFAULT_DIRECTORY: &str = "bower_components";

/// Bower: `bower.json` manifests, `.bower.json` metadata per package.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bower;

/// The subset of `.bowerrc` the checker cares about.
#[derive(Debug, Default, Deserialize)]
struct BowerRc {
    directory: Option<String>,
}

/// Read the `directory` setting from `<package_dir>/.bowerrc`.
///
/// A missing or malformed file falls back to the default directory.
fn configured_directory(package_dir: &Path) -> Option<String> {
    let path = package_dir.join(".bowerrc");
    let content = fs::read_to_string(&path).ok()?;
    match serde_json::from_str::<BowerRc>(&content) {
        Ok(rc) => rc.directory.filter(|d| !d.trim().is_empty()),
        Err(e) => {
            tracing::debug!("Ignoring unreadable {}: {}", path.display(), e);
            None
        }
    }
}

impl PackageManager for Bower {
    fn name(&self) -> &str {
        "bower"
    }

    fn manifest_file_name(&self) -> &str {
        "bower.json"
    }

    fn metadata_file_name(&self) -> &str {
        ".bower.json"
    }

    fn installed_dir(&self, package_dir: &Path) -> PathBuf {
        let directory =
            configured_directory(package_dir).unwrap_or_else(|| DEFAULT_DIRECTORY.to_string());
        package_dir.join(directory)
    }

    fn install(&self, package_dir: &Path) -> Result<()> {
        execute_in("bower install", package_dir).map(|_| ())
    }

    fn prune(&self, package_dir: &Path) -> Result<()> {
        execute_in("bower prune", package_dir).map(|_| ())
    }
}
