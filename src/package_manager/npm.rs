//! npm conventions.

use super::PackageManager;
use crate::error::Result;
use crate::shell::execute_in;
use std::path::{Path, PathBuf};

/// npm: `package.json` manifests, packages under `node_modules`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Npm;

impl PackageManager for Npm {
    fn name(&self) -> &str {
        "npm"
    }

    fn manifest_file_name(&self) -> &str {
        "package.json"
    }

    fn metadata_file_name(&self) -> &str {
        "package.json"
    }

    fn installed_dir(&self, package_dir: &Path) -> PathBuf {
        package_dir.join("node_modules")
    }

    fn install(&self, package_dir: &Path) -> Result<()> {
        execute_in("npm install", package_dir).map(|_| ())
    }

    fn prune(&self, package_dir: &Path) -> Result<()> {
        execute_in("npm prune", package_dir).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        assert_eq!(Npm.manifest_file_name(), "package.json");
        assert_eq!(Npm.metadata_file_name(), "package.json");
    }

    #[test]
    fn installs_into_node_modules() {
        assert_eq!(
            Npm.installed_dir(Path::new("/app")),
            PathBuf::from("/app/node_modules")
        );
    }
}
