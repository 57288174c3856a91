//! Package-manager conventions and install/prune delegates.
//!
//! Each supported package manager knows its manifest file name, the name
//! of the metadata file inside each installed package, where packages are
//! installed, and how to run its own `install` and `prune` commands. The
//! checker only talks to the [`PackageManager`] trait.

pub mod bower;
pub mod npm;

use crate::error::{DepcheckError, Result};
use crate::manifest::locate_manifest;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use bower::Bower;
pub use npm::Npm;

/// Capabilities the checker needs from a package manager.
pub trait PackageManager: Send + Sync {
    /// Command name, used in summary messages (e.g. `npm`).
    fn name(&self) -> &str;

    /// Manifest file name (e.g. `package.json`).
    fn manifest_file_name(&self) -> &str;

    /// Metadata file read from every installed package.
    fn metadata_file_name(&self) -> &str;

    /// Directory holding installed packages for `package_dir`.
    fn installed_dir(&self, package_dir: &Path) -> PathBuf;

    /// Install everything the manifest declares.
    fn install(&self, package_dir: &Path) -> Result<()>;

    /// Remove installed packages the manifest doesn't declare.
    fn prune(&self, package_dir: &Path) -> Result<()>;

    /// Find the manifest, see [`locate_manifest`].
    fn locate_manifest(
        &self,
        package_dir: Option<&Path>,
        start: &Path,
    ) -> std::result::Result<PathBuf, PathBuf> {
        locate_manifest(package_dir, start, self.manifest_file_name())
    }
}

/// Supported package-manager families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    #[default]
    Npm,
    Bower,
}

impl PackageManagerKind {
    /// Build the implementation for this family.
    pub fn create(self) -> Box<dyn PackageManager> {
        match self {
            Self::Npm => Box::new(Npm),
            Self::Bower => Box::new(Bower),
        }
    }
}

impl FromStr for PackageManagerKind {
    type Err = DepcheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "bower" => Ok(Self::Bower),
            _ => Err(DepcheckError::UnknownPackageManager {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npm => write!(f, "npm"),
            Self::Bower => write!(f, "bower"),
        }
    }
}
