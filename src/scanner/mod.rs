//! Installed-tree scanning.
//!
//! Lists the packages installed directly under a package manager's install
//! directory and reads each one's metadata file for its version. Entries
//! without readable metadata are skipped: they count as not installed.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledEntry {
    /// Name the package is installed under (its directory name).
    pub name: String,
    /// Version recorded in its metadata file.
    pub version: String,
    /// Package directory.
    pub source_path: PathBuf,
}

/// Metadata fields read from each installed package.
#[derive(Debug, Deserialize)]
struct PackageMetadata {
    version: Option<String>,
}

/// Snapshot of an install directory.
#[derive(Debug, Clone, Default)]
pub struct InstalledTree {
    entries: Vec<InstalledEntry>,
    index: HashMap<String, usize>,
}

impl InstalledTree {
    /// Build a tree from already-read entries, keeping their order.
    pub fn from_entries(entries: Vec<InstalledEntry>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self { entries, index }
    }

    /// Scan `dir`, reading `metadata_file_name` inside every package.
    ///
    /// A missing install directory yields an empty tree. Entries are sorted
    /// by name, and `@scope` directories are expanded one level.
    pub fn scan(dir: &Path, metadata_file_name: &str) -> Self {
        let mut entries = Vec::new();
        for (name, path) in list_packages(dir) {
            match read_metadata(&path.join(metadata_file_name)) {
                Some(version) => {
                    tracing::debug!("Found {}@{} at {}", name, version, path.display());
                    entries.push(InstalledEntry {
                        name,
                        version,
                        source_path: path,
                    });
                }
                None => tracing::debug!("Skipping {}: no readable {}", name, metadata_file_name),
            }
        }
        Self::from_entries(entries)
    }

    /// Look up an installed package by name.
    pub fn get(&self, name: &str) -> Option<&InstalledEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Installed packages in listing order.
    pub fn entries(&self) -> &[InstalledEntry] {
        &self.entries
    }

    /// Number of installed packages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Direct child package directories of `dir`, sorted by name.
fn list_packages(dir: &Path) -> Vec<(String, PathBuf)> {
    let mut packages = Vec::new();
    for (name, path) in child_dirs(dir) {
        if name.starts_with('@') {
            for (child, child_path) in child_dirs(&path) {
                packages.push((format!("{}/{}", name, child), child_path));
            }
        } else {
            packages.push((name, path));
        }
    }
    packages.sort_by(|a, b| a.0.cmp(&b.0));
    packages
}

fn child_dirs(dir: &Path) -> Vec<(String, PathBuf)> {
    let Ok(read_dir) = fs::read_dir(dir) else {
        return Vec::new();
    };
    read_dir
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if name.starts_with('.') {
                return None;
            }
            Some((name, entry.path()))
        })
        .collect()
}

fn read_metadata(metadata_path: &Path) -> Option<String> {
    let content = fs::read_to_string(metadata_path).ok()?;
    let metadata: PackageMetadata = serde_json::from_str(&content).ok()?;
    metadata.version
}
