//! Manifest discovery and loading.

use crate::error::{DepcheckError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::spec::VersionSpec;

/// A single declared dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Package name as declared.
    pub name: String,
    /// Classified version text.
    pub spec: VersionSpec,
}

/// A named group of dependency declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    /// Scope key, e.g. `devDependencies`.
    pub name: String,
    /// Declarations in manifest order.
    pub dependencies: Vec<Dependency>,
}

/// A loaded manifest file.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Path the manifest was read from.
    pub path: PathBuf,
    /// Scopes in manifest order.
    pub scopes: Vec<Scope>,
}

impl Manifest {
    /// Look up a scope by name.
    pub fn scope(&self, name: &str) -> Option<&Scope> {
        self.scopes.iter().find(|s| s.name == name)
    }

    /// Whether the manifest declares `name`.
    pub fn has_scope(&self, name: &str) -> bool {
        self.scope(name).is_some()
    }

    /// Directory containing the manifest.
    pub fn dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

/// Resolve where the manifest should live.
///
/// With an explicit `package_dir` only that directory is considered.
/// Otherwise walks up from `start` until a directory containing
/// `file_name` is found.
///
/// # Returns
///
/// The manifest path, or `Err(path)` with the path that was expected.
pub fn locate_manifest(
    package_dir: Option<&Path>,
    start: &Path,
    file_name: &str,
) -> std::result::Result<PathBuf, PathBuf> {
    if let Some(dir) = package_dir {
        let path = dir.join(file_name);
        return if path.is_file() { Ok(path) } else { Err(path) };
    }

    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(file_name);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            return Err(start.join(file_name));
        }
    }
}

/// Load a manifest file from disk.
///
/// # Errors
///
/// Returns `Io` if the file can't be read and `ManifestParse` if it isn't
/// a JSON object.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path)?;
    parse_manifest(&content, path)
}

/// Parse manifest JSON.
///
/// Every top-level key whose value is an object of strings is kept as a
/// scope. Non-string versions are ignored; a repeated key keeps its last
/// value.
///
/// # Arguments
///
/// * `content` - The JSON content to parse
/// * `source_path` - Path for error reporting
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| DepcheckError::ManifestParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let Value::Object(root) = value else {
        return Err(DepcheckError::ManifestParse {
            path: source_path.to_path_buf(),
            message: "manifest must be a JSON object".to_string(),
        });
    };

    let scopes = root
        .into_iter()
        .filter_map(|(name, value)| {
            let Value::Object(entries) = value else {
                return None;
            };
            let dependencies = entries
                .into_iter()
                .filter_map(|(dep, version)| {
                    Some(Dependency {
                        spec: VersionSpec::parse(version.as_str()?),
                        name: dep,
                    })
                })
                .collect();
            Some(Scope { name, dependencies })
        })
        .collect();

    Ok(Manifest {
        path: source_path.to_path_buf(),
        scopes,
    })
}
