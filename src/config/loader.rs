//! Project configuration file loading.
//!
//! A project may keep its preferred options in `.depcheck.yml` next to its
//! manifest:
//!
//! ```yaml
//! scopeList: [dependencies]
//! onlySpecified: true
//! packageManager: bower
//! ```

use crate::error::{DepcheckError, Result};
use crate::package_manager::PackageManagerKind;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = ".depcheck.yml";

/// Options read from `.depcheck.yml`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectConfig {
    pub scope_list: Option<Vec<String>>,
    pub optional_scope_list: Option<Vec<String>>,
    pub only_specified: Option<bool>,
    pub check_git_urls: Option<bool>,
    pub install: Option<bool>,
    pub verbose: Option<bool>,
    pub package_manager: Option<PackageManagerKind>,
}

impl ProjectConfig {
    /// Layer `self` over `base`: every option set here wins.
    pub fn over(self, base: ProjectConfig) -> ProjectConfig {
        ProjectConfig {
            scope_list: self.scope_list.or(base.scope_list),
            optional_scope_list: self.optional_scope_list.or(base.optional_scope_list),
            only_specified: self.only_specified.or(base.only_specified),
            check_git_urls: self.check_git_urls.or(base.check_git_urls),
            install: self.install.or(base.install),
            verbose: self.verbose.or(base.verbose),
            package_manager: self.package_manager.or(base.package_manager),
        }
    }
}

/// Load `.depcheck.yml` from `dir`, if present.
///
/// # Errors
///
/// Returns `ConfigParse` if the file exists but isn't valid.
pub fn load_project_config(dir: &Path) -> Result<Option<ProjectConfig>> {
    let path = dir.join(PROJECT_CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(DepcheckError::Io(e)),
    };

    if content.trim().is_empty() {
        return Ok(Some(ProjectConfig::default()));
    }

    tracing::debug!("Loading project config from {}", path.display());
    serde_yaml::from_str(&content)
        .map(Some)
        .map_err(|e| DepcheckError::ConfigParse {
            path,
            message: e.to_string(),
        })
}
