//! Check configuration.
//!
//! [`CheckConfig`] carries every option a check understands, with the
//! defaults applied in one place. Programmatic callers build it with the
//! `with_*` methods; the CLI layers a project's `.depcheck.yml` (see
//! [`loader`]) under its own flags.
//!
//! # Defaults
//!
//! | Option | Default |
//! |---|---|
//! | `package_dir` | walk up from the working directory |
//! | `scope_list` | `dependencies`, `devDependencies` (those present) |
//! | `optional_scope_list` | `optionalDependencies`, `peerDependencies` |
//! | `only_specified`, `check_git_urls`, `install`, `verbose` | `false` |
//! | `package_manager` | `npm` |

pub mod loader;

use crate::check::engine::EngineSettings;
use crate::manifest::Manifest;
use crate::package_manager::PackageManagerKind;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub use loader::{load_project_config, ProjectConfig, PROJECT_CONFIG_FILE};

/// Scopes checked when `scope_list` isn't given.
pub const DEFAULT_SCOPES: &[&str] = &["dependencies", "devDependencies"];

/// Scopes exempt from excessive-package detection by default.
pub const DEFAULT_OPTIONAL_SCOPES: &[&str] = &["optionalDependencies", "peerDependencies"];

/// Receives each message as it is produced.
pub type MessageSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Options for one check.
#[derive(Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckConfig {
    /// Directory holding the manifest.
    pub package_dir: Option<PathBuf>,

    /// Scopes checked for missing and mismatched packages.
    pub scope_list: Option<Vec<String>>,

    /// Extra scopes whose packages aren't excessive.
    pub optional_scope_list: Vec<String>,

    /// Report installed packages no relevant scope declares.
    pub only_specified: bool,

    /// Check git dependencies instead of ignoring them.
    pub check_git_urls: bool,

    /// Run the package manager when findings exist.
    pub install: bool,

    /// Populate the log stream and invoke the sinks.
    pub verbose: bool,

    /// Which package-manager conventions to use.
    pub package_manager: PackageManagerKind,

    /// Sink for log messages.
    #[serde(skip)]
    pub log: Option<MessageSink>,

    /// Sink for error messages.
    #[serde(skip)]
    pub error: Option<MessageSink>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            package_dir: None,
            scope_list: None,
            optional_scope_list: DEFAULT_OPTIONAL_SCOPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            only_specified: false,
            check_git_urls: false,
            install: false,
            verbose: false,
            package_manager: PackageManagerKind::default(),
            log: None,
            error: None,
        }
    }
}

impl fmt::Debug for CheckConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckConfig")
            .field("package_dir", &self.package_dir)
            .field("scope_list", &self.scope_list)
            .field("optional_scope_list", &self.optional_scope_list)
            .field("only_specified", &self.only_specified)
            .field("check_git_urls", &self.check_git_urls)
            .field("install", &self.install)
            .field("verbose", &self.verbose)
            .field("package_manager", &self.package_manager)
            .field("log", &self.log.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}

impl CheckConfig {
    /// Create a config with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the manifest directory.
    pub fn with_package_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.package_dir = Some(dir.into());
        self
    }

    /// Set the scopes to check.
    pub fn with_scope_list<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope_list = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Set the scopes exempt from excessive-package detection.
    pub fn with_optional_scope_list<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_scope_list = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable excessive-package detection.
    pub fn with_only_specified(mut self, enabled: bool) -> Self {
        self.only_specified = enabled;
        self
    }

    /// Enable or disable git dependency checking.
    pub fn with_check_git_urls(mut self, enabled: bool) -> Self {
        self.check_git_urls = enabled;
        self
    }

    /// Enable or disable install/prune on findings.
    pub fn with_install(mut self, enabled: bool) -> Self {
        self.install = enabled;
        self
    }

    /// Enable or disable the log stream.
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    /// Choose the package manager.
    pub fn with_package_manager(mut self, kind: PackageManagerKind) -> Self {
        self.package_manager = kind;
        self
    }

    /// Set the log sink.
    pub fn with_log(mut self, sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.log = Some(Arc::new(sink));
        self
    }

    /// Set the error sink.
    pub fn with_error(mut self, sink: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.error = Some(Arc::new(sink));
        self
    }

    /// Scopes to check against `manifest`.
    ///
    /// An explicit list is used as given; otherwise the default scopes the
    /// manifest declares, in default order.
    pub fn resolved_scopes(&self, manifest: &Manifest) -> Vec<String> {
        match &self.scope_list {
            Some(scopes) => scopes.clone(),
            None => DEFAULT_SCOPES
                .iter()
                .filter(|s| manifest.has_scope(s))
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Engine settings for `manifest`.
    pub fn engine_settings(&self, manifest: &Manifest) -> EngineSettings {
        EngineSettings {
            scopes: self.resolved_scopes(manifest),
            optional_scopes: self.optional_scope_list.clone(),
            only_specified: self.only_specified,
            check_git_urls: self.check_git_urls,
        }
    }

    /// Apply every option `options` sets, leaving the rest as they are.
    pub fn apply(mut self, options: ProjectConfig) -> Self {
        if let Some(scopes) = options.scope_list {
            self.scope_list = Some(scopes);
        }
        if let Some(optional) = options.optional_scope_list {
            self.optional_scope_list = optional;
        }
        if let Some(enabled) = options.only_specified {
            self.only_specified = enabled;
        }
        if let Some(enabled) = options.check_git_urls {
            self.check_git_urls = enabled;
        }
        if let Some(enabled) = options.install {
            self.install = enabled;
        }
        if let Some(enabled) = options.verbose {
            self.verbose = enabled;
        }
        if let Some(kind) = options.package_manager {
            self.package_manager = kind;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parse_manifest;
    use std::path::Path;

    fn manifest(json: &str) -> Manifest {
        parse_manifest(json, Path::new("package.json")).unwrap()
    }

    #[test]
    fn defaults() {
        let config = CheckConfig::default();
        assert!(config.package_dir.is_none());
        assert!(config.scope_list.is_none());
        assert_eq!(
            config.optional_scope_list,
            vec!["optionalDependencies", "peerDependencies"]
        );
        assert!(!config.only_specified);
        assert!(!config.check_git_urls);
        assert!(!config.install);
        assert!(!config.verbose);
        assert_eq!(config.package_manager, PackageManagerKind::Npm);
    }

    #[test]
    fn default_scopes_follow_manifest() {
        let m = manifest(r#"{ "devDependencies": {}, "dependencies": {} }"#);
        assert_eq!(
            CheckConfig::default().resolved_scopes(&m),
            vec!["dependencies", "devDependencies"]
        );

        let m = manifest(r#"{ "dependencies": {} }"#);
        assert_eq!(CheckConfig::default().resolved_scopes(&m), vec!["dependencies"]);
    }

    #[test]
    fn explicit_scopes_are_kept_verbatim() {
        let m = manifest(r#"{ "dependencies": {} }"#);
        let config = CheckConfig::new().with_scope_list(["devDependencies", "dependencies"]);
        assert_eq!(
            config.resolved_scopes(&m),
            vec!["devDependencies", "dependencies"]
        );
    }

    #[test]
    fn deserializes_camel_case() {
        let config: CheckConfig = serde_json::from_str(
            r#"{ "packageDir": "app", "onlySpecified": true, "packageManager": "bower" }"#,
        )
        .unwrap();
        assert_eq!(config.package_dir, Some(PathBuf::from("app")));
        assert!(config.only_specified);
        assert_eq!(config.package_manager, PackageManagerKind::Bower);
        assert_eq!(config.optional_scope_list.len(), 2);
    }

    #[test]
    fn builder_sets_sinks() {
        let config = CheckConfig::new().with_log(|_| {}).with_error(|_| {});
        assert!(config.log.is_some());
        assert!(config.error.is_some());
        assert!(format!("{:?}", config).contains("log: true"));
    }

    #[test]
    fn apply_sets_given_options() {
        let options = ProjectConfig {
            scope_list: Some(vec!["dependencies".into()]),
            only_specified: Some(true),
            package_manager: Some(PackageManagerKind::Bower),
            ..Default::default()
        };
        let config = CheckConfig::new().with_install(true).apply(options);
        assert_eq!(config.scope_list, Some(vec!["dependencies".to_string()]));
        assert!(config.only_specified);
        assert!(config.install);
        assert_eq!(config.package_manager, PackageManagerKind::Bower);
        assert_eq!(config.optional_scope_list.len(), 2);
    }
}
