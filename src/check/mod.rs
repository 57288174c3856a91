//! Dependency consistency checking.
//!
//! A check reads the manifest, scans the install directory, compares the
//! two and renders the differences. When asked to, it then runs the
//! package manager to fix them.
//!
//! # Modules
//!
//! - [`engine`] - Builds the ordered list of findings
//! - [`finding`] - Finding variants and their messages
//! - [`install`] - Install/prune remediation
//! - [`report`] - Message rendering and `CheckResult`
//! - [`resolver`] - Per-dependency compliance decisions
//!
//! # Example
//!
//! ```no_run
//! use depcheck::check::check;
//! use depcheck::config::CheckConfig;
//!
//! let config = CheckConfig::new()
//!     .with_package_dir("frontend")
//!     .with_only_specified(true);
//! let result = check(&config)?;
//! for message in &result.errors {
//!     eprintln!("{}", message);
//! }
//! # Ok::<(), depcheck::DepcheckError>(())
//! ```

pub mod engine;
pub mod finding;
pub mod install;
pub mod report;
pub mod resolver;

pub use engine::{ConsistencyEngine, EngineSettings};
pub use finding::Finding;
pub use install::{needs_remediation, remediate};
pub use report::{CheckResult, Reporter};
pub use resolver::{resolve, Compliance};

use crate::config::CheckConfig;
use crate::error::Result;
use crate::manifest::load_manifest;
use crate::package_manager::PackageManager;
use crate::scanner::InstalledTree;
use std::path::{Path, PathBuf};

/// Run a check with the package manager named in `config`.
///
/// # Errors
///
/// Returns an error if the manifest can't be parsed or an install/prune
/// run fails. Inconsistencies, including a missing manifest, are reported
/// in the returned `CheckResult` instead.
pub fn check(config: &CheckConfig) -> Result<CheckResult> {
    let manager = config.package_manager.create();
    check_with(config, manager.as_ref())
}

/// Run a check against an explicit package-manager implementation.
pub fn check_with(config: &CheckConfig, manager: &dyn PackageManager) -> Result<CheckResult> {
    let reporter = Reporter::new(manager.name(), config);
    let located = find_manifest(
        manager,
        config.package_dir.as_deref(),
        std::env::current_dir,
    )?;
    let manifest_path = match located {
        Ok(path) => path,
        Err(expected) => {
            tracing::debug!("No manifest at {}", expected.display());
            let findings = [Finding::ManifestMissing {
                file_name: manager.manifest_file_name().to_string(),
            }];
            return Ok(reporter.report(&findings));
        }
    };
    tracing::debug!("Using manifest {}", manifest_path.display());

    let manifest = load_manifest(&manifest_path)?;
    let package_dir = manifest.dir().to_path_buf();
    let installed_dir = manager.installed_dir(&package_dir);
    let tree = InstalledTree::scan(&installed_dir, manager.metadata_file_name());
    tracing::debug!(
        "Scanned {} installed packages in {}",
        tree.len(),
        installed_dir.display()
    );

    let settings = config.engine_settings(&manifest);
    let findings = ConsistencyEngine::new(&manifest, &tree, &settings).run();

    if config.install && needs_remediation(&findings) {
        let verdict = reporter.report_before_install(&findings);
        return remediate(manager, &package_dir, &findings, verdict);
    }
    Ok(reporter.report(&findings))
}

/// Locate the manifest, reading the working directory only for a walk-up.
fn find_manifest(
    manager: &dyn PackageManager,
    package_dir: Option<&Path>,
    current_dir: impl FnOnce() -> std::io::Result<PathBuf>,
) -> Result<std::result::Result<PathBuf, PathBuf>> {
    Ok(match package_dir {
        Some(dir) => manager.locate_manifest(Some(dir), dir),
        None => manager.locate_manifest(None, &current_dir()?),
    })
}

/// Run [`check`] on the blocking pool and await its single result.
pub async fn check_async(config: CheckConfig) -> Result<CheckResult> {
    tokio::task::spawn_blocking(move || check(&config))
        .await
        .map_err(|e| anyhow::anyhow!("check task failed: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package_manager::Npm;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn project(manifest: &str, installed: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("package.json"), manifest);
        for (name, version) in installed {
            write(
                &temp.path().join("node_modules").join(name).join("package.json"),
                &format!(r#"{{ "name": "{}", "version": "{}" }}"#, name, version),
            );
        }
        temp
    }

    #[test]
    fn satisfied_project_is_ok() {
        let temp = project(r#"{ "dependencies": { "a": "^1.0.0" } }"#, &[("a", "1.4.0")]);
        let config = CheckConfig::new().with_package_dir(temp.path());

        let result = check_with(&config, &Npm).unwrap();

        assert_eq!(result.status, 0);
        assert!(result.deps_were_ok);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn missing_manifest_short_circuits() {
        let temp = TempDir::new().unwrap();
        let config = CheckConfig::new().with_package_dir(temp.path());

        let result = check_with(&config, &Npm).unwrap();

        assert_eq!(result.errors, vec!["Missing package.json!"]);
        assert_eq!(result.status, 1);
        assert!(!result.deps_were_ok);
    }

    #[test]
    fn invalid_manifest_is_an_error() {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join("package.json"), "{ nope");
        let config = CheckConfig::new().with_package_dir(temp.path());

        assert!(check_with(&config, &Npm).is_err());
    }

    #[test]
    fn explicit_dir_never_reads_working_dir() {
        let temp = project(r#"{ "dependencies": {} }"#, &[]);

        let found = find_manifest(&Npm, Some(temp.path()), || {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "cwd removed"))
        })
        .unwrap();

        assert_eq!(found, Ok(temp.path().join("package.json")));
    }

    #[test]
    fn walk_up_needs_working_dir() {
        let result = find_manifest(&Npm, None, || {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "cwd removed"))
        });
        assert!(matches!(result, Err(crate::DepcheckError::Io(_))));
    }

    /// Records delegate calls without touching the filesystem.
    #[derive(Default)]
    struct RecordingManager {
        calls: Mutex<Vec<&'static str>>,
    }

    impl PackageManager for RecordingManager {
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
        fn install(&self, _package_dir: &Path) -> Result<()> {
            self.calls.lock().unwrap().push("install");
            Ok(())
        }
        fn prune(&self, _package_dir: &Path) -> Result<()> {
            self.calls.lock().unwrap().push("prune");
            Ok(())
        }
    }

    #[test]
    fn install_mode_reports_findings_without_summary() {
        let temp = project(
            r#"{ "dependencies": { "jquery": "<=1.11.0" } }"#,
            &[("jquery", "1.11.1")],
        );
        let config = CheckConfig::new()
            .with_package_dir(temp.path())
            .with_install(true);
        let manager = RecordingManager::default();

        let result = check_with(&config, &manager).unwrap();

        assert_eq!(
            result.errors,
            vec!["jquery: installed: 1.11.1, expected: <=1.11.0"]
        );
        assert_eq!(result.status, 0);
        assert!(!result.deps_were_ok);
        assert_eq!(*manager.calls.lock().unwrap(), vec!["install"]);
    }

    #[tokio::test]
    async fn async_check_delivers_result() {
        let temp = project(r#"{ "dependencies": { "a": "1.0.0" } }"#, &[]);
        let config = CheckConfig::new().with_package_dir(temp.path());

        let result = check_async(config).await.unwrap();

        assert_eq!(
            result.errors,
            vec!["a: not installed!", "Invoke npm install to install missing packages"]
        );
    }
}
