//! Remediation through the package manager.

use super::finding::Finding;
use super::report::CheckResult;
use crate::error::Result;
use crate::package_manager::PackageManager;
use std::path::Path;

/// Whether `findings` call for an install or prune run.
pub fn needs_remediation(findings: &[Finding]) -> bool {
    findings
        .iter()
        .any(|f| f.is_installable() || f.is_excessive())
}

/// Run the package manager to fix `findings`, then deliver `verdict`.
///
/// Prunes first when any package is excessive, then installs. On success
/// the verdict's messages and `deps_were_ok` are kept as they were and
/// only `status` becomes `0`.
///
/// # Errors
///
/// Returns the delegate's error if `prune` or `install` fails.
pub fn remediate(
    manager: &dyn PackageManager,
    package_dir: &Path,
    findings: &[Finding],
    verdict: CheckResult,
) -> Result<CheckResult> {
    if findings.iter().any(Finding::is_excessive) {
        tracing::info!("Pruning excessive packages in {}", package_dir.display());
        manager.prune(package_dir)?;
    }
    tracing::info!("Installing packages in {}", package_dir.display());
    manager.install(package_dir)?;

    Ok(CheckResult {
        status: 0,
        ..verdict
    })
}
