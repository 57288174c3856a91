//! Compliance of one declared dependency against its installed state.

use super::finding::Finding;
use crate::manifest::{satisfies, VersionSpec};
use crate::scanner::InstalledEntry;

/// Outcome of comparing one declaration with what is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compliance {
    /// Installed state satisfies the declaration.
    Satisfied,
    /// Git dependency skipped because git checking is off.
    Excluded,
    /// Not installed.
    Missing,
    /// Installed version doesn't satisfy `expected`.
    Mismatch { installed: String, expected: String },
}

impl Compliance {
    /// Convert a failing outcome into a finding for `name`.
    pub fn into_finding(self, name: &str) -> Option<Finding> {
        match self {
            Self::Satisfied | Self::Excluded => None,
            Self::Missing => Some(Finding::Missing {
                name: name.to_string(),
            }),
            Self::Mismatch {
                installed,
                expected,
            } => Some(Finding::Mismatch {
                name: name.to_string(),
                installed,
                expected,
            }),
        }
    }
}

/// Decide whether `installed` satisfies `spec`.
///
/// Git dependencies are invisible unless `check_git_urls` is set. When
/// checked, only refs that are versions (or `semver:` ranges) are compared;
/// branches and hashes only require the package to be present.
pub fn resolve(
    spec: &VersionSpec,
    installed: Option<&InstalledEntry>,
    check_git_urls: bool,
) -> Compliance {
    if spec.is_git() && !check_git_urls {
        return Compliance::Excluded;
    }

    let Some(entry) = installed else {
        return Compliance::Missing;
    };

    let expected = match spec {
        VersionSpec::Latest => return Compliance::Satisfied,
        VersionSpec::GitUrl { .. } => match spec.git_constraint() {
            Some(constraint) => constraint,
            None => return Compliance::Satisfied,
        },
        VersionSpec::SemverRange(range) => range.clone(),
    };

    if satisfies(&entry.version, &expected) {
        Compliance::Satisfied
    } else {
        Compliance::Mismatch {
            installed: entry.version.clone(),
            expected,
        }
    }
}
