//! Detected inconsistencies and their messages.

use std::fmt;

/// One inconsistency between the manifest and the installed tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// No manifest at the resolved location; nothing else was checked.
    ManifestMissing { file_name: String },

    /// Declared but not installed.
    Missing { name: String },

    /// Installed version doesn't satisfy the declared one.
    Mismatch {
        name: String,
        installed: String,
        expected: String,
    },

    /// Installed but not declared in any relevant scope.
    Excessive { name: String },
}

impl Finding {
    /// Whether this is an undeclared installed package.
    pub fn is_excessive(&self) -> bool {
        matches!(self, Self::Excessive { .. })
    }

    /// Whether `install` can fix this finding.
    pub fn is_installable(&self) -> bool {
        matches!(self, Self::Missing { .. } | Self::Mismatch { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManifestMissing { file_name } => write!(f, "Missing {}!", file_name),
            Self::Missing { name } => write!(f, "{}: not installed!", name),
            Self::Mismatch {
                name,
                installed,
                expected,
            } => write!(f, "{}: installed: {}, expected: {}", name, installed, expected),
            Self::Excessive { name } => {
                write!(f, "Package {} installed, though it shouldn't be", name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message() {
        let finding = Finding::Missing { name: "c".into() };
        assert_eq!(finding.to_string(), "c: not installed!");
    }

    #[test]
    fn mismatch_message() {
        let finding = Finding::Mismatch {
            name: "a".into(),
            installed: "1.2.4".into(),
            expected: "1.2.3".into(),
        };
        assert_eq!(finding.to_string(), "a: installed: 1.2.4, expected: 1.2.3");
    }

    #[test]
    fn excessive_message() {
        let finding = Finding::Excessive { name: "c".into() };
        assert_eq!(
            finding.to_string(),
            "Package c installed, though it shouldn't be"
        );
        assert!(finding.is_excessive());
        assert!(!finding.is_installable());
    }

    #[test]
    fn manifest_missing_message() {
        let finding = Finding::ManifestMissing {
            file_name: "bower.json".into(),
        };
        assert_eq!(finding.to_string(), "Missing bower.json!");
        assert!(!finding.is_installable());
    }
}
