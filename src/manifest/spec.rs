//! Classification of declared version strings.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::range::{parse_version, VersionRange};

/// The literal accepted in place of a version to mean "any installed version".
pub const LATEST: &str = "latest";

/// Protocol and host markers that identify a git dependency.
static GIT_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:git(?:\+(?:ssh|https?|file))?://|ssh://|git@[^:/\s]+:|(?:github|gitlab|bitbucket|gist):|https?://[^#\s]+\.git(?:#|$))",
    )
    .expect("GIT_URL_REGEX must compile")
});

/// `owner/repo` and `owner/repo#ref` shorthand.
static GIT_SHORTHAND_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.\-]*/[A-Za-z0-9_.\-]+(?:#\S*)?$")
        .expect("GIT_SHORTHAND_REGEX must compile")
});

/// Parsed form of a declared dependency version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSpec {
    /// An npm version range, validated only when it is evaluated.
    SemverRange(String),
    /// The `latest` sentinel.
    Latest,
    /// A version-control URL, optionally pinned to a ref after `#`.
    GitUrl { url: String, git_ref: Option<String> },
}

impl VersionSpec {
    /// Classify a raw manifest value.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_git_url(trimmed) {
            let (url, git_ref) = match trimmed.split_once('#') {
                Some((url, r)) if !r.is_empty() => (url, Some(r.to_string())),
                Some((url, _)) => (url, None),
                None => (trimmed, None),
            };
            return Self::GitUrl {
                url: url.to_string(),
                git_ref,
            };
        }
        if trimmed == LATEST {
            return Self::Latest;
        }
        Self::SemverRange(raw.to_string())
    }

    /// Whether this spec points at a git repository.
    pub fn is_git(&self) -> bool {
        matches!(self, Self::GitUrl { .. })
    }

    /// The range a git ref constrains the installed version to, if any.
    ///
    /// Returns `None` for branches, commit hashes and missing refs, which
    /// carry no comparable version.
    pub fn git_constraint(&self) -> Option<String> {
        match self {
            Self::GitUrl {
                git_ref: Some(r), ..
            } => ref_constraint(r),
            _ => None,
        }
    }
}

impl fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SemverRange(text) => write!(f, "{}", text),
            Self::Latest => write!(f, "{}", LATEST),
            Self::GitUrl {
                url,
                git_ref: Some(r),
            } => write!(f, "{}#{}", url, r),
            Self::GitUrl { url, git_ref: None } => write!(f, "{}", url),
        }
    }
}

/// Whether `text` looks like a git dependency rather than a registry range.
pub fn is_git_url(text: &str) -> bool {
    GIT_URL_REGEX.is_match(text) || GIT_SHORTHAND_REGEX.is_match(text)
}

fn ref_constraint(git_ref: &str) -> Option<String> {
    if let Some(range) = git_ref.strip_prefix("semver:") {
        let range = range.trim();
        return VersionRange::parse(range).map(|_| range.to_string());
    }
    parse_version(git_ref).map(|v| v.to_string())
}
