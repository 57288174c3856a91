//! Manifest parsing and version-spec classification.
//!
//! # Modules
//!
//! - [`loader`] - Manifest discovery and JSON loading
//! - [`range`] - npm-style range evaluation
//! - [`spec`] - Classification of declared version strings

pub mod loader;
pub mod range;
pub mod spec;

pub use loader::{load_manifest, locate_manifest, parse_manifest, Dependency, Manifest, Scope};
pub use range::{parse_version, satisfies, VersionRange};
pub use spec::{is_git_url, VersionSpec, LATEST};
