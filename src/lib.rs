//! depcheck - Verify installed packages against a manifest.
//!
//! depcheck compares the packages physically present in a project's
//! install directory (`node_modules`, `bower_components`) with the versions
//! its manifest declares, reports what is missing, mismatched or
//! excessive, and can run the package manager to fix it.
//!
//! # Modules
//!
//! - [`check`] - Consistency engine, reporting and remediation
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Check options and project config loading
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest loading and version-spec parsing
//! - [`package_manager`] - npm and Bower conventions and delegates
//! - [`scanner`] - Installed-tree scanning
//! - [`shell`] - Shell command execution
//!
//! # Example
//!
//! ```
//! use depcheck::manifest::{satisfies, VersionSpec};
//!
//! assert_eq!(VersionSpec::parse("latest"), VersionSpec::Latest);
//! assert!(VersionSpec::parse("user/repo#v1.2.0").is_git());
//! assert!(satisfies("1.4.2", "^1.2.0 || ^2.0.0"));
//! assert!(!satisfies("1.2.4", "1.2.3"));
//! ```
//!
//! For filesystem-backed checks, see the integration tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod package_manager;
pub mod scanner;
pub mod shell;

pub use check::{check, check_async, check_with, CheckResult, Finding};
pub use config::CheckConfig;
pub use error::{DepcheckError, Result};
