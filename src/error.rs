//! Error types for depcheck operations.
//!
//! This module defines [`DepcheckError`], the error type for conditions that
//! abort a whole check, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Inconsistencies between the manifest and the installed tree are never
//!   errors; they are reported as findings inside a `CheckResult`
//! - A missing manifest is reported the same way (`Missing package.json!`)
//! - Only unreadable manifests, bad configuration and failed package-manager
//!   delegates surface as `DepcheckError`
//! - Use `DepcheckError::Other` (via `anyhow`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depcheck operations.
#[derive(Debug, Error)]
pub enum DepcheckError {
    /// Manifest exists but could not be parsed.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Project configuration file could not be parsed.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Requested package manager is not supported.
    #[error("Unknown package manager: {name}")]
    UnknownPackageManager { name: String },

    /// A delegated package-manager command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for depcheck operations.
pub type Result<T> = std::result::Result<T, DepcheckError>;
