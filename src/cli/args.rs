//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use crate::config::{CheckConfig, ProjectConfig};
use crate::package_manager::PackageManagerKind;
use clap::Parser;
use std::path::PathBuf;

/// depcheck - Verify installed packages match the manifest.
#[derive(Debug, Parser)]
#[command(name = "depcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the manifest (default: search upward from cwd)
    #[arg(short = 'd', long)]
    pub package_dir: Option<PathBuf>,

    /// Scopes to check (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub scope_list: Vec<String>,

    /// Scopes exempt from --only-specified (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub optional_scope_list: Vec<String>,

    /// Report installed packages the manifest doesn't declare
    #[arg(long)]
    pub only_specified: bool,

    /// Check git URL dependencies
    #[arg(long)]
    pub check_git_urls: bool,

    /// Install missing packages and prune excessive ones
    #[arg(short, long)]
    pub install: bool,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Package manager conventions to use (npm or bower)
    #[arg(short = 'p', long, env = "DEPCHECK_PACKAGE_MANAGER")]
    pub package_manager: Option<PackageManagerKind>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Options given on the command line. Flags left off are `None`.
    pub fn options(&self) -> ProjectConfig {
        let given = |enabled: bool| enabled.then_some(true);
        let list = |scopes: &Vec<String>| (!scopes.is_empty()).then(|| scopes.clone());
        ProjectConfig {
            scope_list: list(&self.scope_list),
            optional_scope_list: list(&self.optional_scope_list),
            only_specified: given(self.only_specified),
            check_git_urls: given(self.check_git_urls),
            install: given(self.install),
            verbose: given(self.verbose),
            package_manager: self.package_manager,
        }
    }

    /// Build the check config from the command line over `project`.
    pub fn to_config_over(&self, project: Option<ProjectConfig>) -> CheckConfig {
        let options = match project {
            Some(project) => self.options().over(project),
            None => self.options(),
        };
        let mut config = CheckConfig::new().apply(options);
        if let Some(dir) = &self.package_dir {
            config = config.with_package_dir(dir);
        }
        config
    }

    /// Options given on the command line, before any project config.
    pub fn to_config(&self) -> CheckConfig {
        self.to_config_over(None)
    }
}
