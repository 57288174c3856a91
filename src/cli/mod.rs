//! Command-line interface for depcheck.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`runner`] - Config resolution, check execution and printing

pub mod args;
pub mod runner;

pub use args::Cli;
pub use runner::{resolve_config, run};
