//! Runs a check from parsed arguments and prints its result.

use super::args::Cli;
use crate::check::{check, CheckResult};
use crate::config::{load_project_config, CheckConfig};
use crate::error::Result;
use console::style;
use std::path::PathBuf;

/// Build the effective config: CLI flags over `.depcheck.yml`.
pub fn resolve_config(cli: &Cli) -> Result<CheckConfig> {
    let project_dir = match &cli.package_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let project = load_project_config(&project_dir)?;
    Ok(cli.to_config_over(project))
}

/// Run the check and print it. Returns the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    let config = resolve_config(cli)?;
    tracing::debug!("Effective config: {:?}", config);

    let result = check(&config)?;
    if cli.json {
        print_json(&result)?;
    } else {
        print_result(&result);
    }
    Ok(result.status)
}

fn print_result(result: &CheckResult) {
    for line in &result.logs {
        println!("{}", style(line).dim());
    }
    for line in &result.errors {
        eprintln!("{}", style(line).red());
    }
}

fn print_json(result: &CheckResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).map_err(anyhow::Error::from)?;
    println!("{}", json);
    Ok(())
}
