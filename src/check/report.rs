//! Rendering findings into the delivered result.

use super::finding::Finding;
use crate::config::{CheckConfig, MessageSink};
use serde::Serialize;

/// Outcome of one check, delivered once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// `1` when errors were reported and not remediated, else `0`.
    pub status: i32,
    /// Whether the check found nothing, regardless of any install run.
    pub deps_were_ok: bool,
    /// Error messages in report order.
    #[serde(rename = "error")]
    pub errors: Vec<String>,
    /// Duplicate of the messages, filled only when verbose.
    #[serde(rename = "log")]
    pub logs: Vec<String>,
}

/// Turns findings into messages and a status.
pub struct Reporter {
    package_manager: String,
    verbose: bool,
    log: Option<MessageSink>,
    error: Option<MessageSink>,
}

impl Reporter {
    /// Create a reporter for `package_manager` using the sinks in `config`.
    pub fn new(package_manager: &str, config: &CheckConfig) -> Self {
        Self {
            package_manager: package_manager.to_string(),
            verbose: config.verbose,
            log: config.log.clone(),
            error: config.error.clone(),
        }
    }

    /// Render `findings`, appending at most one summary line.
    pub fn report(&self, findings: &[Finding]) -> CheckResult {
        self.render(findings, self.summary(findings))
    }

    /// Render `findings` ahead of an install run.
    ///
    /// The package manager is invoked instead of suggesting it, so no
    /// summary line is added. `status` still reflects the findings.
    pub fn report_before_install(&self, findings: &[Finding]) -> CheckResult {
        self.render(findings, None)
    }

    fn render(&self, findings: &[Finding], summary: Option<String>) -> CheckResult {
        let mut errors = Vec::new();
        let mut logs = Vec::new();

        for message in findings
            .iter()
            .map(|f| f.to_string())
            .chain(summary)
        {
            self.emit(&message, &mut logs);
            errors.push(message);
        }

        CheckResult {
            status: if errors.is_empty() { 0 } else { 1 },
            deps_were_ok: findings.is_empty(),
            errors,
            logs,
        }
    }

    /// The closing hint, chosen by the kinds of findings present.
    fn summary(&self, findings: &[Finding]) -> Option<String> {
        let pm = &self.package_manager;
        if findings.iter().any(Finding::is_excessive) {
            Some(format!(
                "Invoke {pm} prune and {pm} install to install missing packages and remove excessive ones"
            ))
        } else if findings.iter().any(Finding::is_installable) {
            Some(format!("Invoke {pm} install to install missing packages"))
        } else {
            None
        }
    }

    fn emit(&self, message: &str, logs: &mut Vec<String>) {
        if !self.verbose {
            return;
        }
        logs.push(message.to_string());
        if let Some(log) = &self.log {
            log(message);
        }
        if let Some(error) = &self.error {
            error(message);
        }
    }
}
