//! Evaluated checks and their text/JSON output.

use anyhow::{bail, Result};
use console::style;
use serde::Serialize;

use vergate_semver::{evaluate, ReasonCode, Verdict};

use crate::config::Severity;
use crate::message;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(format: &str) -> Result<Self> {
        match format {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unsupported format \"{}\", expected text or json", other),
        }
    }
}

/// One evaluated check, ready to print
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub current_version: String,
    pub required_version: String,
    pub severity: Severity,
    pub status: &'static str,
    pub reason: ReasonCode,
    pub message: String,
    #[serde(skip)]
    pub verdict: Verdict,
}

impl CheckReport {
    /// Evaluate a pair of versions and render the outcome
    pub fn evaluate(name: &str, current: &str, required: &str, severity: Severity) -> Self {
        let verdict = evaluate(current, required);
        log::debug!(
            "{}: current={:?} required={:?} -> {} ({})",
            name,
            current,
            required,
            verdict.status(),
            verdict.reason()
        );

        CheckReport {
            name: name.to_string(),
            current_version: current.to_string(),
            required_version: required.to_string(),
            severity,
            status: verdict.status(),
            reason: verdict.reason(),
            message: message::render(current, required, &verdict),
            verdict,
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict.is_success()
    }

    /// A failed check that should fail the whole run
    pub fn is_blocking(&self) -> bool {
        !self.passed() && self.severity == Severity::Error
    }
}

/// Exit code for a set of reports: 1 if any error-severity check failed
pub fn exit_code(reports: &[CheckReport]) -> i32 {
    if reports.iter().any(CheckReport::is_blocking) {
        1
    } else {
        0
    }
}

/// Print reports in the requested format
pub fn print(reports: &[CheckReport], format: OutputFormat, verbose: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(reports)?);
        }
        OutputFormat::Text => {
            for report in reports {
                print_text(report, verbose);
            }
            if reports.len() > 1 {
                print_summary(reports);
            }
        }
    }

    Ok(())
}

fn print_text(report: &CheckReport, verbose: bool) {
    if report.passed() {
        log::info!("{}", report.message);
        if verbose {
            println!("{} {}", style("ok").green().bold(), style(&report.name).cyan());
            println!("{}", indent(&report.message));
        } else {
            println!("{} {}", style("ok").green().bold(), report.name);
        }
        return;
    }

    let label = match report.severity {
        Severity::Error => style(report.severity.to_string()).red().bold(),
        Severity::Warning => style(report.severity.to_string()).yellow().bold(),
    };
    eprintln!("{} {} [{}]", label, style(&report.name).cyan(), report.reason);
    eprintln!("{}", indent(&report.message));
}

fn print_summary(reports: &[CheckReport]) {
    let failed = reports.iter().filter(|r| !r.passed()).count();
    let blocking = reports.iter().filter(|r| r.is_blocking()).count();

    println!();
    if failed == 0 {
        println!("{} {} checks passed", style("Summary:").bold(), reports.len());
    } else {
        println!(
            "{} {} checks, {} failed ({} as errors, {} as warnings)",
            style("Summary:").bold(),
            reports.len(),
            failed,
            blocking,
            failed - blocking
        );
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
