//! Check command - evaluate a single current/required pair.

use anyhow::Result;
use clap::Args;

use vergate_cli::config::Severity;
use vergate_cli::report::{self, CheckReport, OutputFormat};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Currently deployed version (e.g. 1.5.7)
    #[arg(value_name = "CURRENT")]
    pub current_version: String,

    /// Required version, optionally prefixed with >, <, >=, <=, ^ or ~
    #[arg(value_name = "REQUIRED", allow_hyphen_values = true)]
    pub required_version: String,

    /// Report a failed check as a warning and exit successfully
    #[arg(short = 'w', long)]
    pub warn_only: bool,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    pub format: String,
}

pub fn execute(args: CheckArgs, verbose: bool) -> Result<i32> {
    let format = OutputFormat::parse(&args.format)?;
    let severity = if args.warn_only {
        Severity::Warning
    } else {
        Severity::Error
    };

    let reports = vec![CheckReport::evaluate(
        "version",
        &args.current_version,
        &args.required_version,
        severity,
    )];
    report::print(&reports, format, verbose)?;

    Ok(report::exit_code(&reports))
}
