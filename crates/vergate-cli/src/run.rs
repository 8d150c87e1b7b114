//! Run command - evaluate every check in vergate.toml.

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use std::path::PathBuf;

use vergate_cli::config::{VergateConfig, CONFIG_FILE_NAME};
use vergate_cli::report::{self, CheckReport, OutputFormat};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the config file (default: vergate.toml, searched upward)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Only run checks with these names
    #[arg(long, value_name = "NAME", action = clap::ArgAction::Append)]
    pub only: Vec<String>,

    /// Output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    pub format: String,
}

pub fn execute(args: RunArgs, verbose: bool) -> Result<i32> {
    let format = OutputFormat::parse(&args.format)?;

    let (path, config) = match &args.config {
        Some(path) => (path.clone(), VergateConfig::load_file(path)?),
        None => VergateConfig::load_from_cwd()
            .context("Failed to load configuration")?
            .with_context(|| format!("No {} found in this or any parent directory", CONFIG_FILE_NAME))?,
    };
    log::debug!("Loaded {} checks from {}", config.checks.len(), path.display());

    let unknown = config.unknown_names(&args.only);
    if !unknown.is_empty() {
        bail!("No checks named {} in {}", unknown.join(", "), path.display());
    }

    let reports: Vec<CheckReport> = config
        .checks
        .iter()
        .enumerate()
        .map(|(i, check)| (check.display_name(i), check))
        .filter(|(name, _)| args.only.is_empty() || args.only.contains(name))
        .map(|(name, check)| {
            CheckReport::evaluate(
                &name,
                &check.current_version,
                &check.required_version,
                config.severity_of(check),
            )
        })
        .collect();

    if reports.is_empty() && format == OutputFormat::Text {
        println!("{} No checks defined in {}", style("Info:").cyan(), path.display());
    }

    report::print(&reports, format, verbose)?;

    Ok(report::exit_code(&reports))
}
