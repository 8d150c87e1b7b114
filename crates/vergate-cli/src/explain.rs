//! Explain command - show how a required version is interpreted.

use anyhow::Result;
use clap::Args;
use console::style;

use vergate_semver::{Constraint, Operator};

#[derive(Args, Debug)]
pub struct ExplainArgs {
    /// Required version to explain (e.g. ^0.4.0)
    #[arg(value_name = "REQUIRED", allow_hyphen_values = true)]
    pub required_version: String,
}

fn describe(operator: Operator) -> &'static str {
    match operator {
        Operator::Exact => "exactly equal",
        Operator::GreaterThan => "greater than",
        Operator::LessThan => "lower than",
        Operator::GreaterThanOrEqual => "greater than or equal",
        Operator::LessThanOrEqual => "lower than or equal",
        Operator::Caret => "compatible (same leading nonzero component)",
        Operator::Tilde => "patch-level changes (same major and minor)",
    }
}

pub fn execute(args: ExplainArgs) -> Result<i32> {
    let constraint = match Constraint::parse(&args.required_version) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            return Ok(2);
        }
    };

    println!("{} {}", style("Constraint:").bold(), constraint);
    println!(
        "{} {} ({})",
        style("Operator:").bold(),
        if constraint.operator() == Operator::Exact { "none" } else { constraint.operator().as_str() },
        describe(constraint.operator())
    );
    println!("{} {}", style("Version:").bold(), constraint.version());

    if let Some(bound) = constraint.upper_bound() {
        println!("{} {}", style("Upper bound:").bold(), bound);
    }

    Ok(0)
}
