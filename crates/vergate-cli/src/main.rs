mod check;
mod explain;
mod run;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "vergate")]
#[command(about = "Validate deployed versions against required version constraints")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Show messages for passing checks and enable debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a current version against a required version
    Check(check::CheckArgs),

    /// Run every check defined in vergate.toml
    Run(run::RunArgs),

    /// Show how a required version is interpreted
    Explain(explain::ExplainArgs),
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logger(args.verbose);

    match args.command {
        Commands::Check(check_args) => check::execute(check_args, args.verbose),
        Commands::Run(run_args) => run::execute(run_args, args.verbose),
        Commands::Explain(explain_args) => explain::execute(explain_args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(2)
        }
    }
}
