//! Offline schema-compatibility checker.
//!
//! Compares two schema snapshots and exits non-zero if the new layout
//! violates the evolution rules. Meant to run in CI against checked-in
//! snapshot files, out of the runtime load path.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use node_config::compat::{check_compat_with, CompatPolicy, SchemaSnapshot};

#[derive(Parser)]
#[command(name = "schema-compat")]
#[command(about = "Check two schema snapshots for wire-compatibility violations", long_about = None)]
struct Cli {
    /// Snapshot of the released schema (JSON).
    old: PathBuf,

    /// Snapshot of the candidate schema (JSON).
    new: PathBuf,

    /// Reject required-field removal even when the major version was bumped.
    #[arg(long)]
    strict_removal: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schema_compat=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(violations) if violations.is_empty() => {
            println!("schemas are compatible");
            ExitCode::SUCCESS
        }
        Ok(violations) => {
            for v in &violations {
                println!("{v}");
            }
            eprintln!("{} compatibility violation(s)", violations.len());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<node_config::Violation>, Box<dyn std::error::Error>> {
    let old = read_snapshot(&cli.old)?;
    let new = read_snapshot(&cli.new)?;
    let policy = CompatPolicy {
        allow_removal_with_major_bump: !cli.strict_removal,
    };
    Ok(check_compat_with(&old, &new, policy))
}

fn read_snapshot(path: &PathBuf) -> Result<SchemaSnapshot, Box<dyn std::error::Error>> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let snapshot = serde_json::from_str(&contents)
        .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;
    Ok(snapshot)
}
