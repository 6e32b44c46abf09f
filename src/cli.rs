use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Weekday calculator for Gregorian dates from 1900 onward.
#[derive(Parser)]
#[command(
    name = "weekday",
    version,
    about = "Day-of-week lookup for Gregorian dates from 1900-01-01"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the weekday of a single date.
    Lookup(LookupArgs),
    /// Check every date in a year range against the chrono calendar.
    Verify(VerifyArgs),
}

/// Arguments for the `lookup` subcommand.
///
/// Components are taken as raw strings so that numeric-like input such as
/// `02` or `2.0e3` is interpreted by the calendar library itself.
#[derive(clap::Args)]
pub struct LookupArgs {
    /// Day of the month (1-31).
    #[arg(allow_hyphen_values = true)]
    pub day: String,

    /// Month (1-12).
    #[arg(allow_hyphen_values = true)]
    pub month: String,

    /// Year (1900 or later).
    #[arg(allow_hyphen_values = true)]
    pub year: String,
}

/// Arguments for the `verify` subcommand.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the first year to verify.
    #[arg(long)]
    pub from: Option<i32>,

    /// Override the last year to verify (inclusive).
    #[arg(long)]
    pub to: Option<i32>,
}
