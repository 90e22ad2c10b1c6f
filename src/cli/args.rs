//! Defines the command-line arguments and subcommands for the driftcheck CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "driftcheck",
    version,
    about = "Release-validation harness for the driftsim simulation solvers."
)]
pub struct DriftcheckArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the environment report, then run the validation suite.
    Run {
        /// Repeat the composed group ordering this many times.
        #[arg(long, default_value_t = 1)]
        iterations: usize,
        /// Print one status line per case instead of dotted progress.
        #[arg(long)]
        verbose: bool,
    },
    /// List catalog groups with their activation state and rationale.
    List,
    /// Print the environment report without running any tests.
    Env,
}
