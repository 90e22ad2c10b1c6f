//! The driftcheck command-line interface.
//!
//! This module is the entry point for all CLI commands and orchestrates the
//! core library functions: environment reporting, suite composition, and
//! execution.

use std::io;
use std::process;

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::catalog::Catalog;
use crate::cli::args::{Command, DriftcheckArgs};
use crate::compose::{Activation, ActivationPlan};
use crate::report::{EnvironmentReport, SystemProbe};
use crate::runner::RunnerConfig;

pub mod args;

/// The main entry point for the CLI.
///
/// Exit status: 0 on a clean run, 1 when any case failed or errored, 2 on a
/// fatal configuration error.
pub fn run() {
    let args = DriftcheckArgs::parse();

    match args.command {
        Command::Run {
            iterations,
            verbose,
        } => run_validation(iterations, verbose),
        Command::List => list_groups(),
        Command::Env => print_environment(),
    }
}

/// Handles the `run` subcommand.
fn run_validation(iterations: usize, verbose: bool) {
    let config = RunnerConfig {
        verbose,
        ..RunnerConfig::default()
    };
    let mut stdout = io::stdout();

    match crate::run_validation(iterations, &config, &mut stdout) {
        Ok(result) => {
            if !result.ok() {
                process::exit(1);
            }
        }
        Err(e) => {
            // A broken catalog or schedule, not a test failure.
            eprintln!("{:?}", miette::Report::new(e));
            process::exit(2);
        }
    }
}

/// Handles the `list` subcommand.
fn list_groups() {
    let catalog = Catalog::builtin();
    let plan = ActivationPlan::release_default();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for entry in plan.entries() {
        match entry.activation {
            Activation::Active => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                print!("active   ");
                let _ = stdout.reset();
                println!("{}", entry.name);
            }
            Activation::Disabled { reason } => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
                print!("disabled ");
                let _ = stdout.reset();
                println!("{} ({reason})", entry.name);
            }
        }
    }

    // Catalog entries outside the plan would never run; surface them.
    for name in catalog.names() {
        if !plan.entries().iter().any(|e| e.name == name) {
            println!("unlisted {name}");
        }
    }
}

/// Handles the `env` subcommand.
fn print_environment() {
    let report = EnvironmentReport::collect(&SystemProbe::detect());
    report.render(&mut io::stdout());
}
