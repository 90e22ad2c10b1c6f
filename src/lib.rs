pub use crate::errors::HarnessError;

pub mod catalog;
pub mod cli;
pub mod compose;
pub mod errors;
pub mod groups;
pub mod report;
pub mod runner;
pub mod suite;

use std::io::Write;

use crate::catalog::Catalog;
use crate::compose::{compose, ActivationPlan, SchedulePolicy};
use crate::report::{EnvironmentReport, SystemProbe};
use crate::runner::{run_suite, RunResult, RunnerConfig};
use crate::suite::Suite;

/// Composes the release-validation suite from the builtin catalog using the
/// default schedule policy and activation plan. Built fresh per call.
pub fn validation_suite(iterations: usize) -> Result<Suite, HarnessError> {
    compose(
        &Catalog::builtin(),
        &SchedulePolicy::release_default(),
        &ActivationPlan::release_default(),
        iterations,
    )
}

/// Prints the environment report, then composes and runs the validation
/// suite.
///
/// Only configuration errors propagate; test-level faults are aggregated in
/// the returned [`RunResult`].
pub fn run_validation(
    iterations: usize,
    config: &RunnerConfig,
    out: &mut dyn Write,
) -> Result<RunResult, HarnessError> {
    EnvironmentReport::collect(&SystemProbe::detect()).render(out);
    let suite = validation_suite(iterations)?;
    Ok(run_suite(&suite, config, out))
}
