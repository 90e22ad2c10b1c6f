//! Textual execution of a composed suite.
//!
//! The runner walks every case in every group strictly in order, records a
//! status per case, and writes a plain-text report: dotted progress (or
//! per-case lines in verbose mode), detail blocks for each failure and
//! error, and a final tally. A failing case never halts the run; panics are
//! captured and recorded as errors.

use std::any::Any;
use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

use difference::{Changeset, Difference};

use crate::suite::{CaseFault, Suite, TestCase};

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

/// Configuration for execution reporting.
pub struct RunnerConfig {
    pub use_colors: bool,
    /// One status line per case instead of dotted progress.
    pub verbose: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            use_colors: atty::is(atty::Stream::Stdout),
            verbose: false,
        }
    }
}

impl RunnerConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Final status of one executed case.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseStatus {
    Passed,
    /// A checked expectation did not hold.
    Failed {
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// An unexpected fault, including a panic inside the case body.
    Errored { message: String },
}

/// One executed case with its status.
#[derive(Debug, Clone)]
pub struct CaseRecord {
    pub group: String,
    pub case: String,
    pub status: CaseStatus,
}

/// Aggregate outcome of one suite execution. Produced once per invocation;
/// the counts are derived from the records, never stored separately.
#[derive(Debug)]
pub struct RunResult {
    pub records: Vec<CaseRecord>,
    pub elapsed: Duration,
}

impl RunResult {
    pub fn cases_run(&self) -> usize {
        self.records.len()
    }

    pub fn failures(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.status, CaseStatus::Failed { .. }))
            .count()
    }

    pub fn errors(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.status, CaseStatus::Errored { .. }))
            .count()
    }

    pub fn ok(&self) -> bool {
        self.failures() == 0 && self.errors() == 0
    }
}

// =============================================================================
// EXECUTION
// =============================================================================

/// Runs every case in every group of the suite, in order, writing the
/// textual report to `out`.
pub fn run_suite(suite: &Suite, config: &RunnerConfig, out: &mut dyn Write) -> RunResult {
    let started = Instant::now();
    let mut records = Vec::with_capacity(suite.case_count());

    for group in suite.groups() {
        for case in group.cases() {
            let status = execute_case(case);
            emit_progress(group.name(), case.name(), &status, config, out);
            records.push(CaseRecord {
                group: group.name().to_string(),
                case: case.name().to_string(),
                status,
            });
        }
    }
    if !config.verbose && !records.is_empty() {
        let _ = writeln!(out);
    }

    let result = RunResult {
        records,
        elapsed: started.elapsed(),
    };
    report(&result, config, out);
    result
}

fn execute_case(case: &TestCase) -> CaseStatus {
    match catch_unwind(AssertUnwindSafe(|| case.execute())) {
        Ok(Ok(())) => CaseStatus::Passed,
        Ok(Err(CaseFault::Assertion {
            message,
            expected,
            actual,
        })) => CaseStatus::Failed {
            message,
            expected,
            actual,
        },
        Ok(Err(CaseFault::Error { message })) => CaseStatus::Errored { message },
        Err(payload) => CaseStatus::Errored {
            message: panic_message(payload),
        },
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panic: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panic: {s}")
    } else {
        "panic: unexpected payload".to_string()
    }
}

// =============================================================================
// REPORTING
// =============================================================================

fn emit_progress(
    group: &str,
    case: &str,
    status: &CaseStatus,
    config: &RunnerConfig,
    out: &mut dyn Write,
) {
    if config.verbose {
        let line = match status {
            CaseStatus::Passed => format!("{}: {} [{}]", config.colorize("PASS", GREEN), case, group),
            CaseStatus::Failed { .. } => {
                format!("{}: {} [{}]", config.colorize("FAIL", RED), case, group)
            }
            CaseStatus::Errored { .. } => {
                format!("{}: {} [{}]", config.colorize("ERROR", YELLOW), case, group)
            }
        };
        let _ = writeln!(out, "{line}");
    } else {
        let mark = match status {
            CaseStatus::Passed => ".",
            CaseStatus::Failed { .. } => "F",
            CaseStatus::Errored { .. } => "E",
        };
        let _ = write!(out, "{mark}");
        let _ = out.flush();
    }
}

/// Writes detail blocks for every failure and error, then the final tally.
fn report(result: &RunResult, config: &RunnerConfig, out: &mut dyn Write) {
    for record in &result.records {
        match &record.status {
            CaseStatus::Passed => {}
            CaseStatus::Failed {
                message,
                expected,
                actual,
            } => {
                let _ = writeln!(
                    out,
                    "{}: {} [{}]",
                    config.colorize("FAIL", RED),
                    record.case,
                    record.group
                );
                let _ = writeln!(out, "  {message}");
                if let (Some(expected), Some(actual)) = (expected, actual) {
                    write_diff(expected, actual, config, out);
                }
            }
            CaseStatus::Errored { message } => {
                let _ = writeln!(
                    out,
                    "{}: {} [{}]",
                    config.colorize("ERROR", YELLOW),
                    record.case,
                    record.group
                );
                let _ = writeln!(out, "  {message}");
            }
        }
    }

    let _ = writeln!(
        out,
        "\nRan {} cases in {:.3}s",
        result.cases_run(),
        result.elapsed.as_secs_f64()
    );
    if result.ok() {
        let _ = writeln!(out, "{}", config.colorize("OK", GREEN));
    } else {
        let _ = writeln!(
            out,
            "{} (failures={}, errors={})",
            config.colorize("FAILED", RED),
            result.failures(),
            result.errors()
        );
    }
}

/// Line diff between expected and actual text.
fn write_diff(expected: &str, actual: &str, config: &RunnerConfig, out: &mut dyn Write) {
    let changeset = Changeset::new(expected, actual, "\n");
    let _ = writeln!(out, "  Diff:");
    for diff in &changeset.diffs {
        match diff {
            Difference::Same(x) => {
                let _ = writeln!(out, "    {x}");
            }
            Difference::Rem(x) => {
                let _ = writeln!(out, "  - {}", config.colorize(x, GREEN));
            }
            Difference::Add(x) => {
                let _ = writeln!(out, "  + {}", config.colorize(x, RED));
            }
        }
    }
}
