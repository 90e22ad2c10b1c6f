//! Fatal configuration errors.
//!
//! Everything here means the harness itself is broken, not the code under
//! test: a schedule naming a group the catalog cannot provide, a loader that
//! cannot produce its module, or a malformed schedule. These abort suite
//! construction before any test executes. Test-level faults never appear
//! here; the runner aggregates them into the run result instead.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    /// The schedule or activation plan names a group the catalog does not
    /// provide.
    #[error("unknown test group '{name}'")]
    #[diagnostic(
        code(driftcheck::unknown_group),
        help("available groups: {available}")
    )]
    UnknownGroup { name: String, available: String },

    /// A catalog loader failed to produce its group.
    #[error("test group '{name}' failed to load: {reason}")]
    #[diagnostic(code(driftcheck::group_load))]
    GroupLoad { name: String, reason: String },

    /// The schedule policy lists the same group more than once.
    #[error("test group '{name}' appears more than once in the schedule")]
    #[diagnostic(code(driftcheck::duplicate_group))]
    DuplicateGroup { name: String },

    /// The activation plan marks a group active that the schedule policy
    /// never orders, so it would silently never run.
    #[error("test group '{name}' is active but missing from the schedule")]
    #[diagnostic(
        code(driftcheck::unscheduled_group),
        help("add '{name}' to the schedule policy or disable it in the activation plan")
    )]
    Unscheduled { name: String },
}
