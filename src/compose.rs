//! Suite composition: which groups run, and in what order.
//!
//! Two pieces of declarative data drive composition. The [`SchedulePolicy`]
//! is an explicit priority list giving the order groups run in; the
//! [`ActivationPlan`] marks each catalog group active or disabled, with a
//! recorded reason for every exclusion. Keeping the two separate preserves
//! the invariant that deactivating a group never reorders the rest.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::errors::HarnessError;
use crate::groups;
use crate::suite::Suite;

// =============================================================================
// ACTIVATION
// =============================================================================

/// Activation state of one catalog group within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Active,
    /// Deliberately excluded from the run. The module stays in the catalog
    /// and must still resolve; only its execution is suppressed.
    Disabled { reason: &'static str },
}

impl Activation {
    pub fn is_active(&self) -> bool {
        matches!(self, Activation::Active)
    }
}

/// One (group, activation) entry in a plan.
#[derive(Debug, Clone, Copy)]
pub struct GroupEntry {
    pub name: &'static str,
    pub activation: Activation,
}

/// Declarative enabled/disabled list over catalog groups.
#[derive(Debug, Clone)]
pub struct ActivationPlan {
    entries: Vec<GroupEntry>,
}

impl ActivationPlan {
    pub fn new(entries: Vec<GroupEntry>) -> Self {
        ActivationPlan { entries }
    }

    /// The release plan. drift-v5 and drift-v3 stay importable but do not
    /// execute; the reasons are recorded here so `driftcheck list` shows
    /// them instead of a silent omission.
    pub fn release_default() -> Self {
        ActivationPlan::new(vec![
            GroupEntry {
                name: groups::base_solver::NAME,
                activation: Activation::Active,
            },
            GroupEntry {
                name: groups::utils::NAME,
                activation: Activation::Active,
            },
            GroupEntry {
                name: groups::source_utils::NAME,
                activation: Activation::Active,
            },
            GroupEntry {
                name: groups::drift_v5::NAME,
                activation: Activation::Disabled {
                    reason: "composite kernels not yet ported to the current device API",
                },
            },
            GroupEntry {
                name: groups::drift_v4::NAME,
                activation: Activation::Active,
            },
            GroupEntry {
                name: groups::drift_v3::NAME,
                activation: Activation::Disabled {
                    reason: "superseded by v4; kept in the catalog for regression bisects",
                },
            },
            GroupEntry {
                name: groups::drift_v2::NAME,
                activation: Activation::Active,
            },
        ])
    }

    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.name == name && e.activation.is_active())
    }

    /// Returns the plan with the named group activated.
    pub fn activate(mut self, name: &str) -> Self {
        for entry in &mut self.entries {
            if entry.name == name {
                entry.activation = Activation::Active;
            }
        }
        self
    }

    /// Returns the plan with the named group disabled for the given reason.
    pub fn deactivate(mut self, name: &str, reason: &'static str) -> Self {
        for entry in &mut self.entries {
            if entry.name == name {
                entry.activation = Activation::Disabled { reason };
            }
        }
        self
    }
}

// =============================================================================
// SCHEDULING
// =============================================================================

/// Explicit priority list giving the order active groups run in.
#[derive(Debug, Clone)]
pub struct SchedulePolicy {
    priority: Vec<&'static str>,
}

impl SchedulePolicy {
    pub fn new(priority: Vec<&'static str>) -> Self {
        SchedulePolicy { priority }
    }

    /// The release order. Cheap, device-free groups run first for fast
    /// feedback; among the GPU solver revisions the newest runs first, since
    /// recent code is the most likely to regress.
    pub fn release_default() -> Self {
        SchedulePolicy::new(vec![
            groups::base_solver::NAME,
            groups::utils::NAME,
            groups::source_utils::NAME,
            groups::drift_v5::NAME,
            groups::drift_v4::NAME,
            groups::drift_v3::NAME,
            groups::drift_v2::NAME,
        ])
    }

    pub fn priority(&self) -> &[&'static str] {
        &self.priority
    }
}

// =============================================================================
// COMPOSITION
// =============================================================================

/// Composes a suite: walks the policy order once per iteration, loading
/// every active group from the catalog.
///
/// The full schedule and plan are validated before anything loads, and the
/// first catalog error aborts composition outright; no partial suite is ever
/// returned. An iteration count of zero behaves as one.
pub fn compose(
    catalog: &Catalog,
    policy: &SchedulePolicy,
    plan: &ActivationPlan,
    iterations: usize,
) -> Result<Suite, HarnessError> {
    let mut seen = BTreeSet::new();
    for name in policy.priority() {
        if !seen.insert(*name) {
            return Err(HarnessError::DuplicateGroup {
                name: (*name).to_string(),
            });
        }
        catalog.ensure(name)?;
    }

    // Every plan entry must resolve, active or not: a disabled group whose
    // module vanished is still a broken catalog.
    for entry in plan.entries() {
        catalog.ensure(entry.name)?;
        if entry.activation.is_active() && !seen.contains(entry.name) {
            return Err(HarnessError::Unscheduled {
                name: entry.name.to_string(),
            });
        }
    }

    let iterations = iterations.max(1);
    let mut loaded = Vec::new();
    for _ in 0..iterations {
        for name in policy.priority() {
            if !plan.is_active(name) {
                continue;
            }
            loaded.push(catalog.load(name)?);
        }
    }
    Ok(Suite::from_groups(loaded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deactivate_records_reason() {
        let plan = ActivationPlan::release_default().deactivate(groups::drift_v4::NAME, "flaky");
        let entry = plan
            .entries()
            .iter()
            .find(|e| e.name == groups::drift_v4::NAME)
            .unwrap();
        assert_eq!(entry.activation, Activation::Disabled { reason: "flaky" });
        assert!(!plan.is_active(groups::drift_v4::NAME));
    }
}
