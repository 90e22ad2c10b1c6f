//! Core data model: test cases, test groups, and the composed suite.
//!
//! The harness treats every case body as an opaque, self-validating unit.
//! A case reports faults through [`CaseFault`], which keeps the distinction
//! between a checked expectation that did not hold and an unexpected fault
//! the case could not attribute to the contract under test.

use std::fmt;

// =============================================================================
// CASE FAULTS
// =============================================================================

/// A fault raised by a single test case.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseFault {
    /// A checked expectation did not hold. When expected/actual text is
    /// present the runner renders a line diff in the failure details.
    Assertion {
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// An unexpected fault, e.g. the acceleration device is unavailable.
    Error { message: String },
}

impl CaseFault {
    /// Builds an assertion fault from a bare message.
    pub fn assertion(message: impl Into<String>) -> Self {
        CaseFault::Assertion {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Builds an unexpected-fault error.
    pub fn error(message: impl Into<String>) -> Self {
        CaseFault::Error {
            message: message.into(),
        }
    }
}

/// Compares a checked expectation, producing a diffable fault on mismatch.
pub fn expect_eq<T>(what: &str, expected: T, actual: T) -> Result<(), CaseFault>
where
    T: PartialEq + fmt::Debug,
{
    if expected == actual {
        return Ok(());
    }
    Err(CaseFault::Assertion {
        message: format!("{what}: expected {expected:?}, got {actual:?}"),
        expected: Some(format!("{expected:?}")),
        actual: Some(format!("{actual:?}")),
    })
}

/// Checks a boolean expectation.
pub fn expect(what: &str, condition: bool) -> Result<(), CaseFault> {
    if condition {
        Ok(())
    } else {
        Err(CaseFault::assertion(format!("{what}: expectation not met")))
    }
}

// =============================================================================
// CASES AND GROUPS
// =============================================================================

type CaseFn = Box<dyn Fn() -> Result<(), CaseFault>>;

/// A single named test case. The body is opaque to the harness.
pub struct TestCase {
    name: String,
    run: CaseFn,
}

impl TestCase {
    pub fn new(name: impl Into<String>, run: impl Fn() -> Result<(), CaseFault> + 'static) -> Self {
        TestCase {
            name: name.into(),
            run: Box::new(run),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs the case body. Panics are the runner's concern, not ours.
    pub fn execute(&self) -> Result<(), CaseFault> {
        (self.run)()
    }
}

impl fmt::Debug for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestCase").field("name", &self.name).finish()
    }
}

/// A named, self-contained collection of independent test cases.
///
/// Groups are produced by catalog loaders and owned by the [`Suite`] for the
/// duration of one run.
#[derive(Debug)]
pub struct TestGroup {
    name: &'static str,
    cases: Vec<TestCase>,
}

impl TestGroup {
    pub fn new(name: &'static str) -> Self {
        TestGroup {
            name,
            cases: Vec::new(),
        }
    }

    /// Appends a case, keeping registration order.
    pub fn with_case(
        mut self,
        name: impl Into<String>,
        run: impl Fn() -> Result<(), CaseFault> + 'static,
    ) -> Self {
        self.cases.push(TestCase::new(name, run));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

// =============================================================================
// SUITE
// =============================================================================

/// An ordered sequence of test groups selected for one run.
///
/// Built fresh per invocation by [`crate::compose::compose`]; the group order
/// is exactly what the schedule policy dictated.
#[derive(Debug)]
pub struct Suite {
    groups: Vec<TestGroup>,
}

impl Suite {
    pub(crate) fn from_groups(groups: Vec<TestGroup>) -> Self {
        Suite { groups }
    }

    pub fn groups(&self) -> &[TestGroup] {
        &self.groups
    }

    /// Group names in execution order, for inspection without execution.
    pub fn group_names(&self) -> Vec<&'static str> {
        self.groups.iter().map(TestGroup::name).collect()
    }

    pub fn case_count(&self) -> usize {
        self.groups.iter().map(TestGroup::len).sum()
    }
}
