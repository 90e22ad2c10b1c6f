//! Runner behavior: sequential execution, fault capture, and report text.

use driftcheck::catalog::Catalog;
use driftcheck::compose::{compose, ActivationPlan, GroupEntry, SchedulePolicy};
use driftcheck::compose::Activation::Active;
use driftcheck::runner::{run_suite, CaseStatus, RunnerConfig};
use driftcheck::suite::{expect_eq, CaseFault, TestGroup};

fn run_to_string(
    catalog: &Catalog,
    order: Vec<&'static str>,
    verbose: bool,
) -> (driftcheck::runner::RunResult, String) {
    let plan = ActivationPlan::new(
        order
            .iter()
            .map(|&name| GroupEntry {
                name,
                activation: Active,
            })
            .collect(),
    );
    let suite = compose(catalog, &SchedulePolicy::new(order), &plan, 1).unwrap();
    let config = RunnerConfig {
        use_colors: false,
        verbose,
    };
    let mut out = Vec::new();
    let result = run_suite(&suite, &config, &mut out);
    (result, String::from_utf8(out).unwrap())
}

// =============================================================================
// SCENARIO A: LIGHTWEIGHT GROUPS, ALL PASSING
// =============================================================================

fn geometry() -> Result<TestGroup, String> {
    Ok(TestGroup::new("geometry")
        .with_case("right triangle", || expect_eq("hypotenuse", 25, 3 * 3 + 4 * 4))
        .with_case("unit square", || expect_eq("area", 1, 1)))
}

fn arithmetic() -> Result<TestGroup, String> {
    Ok(TestGroup::new("arithmetic").with_case("sum", || expect_eq("sum", 10, 1 + 2 + 3 + 4)))
}

fn strings() -> Result<TestGroup, String> {
    Ok(TestGroup::new("strings").with_case("concat", || {
        expect_eq("concat", "ab".to_string(), format!("{}{}", "a", "b"))
    }))
}

#[test]
fn all_passing_groups_yield_a_clean_result() {
    let mut catalog = Catalog::new();
    catalog.register("geometry", geometry);
    catalog.register("arithmetic", arithmetic);
    catalog.register("strings", strings);

    let (result, output) = run_to_string(&catalog, vec!["geometry", "arithmetic", "strings"], true);

    assert!(result.ok());
    assert_eq!(result.cases_run(), 4);
    assert_eq!(result.failures(), 0);
    assert_eq!(result.errors(), 0);

    // Verbose mode lists every case's status.
    assert!(output.contains("PASS: right triangle [geometry]"));
    assert!(output.contains("PASS: sum [arithmetic]"));
    assert!(output.contains("PASS: concat [strings]"));
    assert!(output.contains("Ran 4 cases in"));
    assert!(output.contains("OK"));
}

// =============================================================================
// FAULT CAPTURE
// =============================================================================

fn mixed() -> Result<TestGroup, String> {
    Ok(TestGroup::new("mixed")
        .with_case("mismatch", || expect_eq("answer", 42, 41))
        .with_case("still runs after a failure", || Ok(()))
        .with_case("device gone", || {
            Err(CaseFault::error("no acceleration device configured"))
        })
        .with_case("panics", || panic!("kernel launch out of bounds"))
        .with_case("last case still runs", || Ok(())))
}

#[test]
fn faults_are_recorded_without_halting_the_run() {
    let mut catalog = Catalog::new();
    catalog.register("mixed", mixed);

    let (result, output) = run_to_string(&catalog, vec!["mixed"], false);

    assert_eq!(result.cases_run(), 5);
    assert_eq!(result.failures(), 1);
    assert_eq!(result.errors(), 2);
    assert!(!result.ok());

    let statuses: Vec<_> = result.records.iter().map(|r| &r.status).collect();
    assert!(matches!(statuses[0], CaseStatus::Failed { .. }));
    assert!(matches!(statuses[1], CaseStatus::Passed));
    assert!(matches!(statuses[2], CaseStatus::Errored { .. }));
    assert!(matches!(statuses[3], CaseStatus::Errored { .. }));
    assert!(matches!(statuses[4], CaseStatus::Passed));

    // Dotted progress, one mark per case.
    assert!(output.contains("F.EE."));
    assert!(output.contains("FAILED (failures=1, errors=2)"));
}

#[test]
fn panic_payload_lands_in_the_error_record() {
    let mut catalog = Catalog::new();
    catalog.register("mixed", mixed);

    let (result, _) = run_to_string(&catalog, vec!["mixed"], false);
    match &result.records[3].status {
        CaseStatus::Errored { message } => {
            assert!(message.contains("kernel launch out of bounds"));
        }
        other => panic!("expected an error record, got {other:?}"),
    }
}

#[test]
fn assertion_details_include_a_diff() {
    let mut catalog = Catalog::new();
    catalog.register("mixed", mixed);

    let (_, output) = run_to_string(&catalog, vec!["mixed"], false);
    assert!(output.contains("FAIL: mismatch [mixed]"));
    assert!(output.contains("answer: expected 42, got 41"));
    assert!(output.contains("Diff:"));
    assert!(output.contains("- 42"));
    assert!(output.contains("+ 41"));
}

#[test]
fn summary_counts_match_the_records() {
    let mut catalog = Catalog::new();
    catalog.register("mixed", mixed);
    catalog.register("arithmetic", arithmetic);

    let (result, _) = run_to_string(&catalog, vec!["arithmetic", "mixed"], false);
    assert_eq!(
        result.cases_run(),
        result.failures()
            + result.errors()
            + result
                .records
                .iter()
                .filter(|r| r.status == CaseStatus::Passed)
                .count()
    );
}
