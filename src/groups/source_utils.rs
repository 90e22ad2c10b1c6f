//! Source-configuration utility validation.
//!
//! The solvers take their sky model as per-type source counts written as a
//! colon-separated spec, `"<npoint>:<ngauss>:<nsersic>"`. These cases pin
//! the parse and the derived totals.

use crate::suite::{expect, expect_eq, CaseFault, TestGroup};

pub const NAME: &str = "source-utils";

/// Per-type source counts in registration order: point, gaussian, sersic.
fn parse_source_spec(spec: &str) -> Result<[usize; 3], String> {
    let mut counts = [0usize; 3];
    let fields: Vec<&str> = spec.split(':').collect();
    if fields.len() != counts.len() {
        return Err(format!(
            "source spec '{spec}' has {} fields, expected {}",
            fields.len(),
            counts.len()
        ));
    }
    for (slot, field) in counts.iter_mut().zip(&fields) {
        *slot = field
            .trim()
            .parse()
            .map_err(|_| format!("source spec '{spec}': bad count '{field}'"))?;
    }
    Ok(counts)
}

fn total_sources(counts: [usize; 3]) -> usize {
    counts.iter().sum()
}

pub fn load() -> Result<TestGroup, String> {
    Ok(TestGroup::new(NAME)
        .with_case("source spec parses per-type counts", || {
            let counts = parse_source_spec("10:4:2").map_err(CaseFault::error)?;
            expect_eq("counts", [10, 4, 2], counts)
        })
        .with_case("total sources sums every type", || {
            let counts = parse_source_spec("1:0:3").map_err(CaseFault::error)?;
            expect_eq("total", 4, total_sources(counts))
        })
        .with_case("zero spec yields zero sources", || {
            let counts = parse_source_spec("0:0:0").map_err(CaseFault::error)?;
            expect_eq("total", 0, total_sources(counts))
        })
        .with_case("short spec is rejected", || {
            expect("parse fails", parse_source_spec("10:4").is_err())
        }))
}
