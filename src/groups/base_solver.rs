//! Validation of the shared solver-context bookkeeping.
//!
//! Every drift revision builds on the same dimension registry and buffer
//! budget arithmetic; these cases pin the derived quantities all revisions
//! agree on. No device is required.

use crate::suite::{expect, expect_eq, TestGroup};

pub const NAME: &str = "base-solver";

/// Problem extents as the solver context registers them.
#[derive(Debug, Clone, Copy)]
struct ProblemDims {
    ntime: usize,
    na: usize,
    nchan: usize,
    nsrc: usize,
}

impl ProblemDims {
    /// Baselines for an na-antenna array, autocorrelations excluded.
    fn nbl(&self) -> usize {
        self.na * (self.na - 1) / 2
    }

    fn nvis(&self) -> usize {
        self.ntime * self.nbl() * self.nchan
    }

    /// Visibility buffer budget: four polarisations, complex double.
    fn visibility_bytes(&self) -> usize {
        self.nvis() * 4 * 16
    }

    fn jones_terms(&self) -> usize {
        self.nsrc * self.ntime * self.na * self.nchan
    }
}

pub fn load() -> Result<TestGroup, String> {
    Ok(TestGroup::new(NAME)
        .with_case("baseline count follows antenna count", || {
            let dims = ProblemDims {
                ntime: 10,
                na: 14,
                nchan: 16,
                nsrc: 20,
            };
            expect_eq("nbl", 91, dims.nbl())
        })
        .with_case("visibility count is time x baseline x channel", || {
            let dims = ProblemDims {
                ntime: 5,
                na: 7,
                nchan: 32,
                nsrc: 1,
            };
            expect_eq("nvis", 5 * 21 * 32, dims.nvis())
        })
        .with_case("visibility budget scales with polarised complex size", || {
            let dims = ProblemDims {
                ntime: 1,
                na: 3,
                nchan: 1,
                nsrc: 1,
            };
            expect_eq("bytes", 3 * 64, dims.visibility_bytes())
        })
        .with_case("jones term count covers every source sample", || {
            let dims = ProblemDims {
                ntime: 2,
                na: 4,
                nchan: 8,
                nsrc: 3,
            };
            expect_eq("jones", 192, dims.jones_terms())?;
            expect("jones dominates nvis for many sources", dims.jones_terms() > dims.nvis())
        }))
}
