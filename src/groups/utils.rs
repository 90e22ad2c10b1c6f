//! Generic utility validation: alignment and layout helpers.

use crate::suite::{expect_eq, TestGroup};

pub const NAME: &str = "utils";

/// Rounds `n` up to the next multiple of `block`.
fn round_up(n: usize, block: usize) -> usize {
    n.div_ceil(block) * block
}

/// Row-major flat index into an `(nrow, ncol)` layout.
fn flat_index(row: usize, col: usize, ncol: usize) -> usize {
    row * ncol + col
}

pub fn load() -> Result<TestGroup, String> {
    Ok(TestGroup::new(NAME)
        .with_case("alignment rounds up to block multiples", || {
            expect_eq("round_up(100, 32)", 128, round_up(100, 32))?;
            expect_eq("round_up(128, 32)", 128, round_up(128, 32))
        })
        .with_case("alignment of zero stays zero", || {
            expect_eq("round_up(0, 32)", 0, round_up(0, 32))
        })
        .with_case("flat index matches row-major layout", || {
            expect_eq("corner", 0, flat_index(0, 0, 16))?;
            expect_eq("interior", 3 * 16 + 5, flat_index(3, 5, 16))
        }))
}
