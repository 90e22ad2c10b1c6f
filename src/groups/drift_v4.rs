//! Revision 4 of the drift solver: sersic profiles and the fused kernel.

use crate::groups::device;
use crate::suite::{expect, expect_eq, CaseFault, TestGroup};

pub const NAME: &str = "drift-v4";

const SOURCE_TYPES: &[&str] = &["point", "gaussian", "sersic"];
const KERNELS: &[&str] = &["ekb", "sum_coherencies", "reduce"];

pub fn load() -> Result<TestGroup, String> {
    Ok(TestGroup::new(NAME)
        .with_case("kernel table matches the fused v4 pipeline", || {
            expect_eq("kernels", 3, KERNELS.len())?;
            expect("fused stage present", KERNELS.contains(&"ekb"))
        })
        .with_case("v4 accepts every registered source type", || {
            expect_eq("source types", 3, SOURCE_TYPES.len())
        })
        .with_case("device smoke", || {
            let handle = device::acquire().map_err(CaseFault::error)?;
            expect("ordinal in range", handle.ordinal < 16)
        }))
}
