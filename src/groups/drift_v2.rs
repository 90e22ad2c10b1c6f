//! Revision 2 of the drift solver: the original point-source pipeline.

use crate::groups::device;
use crate::suite::{expect, expect_eq, CaseFault, TestGroup};

pub const NAME: &str = "drift-v2";

const SOURCE_TYPES: &[&str] = &["point"];
const KERNELS: &[&str] = &["phase", "jones", "reduce"];

pub fn load() -> Result<TestGroup, String> {
    Ok(TestGroup::new(NAME)
        .with_case("kernel table covers the v2 pipeline", || {
            expect_eq("kernels", 3, KERNELS.len())?;
            expect_eq("first stage", "phase", KERNELS[0])
        })
        .with_case("v2 accepts point sources only", || {
            expect_eq("source types", vec!["point"], SOURCE_TYPES.to_vec())
        })
        .with_case("device smoke", || {
            let handle = device::acquire().map_err(CaseFault::error)?;
            expect("ordinal in range", handle.ordinal < 16)
        }))
}
