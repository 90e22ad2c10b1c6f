//! Revision 3 of the drift solver: gaussian source support.
//!
//! Disabled in the release activation plan (superseded by v4) but kept in
//! the catalog so it can be re-enabled for regression bisects.

use crate::groups::device;
use crate::suite::{expect_eq, CaseFault, TestGroup};

pub const NAME: &str = "drift-v3";

const SOURCE_TYPES: &[&str] = &["point", "gaussian"];

pub fn load() -> Result<TestGroup, String> {
    Ok(TestGroup::new(NAME)
        .with_case("v3 extends v2 with gaussian sources", || {
            expect_eq("source types", 2, SOURCE_TYPES.len())?;
            expect_eq("newest type", "gaussian", SOURCE_TYPES[1])
        })
        .with_case("device smoke", || {
            device::acquire().map_err(CaseFault::error)?;
            Ok(())
        }))
}
