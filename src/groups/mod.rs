//! The catalog's test-group modules.
//!
//! Each module exposes exactly one group under a fixed `NAME`, via a `load`
//! function with the catalog's loader signature. The harness treats the
//! groups as opaque, self-validating units; nothing outside this tree
//! inspects anything beyond the name and the case list.

pub mod base_solver;
pub mod device;
pub mod drift_v2;
pub mod drift_v3;
pub mod drift_v4;
pub mod drift_v5;
pub mod source_utils;
pub mod utils;
