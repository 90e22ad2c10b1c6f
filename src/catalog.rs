//! The fixed catalog of known test-group modules.
//!
//! Each module under [`crate::groups`] exposes exactly one group under a
//! fixed name. The catalog maps those names to loader functions and is the
//! only place groups are resolved; a lookup miss or a failing loader is a
//! fatal configuration error, never a test failure.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::errors::HarnessError;
use crate::groups;
use crate::suite::TestGroup;

/// Loader signature for one catalog module. A loader either produces its
/// group or reports why the module is unusable.
pub type Loader = fn() -> Result<TestGroup, String>;

static BUILTIN: Lazy<BTreeMap<&'static str, Loader>> = Lazy::new(|| {
    let mut table: BTreeMap<&'static str, Loader> = BTreeMap::new();
    table.insert(groups::base_solver::NAME, groups::base_solver::load);
    table.insert(groups::utils::NAME, groups::utils::load);
    table.insert(groups::source_utils::NAME, groups::source_utils::load);
    table.insert(groups::drift_v2::NAME, groups::drift_v2::load);
    table.insert(groups::drift_v3::NAME, groups::drift_v3::load);
    table.insert(groups::drift_v4::NAME, groups::drift_v4::load);
    table.insert(groups::drift_v5::NAME, groups::drift_v5::load);
    table
});

/// Registry mapping fixed group names to their loaders.
#[derive(Debug, Clone)]
pub struct Catalog {
    loaders: BTreeMap<&'static str, Loader>,
}

impl Catalog {
    /// An empty catalog. Tests build synthetic catalogs from this.
    pub fn new() -> Self {
        Catalog {
            loaders: BTreeMap::new(),
        }
    }

    /// The release catalog: all seven driftsim test modules.
    pub fn builtin() -> Self {
        Catalog {
            loaders: BUILTIN.clone(),
        }
    }

    pub fn register(&mut self, name: &'static str, loader: Loader) {
        self.loaders.insert(name, loader);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loaders.contains_key(name)
    }

    /// Registered group names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        self.loaders.keys().copied().collect()
    }

    /// Resolves a name without loading. Used during composition so that
    /// every scheduled module is verified importable up front, including
    /// deactivated ones.
    pub fn ensure(&self, name: &str) -> Result<(), HarnessError> {
        if self.contains(name) {
            return Ok(());
        }
        Err(HarnessError::UnknownGroup {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// Loads the named group.
    pub fn load(&self, name: &str) -> Result<TestGroup, HarnessError> {
        let loader = self
            .loaders
            .get(name)
            .ok_or_else(|| HarnessError::UnknownGroup {
                name: name.to_string(),
                available: self.names().join(", "),
            })?;
        loader().map_err(|reason| HarnessError::GroupLoad {
            name: name.to_string(),
            reason,
        })
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
