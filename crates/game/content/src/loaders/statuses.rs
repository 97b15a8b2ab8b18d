//! Status catalog loader.

use std::collections::HashMap;
use std::path::Path;

use combat_core::{StatusAttributes, StatusKind, StatusOracle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Stacking attributes per status kind, loaded from RON.
///
/// Implements [`StatusOracle`]; kinds missing from the catalog fall back to
/// combat-core's built-in defaults (with a warning) at query time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCatalog {
    pub statuses: HashMap<StatusKind, StatusAttributes>,
}

impl StatusCatalog {
    /// Load the status catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse status catalog RON: {}", e))
    }

    /// The catalog shipped with this crate, embedded at compile time.
    pub fn builtin() -> LoadResult<Self> {
        ron::from_str(include_str!("../../data/statuses.ron"))
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded statuses.ron: {}", e))
    }

    pub fn get(&self, kind: StatusKind) -> Option<StatusAttributes> {
        self.statuses.get(&kind).copied()
    }
}

impl StatusOracle for StatusCatalog {
    fn status_attributes(&self, kind: StatusKind) -> Option<StatusAttributes> {
        self.get(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn builtin_catalog_covers_every_status_kind() {
        let catalog = StatusCatalog::builtin().unwrap();
        for kind in StatusKind::iter() {
            assert!(catalog.get(kind).is_some(), "missing entry for {kind}");
        }
    }

    #[test]
    fn builtin_catalog_pins_one_shot_kinds_at_a_single_stack() {
        let catalog = StatusCatalog::builtin().unwrap();
        for kind in [
            StatusKind::FireResidue,
            StatusKind::Frozen,
            StatusKind::Stealth,
            StatusKind::Vulnerable,
            StatusKind::Bomb,
        ] {
            let attrs = catalog.get(kind).unwrap();
            assert!(!attrs.stackable, "{kind} should not stack");
        }
        assert!(catalog.get(StatusKind::Poison).unwrap().stackable);
    }
}
