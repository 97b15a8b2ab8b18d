//! Content loaders for reading battle data from RON files.
//!
//! Each catalog can be loaded from an external file or from the data shipped
//! with the crate (`builtin()`), which is embedded at compile time.

pub mod cards;
pub mod factory;
pub mod monsters;
pub mod statuses;

pub use cards::{CardCatalog, CardClass, CardSpec};
pub use factory::{ContentFactory, build_battle};
pub use monsters::{MonsterCatalog, MonsterDef};
pub use statuses::StatusCatalog;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
