//! Traits describing read-only battle data.
//!
//! Oracles expose the status catalog, monster definitions, and the random
//! source. The [`CombatEnv`] aggregate bundles them so the engine can access
//! everything it needs without hard coupling to concrete implementations.

mod error;
mod monsters;
mod rng;
mod status;

pub use error::OracleError;
pub use monsters::{ActionPattern, MonsterOracle, SkillSpec};
pub use rng::{FixedRng, PcgRng, RngOracle, RollCtx, derive_seed, roll_context};
pub use status::{StatusAttributes, StatusOracle};

use crate::state::StatusKind;

/// Aggregates the read-only oracles required by the engine.
///
/// Every oracle is optional; accessors return [`OracleError`] and combat code
/// degrades to built-in defaults rather than aborting a round.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    statuses: Option<&'a dyn StatusOracle>,
    monsters: Option<&'a dyn MonsterOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> CombatEnv<'a> {
    pub fn new(
        statuses: Option<&'a dyn StatusOracle>,
        monsters: Option<&'a dyn MonsterOracle>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self {
            statuses,
            monsters,
            rng,
        }
    }

    pub fn with_all(
        statuses: &'a dyn StatusOracle,
        monsters: &'a dyn MonsterOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self::new(Some(statuses), Some(monsters), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            statuses: None,
            monsters: None,
            rng: None,
        }
    }

    /// Returns the StatusOracle, or an error if not available.
    pub fn statuses(&self) -> Result<&'a dyn StatusOracle, OracleError> {
        self.statuses.ok_or(OracleError::StatusesNotAvailable)
    }

    /// Returns the MonsterOracle, or an error if not available.
    pub fn monsters(&self) -> Result<&'a dyn MonsterOracle, OracleError> {
        self.monsters.ok_or(OracleError::MonstersNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Optional RNG reference for [`RollCtx`] construction.
    pub fn rng_opt(&self) -> Option<&'a dyn RngOracle> {
        self.rng
    }

    /// Stacking attributes for a status kind, falling back to the kind's
    /// built-in defaults (with a warning) when the catalog has no entry.
    pub fn status_attributes(&self, kind: StatusKind) -> StatusAttributes {
        match self.statuses {
            Some(oracle) => oracle.status_attributes(kind).unwrap_or_else(|| {
                tracing::warn!(%kind, "status catalog has no entry; using built-in defaults");
                StatusAttributes::default_for(kind)
            }),
            None => StatusAttributes::default_for(kind),
        }
    }
}
