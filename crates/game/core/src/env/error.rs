//! Oracle access errors.

/// Errors that occur when accessing oracle data.
///
/// A missing oracle never aborts a round: callers degrade to built-in
/// defaults or skip the effect, surfacing the problem through `warn!` logs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// StatusOracle is not available in the environment.
    #[error("StatusOracle not available")]
    StatusesNotAvailable,

    /// MonsterOracle is not available in the environment.
    #[error("MonsterOracle not available")]
    MonstersNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}
