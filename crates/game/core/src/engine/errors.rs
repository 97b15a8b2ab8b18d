//! Host-facing engine errors.
//!
//! These flag misuse of the phase machine by the host, never combat outcomes:
//! inside a resolving round every problem degrades to a skipped effect.

use crate::state::{BattlePhase, CharacterId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The operation was invoked in the wrong battle phase.
    #[error("operation requires phase {expected}, but the battle is in {found}")]
    PhaseMismatch {
        expected: BattlePhase,
        found: BattlePhase,
    },

    /// The referenced combatant is not in the roster.
    #[error("unknown character id {}", (.0).0)]
    UnknownCharacter(CharacterId),

    /// The battle has already reached Victory or Defeat.
    #[error("battle is already over")]
    BattleOver,
}
