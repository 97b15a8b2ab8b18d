//! Monster catalog oracle: skill lists and per-turn action patterns.

use crate::action::{ActionType, EffectPayload};
use crate::state::MonsterId;

/// One enemy skill as it appears in the monster catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSpec {
    /// Card id shown by the host for intent display; unused by the core.
    pub card_id: Option<u32>,
    pub speed: i32,
    pub action_type: ActionType,
    pub payload: EffectPayload,
}

/// How a monster picks skills each round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionPattern {
    /// Skill index used once on the first round, before the normal rotation.
    pub opener: Option<usize>,
    pub actions_per_turn: u32,
    /// Random skill order when true; cyclic otherwise.
    pub random_order: bool,
}

impl Default for ActionPattern {
    fn default() -> Self {
        Self {
            opener: None,
            actions_per_turn: 1,
            random_order: false,
        }
    }
}

/// Read-only monster catalog supplied by the host.
pub trait MonsterOracle: Send + Sync {
    /// Skill list for a monster. Empty when the monster is unknown or has no
    /// skills configured; the intent planner then contributes nothing.
    fn skills(&self, monster: MonsterId) -> &[SkillSpec];

    /// Selection pattern for a monster, or `None` when unknown.
    fn action_pattern(&self, monster: MonsterId) -> Option<ActionPattern>;
}
