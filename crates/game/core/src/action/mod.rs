//! Action descriptors and the round scheduler.

pub mod scheduler;

pub use scheduler::{DeflectOutcome, RoundQueue};

use crate::state::{CharacterId, Element, Polarity, StatusKind};

/// Card/skill type, used for speed-tie priority and the deflect counter
/// relation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionType {
    Swift,
    Strong,
    Normal,
    None,
}

impl ActionType {
    /// Tie-break rank for equal-speed ordering: `Swift < Normal < Strong <
    /// None`. Lower acts first.
    pub fn tie_priority(self) -> u8 {
        match self {
            ActionType::Swift => 0,
            ActionType::Normal => 1,
            ActionType::Strong => 2,
            ActionType::None => 3,
        }
    }

    /// The cyclic counter relation behind Perfect Deflect:
    /// Swift beats Strong, Strong beats Normal, Normal beats Swift.
    /// `None` neither counters nor is countered.
    pub fn counters(self, other: ActionType) -> bool {
        matches!(
            (self, other),
            (ActionType::Swift, ActionType::Strong)
                | (ActionType::Strong, ActionType::Normal)
                | (ActionType::Normal, ActionType::Swift)
        )
    }
}

/// Damage component of an effect payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageSpec {
    pub amount: u32,
    pub element: Element,
    /// Hits every living combatant on the opposing side instead of the
    /// resolved target.
    pub aoe: bool,
}

/// Status-grant component of an effect payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusGrant {
    pub kind: StatusKind,
    pub stacks: u32,
    /// Grant to the actor instead of the resolved target.
    pub on_self: bool,
}

/// Effect components of one action, applied in the fixed order
/// damage -> heal -> armor -> status. Absent components are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectPayload {
    pub damage: Option<DamageSpec>,
    /// Healing applied to the actor.
    pub heal: Option<u32>,
    /// Armor granted to the actor.
    pub armor: Option<u32>,
    pub status: Option<StatusGrant>,
}

/// Immutable snapshot of one queued action.
///
/// Built once per round from the host's output-slot assignments (player) or
/// the intent planner (enemies); consumed and discarded after execution. All
/// host-side payload transforms (slot modifiers, the None-type boost) happen
/// before submission.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionDescriptor {
    pub actor: CharacterId,
    pub polarity: Polarity,
    pub speed: i32,
    pub action_type: ActionType,
    pub payload: EffectPayload,
    pub target: CharacterId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_relation_is_cyclic_and_exclusive() {
        assert!(ActionType::Swift.counters(ActionType::Strong));
        assert!(ActionType::Strong.counters(ActionType::Normal));
        assert!(ActionType::Normal.counters(ActionType::Swift));

        // Reverse directions never counter.
        assert!(!ActionType::Strong.counters(ActionType::Swift));
        assert!(!ActionType::Normal.counters(ActionType::Strong));
        assert!(!ActionType::Swift.counters(ActionType::Normal));

        // None and reflexive pairs are inert.
        for t in [
            ActionType::Swift,
            ActionType::Strong,
            ActionType::Normal,
            ActionType::None,
        ] {
            assert!(!t.counters(t));
            assert!(!ActionType::None.counters(t));
            assert!(!t.counters(ActionType::None));
        }
    }
}
