//! Combat events emitted while a round resolves.
//!
//! Events are the engine's output channel: hosts render battle logs, drive
//! animations, and update deck state from them. They describe what happened
//! and never carry authority; the [`crate::state::BattleState`] mutation has
//! already occurred when an event is emitted.

use crate::combat::ReactionKind;
use crate::state::{BattleOutcome, CharacterId, Element, Omen, StatusKind};

/// Why a queued action was dropped without executing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    /// The actor died before the action reached the front of the queue.
    Dead,
    /// The actor is Frozen this round.
    Frozen,
}

/// One observable step of round resolution, in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatEvent {
    RoundStarted {
        round: u32,
    },
    OmenApplied {
        omen: Omen,
    },
    ActionSkipped {
        actor: CharacterId,
        reason: SkipReason,
    },
    /// A Perfect Deflect cancelled `loser`'s action.
    Deflected {
        winner: CharacterId,
        loser: CharacterId,
    },
    /// The Miss status suppressed the damage component of an action.
    Missed {
        attacker: CharacterId,
    },
    /// Stealth consumed itself to negate a hit entirely.
    StealthNegated {
        target: CharacterId,
    },
    ReactionTriggered {
        reaction: ReactionKind,
        target: CharacterId,
    },
    /// A hit landed. `attacker` is `None` for sourceless damage (omens).
    DamageDealt {
        attacker: Option<CharacterId>,
        target: CharacterId,
        amount: u32,
        element: Element,
        armor_absorbed: u32,
    },
    Healed {
        target: CharacterId,
        amount: u32,
    },
    ArmorGained {
        target: CharacterId,
        amount: u32,
    },
    StatusGranted {
        target: CharacterId,
        kind: StatusKind,
        stacks: u32,
    },
    /// A status was actively removed (cleanse, consumption, exclusivity).
    StatusRemoved {
        target: CharacterId,
        kind: StatusKind,
    },
    /// A status ran out of stacks or countdown during end-of-turn decay.
    StatusExpired {
        target: CharacterId,
        kind: StatusKind,
    },
    RegenerationTick {
        target: CharacterId,
        healed: u32,
    },
    PoisonTick {
        target: CharacterId,
        damage: u32,
    },
    BombExploded {
        target: CharacterId,
        damage: u32,
    },
    Died {
        target: CharacterId,
    },
    BattleEnded {
        outcome: BattleOutcome,
    },
}
