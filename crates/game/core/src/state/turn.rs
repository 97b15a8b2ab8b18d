//! Round bookkeeping: phase machine, omens, and pending submissions.

use crate::action::ActionDescriptor;

/// Phase state machine driven by the engine.
///
/// Preparation -> Planning -> Combat -> Resolution -> next round, or
/// Victory/Defeat as terminal states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    Preparation,
    Planning,
    Combat,
    Resolution,
    Victory,
    Defeat,
}

/// Terminal result of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleOutcome {
    Victory,
    Defeat,
}

/// Preparation-phase omen drawn at the start of each round.
///
/// Four outcomes mutate combat state directly; the two card outcomes only
/// surface an event for the host's deck layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Omen {
    /// Host draws an extra card. No core effect.
    DrawCard,
    /// Residue-free living enemies each gain a random elemental residue.
    ApplyRandomElement,
    /// All living enemies take 2 damage of one random element.
    ElementalBarrage,
    /// "None"-type card payloads are boosted 25% this round (host-applied).
    BoostNoneType,
    /// Host gains a temporary card. No core effect.
    GrantTemporaryCard,
    /// The player gains one stack of a random buff.
    GrantRandomBuff,
}

/// Per-round state: counter, phase, omen flags, and submitted actions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    /// Round counter, starting at 1 for the first round.
    pub round: u32,
    pub phase: BattlePhase,
    /// Set by [`Omen::BoostNoneType`]; read by the host when pricing
    /// None-type cards, cleared when the next round begins.
    pub none_boost: bool,
    /// Actions submitted during Planning, consumed by round resolution.
    pub pending: Vec<ActionDescriptor>,
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            round: 0,
            phase: BattlePhase::Preparation,
            none_boost: false,
            pending: Vec::new(),
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
