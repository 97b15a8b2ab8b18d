//! Authoritative battle state representation.
//!
//! This module owns the data structures that describe combatants, statuses,
//! and round bookkeeping. Hosts clone or query this state but mutate it
//! exclusively through [`crate::engine::CombatEngine`].

pub mod character;
pub mod common;
pub mod status;
pub mod turn;

pub use character::CharacterState;
pub use common::{CharacterId, Element, MonsterId, Polarity};
pub use status::{NO_COUNTDOWN, StatusInstance, StatusKind, StatusSet};
pub use turn::{BattleOutcome, BattlePhase, Omen, RoundState};

/// Canonical snapshot of a battle in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// RNG seed fixed at battle start; combined with `nonce` to derive a
    /// unique seed for every random event.
    pub seed: u64,

    /// Random-event counter, bumped once per draw. Never reset.
    pub nonce: u64,

    /// Round counter, phase, and pending submissions.
    pub round: RoundState,

    /// Full roster, player and enemies alike. Never shrinks mid-battle.
    characters: Vec<CharacterState>,
}

impl BattleState {
    /// Creates a battle from an initial roster and RNG seed.
    pub fn new(characters: Vec<CharacterState>, seed: u64) -> Self {
        Self {
            seed,
            nonce: 0,
            round: RoundState::new(),
            characters,
        }
    }

    pub fn character(&self, id: CharacterId) -> Option<&CharacterState> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub(crate) fn character_mut(&mut self, id: CharacterId) -> Option<&mut CharacterState> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn characters(&self) -> &[CharacterState] {
        &self.characters
    }

    /// The first living player-polarity combatant.
    pub fn player(&self) -> Option<&CharacterState> {
        self.characters
            .iter()
            .find(|c| c.polarity == Polarity::Player)
    }

    /// Ids of living combatants on the given side.
    pub fn living_on_side(&self, polarity: Polarity) -> Vec<CharacterId> {
        self.characters
            .iter()
            .filter(|c| c.polarity == polarity && c.is_alive())
            .map(|c| c.id)
            .collect()
    }

    /// Battle-end condition: the player is dead, or every enemy is.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        let player_alive = self
            .characters
            .iter()
            .any(|c| c.polarity == Polarity::Player && c.is_alive());
        if !player_alive {
            return Some(BattleOutcome::Defeat);
        }
        let any_enemy_alive = self
            .characters
            .iter()
            .any(|c| c.polarity == Polarity::Enemy && c.is_alive());
        if !any_enemy_alive {
            return Some(BattleOutcome::Victory);
        }
        None
    }
}
