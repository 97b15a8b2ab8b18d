//! The turn controller.
//!
//! [`CombatEngine`] is the authoritative reducer for [`BattleState`]: hosts
//! read state freely but mutate it only through the engine. A round walks the
//! phases Preparation -> Planning -> Combat -> Resolution and back to
//! Preparation, until a battle-end check lands on Victory or Defeat.
//!
//! The engine is synchronous and never suspends; hosts insert their own
//! pacing between calls. Everything observable that happens while a call runs
//! is returned as [`CombatEvent`]s in emission order.

mod errors;
mod execute;
mod intents;
mod prepare;

pub use errors::EngineError;

use crate::action::ActionDescriptor;
use crate::events::CombatEvent;
use crate::state::{BattleOutcome, BattlePhase, BattleState};

/// Drives a battle through its phases, mutating the borrowed state.
pub struct CombatEngine<'a> {
    state: &'a mut BattleState,
}

impl<'a> CombatEngine<'a> {
    pub fn new(state: &'a mut BattleState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    /// Advances to the next round's Preparation phase.
    ///
    /// Valid before the first round and from Resolution; clears the previous
    /// round's submissions and omen flags.
    pub fn begin_round(&mut self) -> Result<Vec<CombatEvent>, EngineError> {
        self.guard_not_over()?;
        let phase = self.state.round.phase;
        let first_round = self.state.round.round == 0 && phase == BattlePhase::Preparation;
        if !first_round && phase != BattlePhase::Resolution {
            return Err(EngineError::PhaseMismatch {
                expected: BattlePhase::Resolution,
                found: phase,
            });
        }

        self.state.round.round += 1;
        self.state.round.phase = BattlePhase::Preparation;
        self.state.round.none_boost = false;
        self.state.round.pending.clear();

        tracing::debug!(round = self.state.round.round, "round started");
        Ok(vec![CombatEvent::RoundStarted {
            round: self.state.round.round,
        }])
    }

    /// Closes Preparation and opens the round for submissions.
    pub fn begin_planning(&mut self) -> Result<(), EngineError> {
        self.expect_phase(BattlePhase::Preparation)?;
        self.state.round.phase = BattlePhase::Planning;
        Ok(())
    }

    /// Queues one action for this round. Submissions from dead combatants are
    /// dropped silently; unknown ids are a host error.
    pub fn submit_action(&mut self, action: ActionDescriptor) -> Result<(), EngineError> {
        self.expect_phase(BattlePhase::Planning)?;
        let Some(actor) = self.state.character(action.actor) else {
            return Err(EngineError::UnknownCharacter(action.actor));
        };
        if !actor.is_alive() {
            tracing::debug!(actor = action.actor.0, "dropping submission from dead actor");
            return Ok(());
        }
        self.state.round.pending.push(action);
        Ok(())
    }

    /// Battle-end query: `None` while both sides still stand.
    pub fn check_battle_end(&self) -> Option<BattleOutcome> {
        self.state.outcome()
    }

    fn expect_phase(&self, expected: BattlePhase) -> Result<(), EngineError> {
        self.guard_not_over()?;
        let found = self.state.round.phase;
        if found == expected {
            Ok(())
        } else {
            Err(EngineError::PhaseMismatch { expected, found })
        }
    }

    fn guard_not_over(&self) -> Result<(), EngineError> {
        match self.state.round.phase {
            BattlePhase::Victory | BattlePhase::Defeat => Err(EngineError::BattleOver),
            _ => Ok(()),
        }
    }

    /// Moves to the matching terminal phase and emits the closing event when
    /// the battle-end condition holds. Callers stop processing on `true`.
    fn finish_if_over(&mut self, events: &mut Vec<CombatEvent>) -> bool {
        let Some(outcome) = self.state.outcome() else {
            return false;
        };
        self.state.round.phase = match outcome {
            BattleOutcome::Victory => BattlePhase::Victory,
            BattleOutcome::Defeat => BattlePhase::Defeat,
        };
        events.push(CombatEvent::BattleEnded { outcome });
        true
    }
}
