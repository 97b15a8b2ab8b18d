//! Preparation-phase omens.
//!
//! Each round opens with one omen draw. Four outcomes touch combat state and
//! are applied here; the two card outcomes only surface an event for the
//! host's deck layer, which owns drawing.

use strum::IntoEnumIterator;

use super::{CombatEngine, EngineError};
use crate::combat::pipeline;
use crate::env::{CombatEnv, RollCtx, roll_context};
use crate::events::CombatEvent;
use crate::state::{BattlePhase, CharacterId, Element, Omen, Polarity, StatusKind};
use crate::status;

/// Buffs eligible for [`Omen::GrantRandomBuff`].
const OMEN_BUFFS: [StatusKind; 3] = [
    StatusKind::Strength,
    StatusKind::Fortify,
    StatusKind::Regeneration,
];

impl CombatEngine<'_> {
    /// Draws this round's omen. Consumes one RNG event.
    pub fn roll_omen(&mut self, env: &CombatEnv) -> Result<Omen, EngineError> {
        self.expect_phase(BattlePhase::Preparation)?;
        let rolls = self.next_rolls(env);
        let count = Omen::iter().count();
        let pick = rolls.pick(CharacterId::PLAYER, roll_context::OMEN, count);
        Ok(Omen::iter().nth(pick).unwrap_or(Omen::DrawCard))
    }

    /// Applies an omen's combat effect and reports what happened.
    ///
    /// Split from [`Self::roll_omen`] so hosts can reveal the omen before its
    /// effect lands.
    pub fn apply_omen(
        &mut self,
        env: &CombatEnv,
        omen: Omen,
    ) -> Result<Vec<CombatEvent>, EngineError> {
        self.expect_phase(BattlePhase::Preparation)?;
        let mut events = vec![CombatEvent::OmenApplied { omen }];

        match omen {
            // Deck effects live host-side; the event is the whole story here.
            Omen::DrawCard | Omen::GrantTemporaryCard => {}
            Omen::BoostNoneType => {
                self.state.round.none_boost = true;
            }
            Omen::ApplyRandomElement => {
                let rolls = self.next_rolls(env);
                for id in self.state.living_on_side(Polarity::Enemy) {
                    let Some(enemy) = self.state.character_mut(id) else {
                        continue;
                    };
                    if enemy.statuses.residue().is_some() {
                        continue;
                    }
                    let pick = rolls.pick(id, roll_context::ELEMENT_PICK, Element::ELEMENTAL.len());
                    if let Some(residue) = StatusKind::residue_of(Element::ELEMENTAL[pick]) {
                        status::grant(env, enemy, residue, 1, &mut events);
                    }
                }
            }
            Omen::ElementalBarrage => {
                let rolls = self.next_rolls(env);
                let pick = rolls.pick(
                    CharacterId::PLAYER,
                    roll_context::ELEMENT_PICK,
                    Element::ELEMENTAL.len(),
                );
                let element = Element::ELEMENTAL[pick];
                for id in self.state.living_on_side(Polarity::Enemy) {
                    let Some(enemy) = self.state.character_mut(id) else {
                        continue;
                    };
                    pipeline::apply_plain_hit(enemy, 2, element, &mut events);
                }
                self.finish_if_over(&mut events);
            }
            Omen::GrantRandomBuff => {
                let rolls = self.next_rolls(env);
                let pick = rolls.pick(CharacterId::PLAYER, roll_context::BUFF_PICK, OMEN_BUFFS.len());
                let player = self.state.player().map(|p| p.id);
                if let Some(id) = player
                    && let Some(player) = self.state.character_mut(id)
                {
                    status::grant(env, player, OMEN_BUFFS[pick], 1, &mut events);
                }
            }
        }
        Ok(events)
    }

    /// One RNG draw: captures the current nonce and advances it.
    pub(super) fn next_rolls<'e>(&mut self, env: &CombatEnv<'e>) -> RollCtx<'e> {
        let rolls = RollCtx::new(env.rng_opt(), self.state.seed, self.state.nonce);
        self.state.nonce += 1;
        rolls
    }
}
