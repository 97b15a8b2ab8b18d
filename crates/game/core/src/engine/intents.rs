//! Enemy intent planning.
//!
//! During Planning the engine turns each living enemy's monster pattern into
//! submitted [`ActionDescriptor`]s: a one-shot opening skill on the monster's
//! first activation, then `actions_per_turn` picks per round, cyclic or
//! RNG-driven. Enemies without a catalog entry or configured skills simply
//! contribute nothing.

use super::{CombatEngine, EngineError};
use crate::action::ActionDescriptor;
use crate::env::{CombatEnv, roll_context};
use crate::state::{BattlePhase, Polarity};

impl CombatEngine<'_> {
    /// Builds and submits this round's enemy actions from the monster
    /// catalog. Call after the host's own submissions, before resolving.
    pub fn plan_enemy_actions(&mut self, env: &CombatEnv) -> Result<(), EngineError> {
        self.expect_phase(BattlePhase::Planning)?;
        let monsters = match env.monsters() {
            Ok(oracle) => oracle,
            Err(error) => {
                tracing::warn!(%error, "enemy planning skipped");
                return Ok(());
            }
        };
        let Some(target) = self.state.living_on_side(Polarity::Player).first().copied() else {
            return Ok(());
        };

        for id in self.state.living_on_side(Polarity::Enemy) {
            let Some((monster, opener_used, cursor)) = self
                .state
                .character(id)
                .and_then(|c| c.monster.map(|m| (m, c.opener_used, c.skill_cursor)))
            else {
                continue;
            };
            let skills = monsters.skills(monster);
            if skills.is_empty() {
                tracing::debug!(enemy = id.0, "monster has no skills configured");
                continue;
            }
            let pattern = monsters.action_pattern(monster).unwrap_or_default();

            let mut cursor = cursor;
            let mut picks = Vec::new();
            if !opener_used
                && let Some(opener) = pattern.opener
            {
                if opener < skills.len() {
                    picks.push(opener);
                } else {
                    tracing::warn!(enemy = id.0, opener, "opener index out of range");
                }
            }
            if picks.is_empty() {
                for _ in 0..pattern.actions_per_turn {
                    let index = if pattern.random_order {
                        let rolls = self.next_rolls(env);
                        rolls.pick(id, roll_context::SKILL_PICK, skills.len())
                    } else {
                        let index = cursor % skills.len();
                        cursor += 1;
                        index
                    };
                    picks.push(index);
                }
            }

            for &index in &picks {
                let Some(skill) = skills.get(index) else {
                    continue;
                };
                self.state.round.pending.push(ActionDescriptor {
                    actor: id,
                    polarity: Polarity::Enemy,
                    speed: skill.speed,
                    action_type: skill.action_type,
                    payload: skill.payload,
                    target,
                });
            }
            if let Some(enemy) = self.state.character_mut(id) {
                enemy.opener_used = true;
                enemy.skill_cursor = cursor;
            }
        }
        Ok(())
    }
}
