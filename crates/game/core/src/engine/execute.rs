//! Round resolution: queue execution, deflects, and end-of-turn decay.

use super::{CombatEngine, EngineError};
use crate::action::{ActionDescriptor, DeflectOutcome, RoundQueue};
use crate::combat::{damage, pipeline};
use crate::config::CombatConfig;
use crate::env::{CombatEnv, roll_context};
use crate::events::{CombatEvent, SkipReason};
use crate::state::{BattlePhase, CharacterId, StatusKind};
use crate::status;

impl CombatEngine<'_> {
    /// Resolves the round: sorts submissions into the queue and executes
    /// them, handling Perfect Deflects at the head of the queue.
    ///
    /// The battle-end condition is checked after every executed action;
    /// remaining queue entries are abandoned once it fires. Otherwise the
    /// battle lands in Resolution, ready for [`Self::end_of_turn_decay`].
    pub fn resolve_round(&mut self, env: &CombatEnv) -> Result<Vec<CombatEvent>, EngineError> {
        self.expect_phase(BattlePhase::Planning)?;
        self.state.round.phase = BattlePhase::Combat;

        let submitted = std::mem::take(&mut self.state.round.pending);
        let mut queue = RoundQueue::build(submitted);
        let mut events = Vec::new();

        while !queue.is_empty() {
            match queue.check_front_deflect() {
                Some(DeflectOutcome::EarlierWins) => {
                    if let (Some(winner), Some(loser)) = (
                        queue.front().map(|a| a.actor),
                        queue.second().map(|a| a.actor),
                    ) {
                        events.push(CombatEvent::Deflected { winner, loser });
                    }
                    queue.remove_second();
                }
                Some(DeflectOutcome::LaterWins) => {
                    if let (Some(loser), Some(winner)) = (
                        queue.front().map(|a| a.actor),
                        queue.second().map(|a| a.actor),
                    ) {
                        events.push(CombatEvent::Deflected { winner, loser });
                    }
                    queue.pop_front();
                }
                None => {}
            }

            let Some(action) = queue.pop_front() else {
                break;
            };
            self.execute_action(env, &action, &mut events);
            if self.finish_if_over(&mut events) {
                return Ok(events);
            }
        }

        self.state.round.phase = BattlePhase::Resolution;
        Ok(events)
    }

    /// Executes one action's effect components in fixed order:
    /// damage (single or AoE), heal, armor, status grant.
    fn execute_action(
        &mut self,
        env: &CombatEnv,
        action: &ActionDescriptor,
        events: &mut Vec<CombatEvent>,
    ) {
        let Some(actor) = self.state.character(action.actor) else {
            events.push(CombatEvent::ActionSkipped {
                actor: action.actor,
                reason: SkipReason::Dead,
            });
            return;
        };
        if !actor.is_alive() {
            events.push(CombatEvent::ActionSkipped {
                actor: action.actor,
                reason: SkipReason::Dead,
            });
            return;
        }
        if actor.statuses.has(StatusKind::Frozen) {
            events.push(CombatEvent::ActionSkipped {
                actor: action.actor,
                reason: SkipReason::Frozen,
            });
            return;
        }
        let has_miss = actor.statuses.has(StatusKind::Miss);
        let attack = action
            .payload
            .damage
            .map(|spec| damage::attack_damage(&actor.statuses, spec.amount));

        let rolls = self.next_rolls(env);

        if let (Some(spec), Some(damage)) = (action.payload.damage, attack) {
            if has_miss
                && rolls.percent(action.actor, roll_context::MISS) <= CombatConfig::MISS_CHANCE
            {
                // Only the damage component is lost; the rest still applies.
                events.push(CombatEvent::Missed {
                    attacker: action.actor,
                });
            } else {
                let targets = if spec.aoe {
                    self.state.living_on_side(action.polarity.opposite())
                } else {
                    vec![action.target]
                };
                for id in targets {
                    let Some(target) = self.state.character_mut(id) else {
                        continue;
                    };
                    if !target.is_alive() {
                        continue;
                    }
                    pipeline::apply_hit(
                        env,
                        &rolls,
                        Some(action.actor),
                        target,
                        damage,
                        spec.element,
                        events,
                    );
                }
            }
        }

        if let Some(amount) = action.payload.heal
            && let Some(actor) = self.state.character_mut(action.actor)
        {
            let healed = actor.heal(amount);
            events.push(CombatEvent::Healed {
                target: action.actor,
                amount: healed,
            });
        }

        if let Some(amount) = action.payload.armor
            && let Some(actor) = self.state.character_mut(action.actor)
        {
            let gained = actor.gain_armor(amount);
            events.push(CombatEvent::ArmorGained {
                target: action.actor,
                amount: gained,
            });
        }

        if let Some(grant) = action.payload.status {
            let recipient = if grant.on_self {
                action.actor
            } else {
                action.target
            };
            if let Some(target) = self.state.character_mut(recipient)
                && target.is_alive()
            {
                status::grant(env, target, grant.kind, grant.stacks, events);
            }
        }
    }

    /// Runs end-of-turn status decay for every living combatant, then checks
    /// for battle end. Leaves the battle in Resolution (or a terminal phase).
    pub fn end_of_turn_decay(&mut self) -> Result<Vec<CombatEvent>, EngineError> {
        self.expect_phase(BattlePhase::Resolution)?;
        let mut events = Vec::new();
        let living: Vec<CharacterId> = self
            .state
            .characters()
            .iter()
            .filter(|c| c.is_alive())
            .map(|c| c.id)
            .collect();
        for id in living {
            if let Some(character) = self.state.character_mut(id) {
                status::end_of_turn(character, &mut events);
            }
        }
        self.finish_if_over(&mut events);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionType, DamageSpec, EffectPayload, StatusGrant};
    use crate::env::FixedRng;
    use crate::state::{BattleOutcome, BattleState, CharacterState, Element, Polarity};

    fn battle(enemies: u32) -> BattleState {
        let mut roster = vec![CharacterState::new(
            CharacterId::PLAYER,
            Polarity::Player,
            50,
            0,
        )];
        for i in 0..enemies {
            roster.push(CharacterState::new(CharacterId(i + 1), Polarity::Enemy, 10, 0));
        }
        BattleState::new(roster, 7)
    }

    fn attack(
        actor: CharacterId,
        polarity: Polarity,
        target: CharacterId,
        amount: u32,
        speed: i32,
        action_type: ActionType,
    ) -> ActionDescriptor {
        ActionDescriptor {
            actor,
            polarity,
            speed,
            action_type,
            payload: EffectPayload {
                damage: Some(DamageSpec {
                    amount,
                    element: Element::Physical,
                    aoe: false,
                }),
                ..EffectPayload::default()
            },
            target,
        }
    }

    fn start_planning(engine: &mut CombatEngine) {
        engine.begin_round().unwrap();
        engine.begin_planning().unwrap();
    }

    #[test]
    fn lethal_action_ends_the_round_early() {
        let mut state = battle(1);
        let mut engine = CombatEngine::new(&mut state);
        start_planning(&mut engine);
        engine
            .submit_action(attack(
                CharacterId::PLAYER,
                Polarity::Player,
                CharacterId(1),
                20,
                5,
                ActionType::Normal,
            ))
            .unwrap();

        let env = CombatEnv::empty();
        let events = engine.resolve_round(&env).unwrap();
        assert_eq!(engine.state().round.phase, BattlePhase::Victory);
        assert!(events.contains(&CombatEvent::BattleEnded {
            outcome: BattleOutcome::Victory,
        }));
        assert_eq!(engine.check_battle_end(), Some(BattleOutcome::Victory));
    }

    #[test]
    fn frozen_actor_is_skipped() {
        let mut state = battle(1);
        let env = CombatEnv::empty();
        let mut events = Vec::new();
        status::grant(
            &env,
            state.character_mut(CharacterId(1)).unwrap(),
            StatusKind::Frozen,
            1,
            &mut events,
        );

        let mut engine = CombatEngine::new(&mut state);
        start_planning(&mut engine);
        engine
            .submit_action(attack(
                CharacterId(1),
                Polarity::Enemy,
                CharacterId::PLAYER,
                5,
                5,
                ActionType::Normal,
            ))
            .unwrap();

        let events = engine.resolve_round(&env).unwrap();
        assert_eq!(engine.state().character(CharacterId::PLAYER).unwrap().hp, 50);
        assert!(events.contains(&CombatEvent::ActionSkipped {
            actor: CharacterId(1),
            reason: SkipReason::Frozen,
        }));
    }

    #[test]
    fn deflect_cancels_the_countered_action() {
        // Enemy Strong sorts first; the player's same-speed Swift counters it.
        let mut state = battle(1);
        let mut engine = CombatEngine::new(&mut state);
        start_planning(&mut engine);
        engine
            .submit_action(attack(
                CharacterId(1),
                Polarity::Enemy,
                CharacterId::PLAYER,
                5,
                5,
                ActionType::Strong,
            ))
            .unwrap();
        engine
            .submit_action(attack(
                CharacterId::PLAYER,
                Polarity::Player,
                CharacterId(1),
                3,
                5,
                ActionType::Swift,
            ))
            .unwrap();

        let env = CombatEnv::empty();
        let events = engine.resolve_round(&env).unwrap();
        assert!(events.contains(&CombatEvent::Deflected {
            winner: CharacterId::PLAYER,
            loser: CharacterId(1),
        }));
        // The enemy's attack never landed; the player's did.
        assert_eq!(engine.state().character(CharacterId::PLAYER).unwrap().hp, 50);
        assert_eq!(engine.state().character(CharacterId(1)).unwrap().hp, 7);
    }

    #[test]
    fn miss_suppresses_damage_but_not_the_rest() {
        let mut state = battle(1);
        let env = CombatEnv::empty();
        let mut events = Vec::new();
        status::grant(
            &env,
            state.character_mut(CharacterId::PLAYER).unwrap(),
            StatusKind::Miss,
            1,
            &mut events,
        );

        let mut engine = CombatEngine::new(&mut state);
        start_planning(&mut engine);
        let mut action = attack(
            CharacterId::PLAYER,
            Polarity::Player,
            CharacterId(1),
            5,
            5,
            ActionType::Normal,
        );
        action.payload.armor = Some(3);
        engine.submit_action(action).unwrap();

        // FixedRng(0) rolls 1, under the 50% miss chance.
        let rng = FixedRng(0);
        let env = CombatEnv::new(None, None, Some(&rng));
        let events = engine.resolve_round(&env).unwrap();
        assert!(events.contains(&CombatEvent::Missed {
            attacker: CharacterId::PLAYER,
        }));
        assert_eq!(engine.state().character(CharacterId(1)).unwrap().hp, 10);
        assert_eq!(
            engine.state().character(CharacterId::PLAYER).unwrap().armor,
            3
        );
    }

    #[test]
    fn aoe_damage_hits_every_living_opponent() {
        let mut state = battle(2);
        state.character_mut(CharacterId(2)).unwrap().hp = 0;
        let mut engine = CombatEngine::new(&mut state);
        start_planning(&mut engine);
        engine
            .submit_action(ActionDescriptor {
                actor: CharacterId::PLAYER,
                polarity: Polarity::Player,
                speed: 5,
                action_type: ActionType::Strong,
                payload: EffectPayload {
                    damage: Some(DamageSpec {
                        amount: 4,
                        element: Element::Physical,
                        aoe: true,
                    }),
                    ..EffectPayload::default()
                },
                target: CharacterId(1),
            })
            .unwrap();

        let env = CombatEnv::empty();
        engine.resolve_round(&env).unwrap();
        assert_eq!(engine.state().character(CharacterId(1)).unwrap().hp, 6);
        // Dead enemies are not valid AoE targets.
        assert_eq!(engine.state().character(CharacterId(2)).unwrap().hp, 0);
    }

    #[test]
    fn status_grant_routes_to_self_or_target() {
        let mut state = battle(1);
        let mut engine = CombatEngine::new(&mut state);
        start_planning(&mut engine);
        engine
            .submit_action(ActionDescriptor {
                actor: CharacterId::PLAYER,
                polarity: Polarity::Player,
                speed: 6,
                action_type: ActionType::Normal,
                payload: EffectPayload {
                    status: Some(StatusGrant {
                        kind: StatusKind::Strength,
                        stacks: 2,
                        on_self: true,
                    }),
                    ..EffectPayload::default()
                },
                target: CharacterId(1),
            })
            .unwrap();
        engine
            .submit_action(ActionDescriptor {
                actor: CharacterId::PLAYER,
                polarity: Polarity::Player,
                speed: 5,
                action_type: ActionType::Normal,
                payload: EffectPayload {
                    status: Some(StatusGrant {
                        kind: StatusKind::Weak,
                        stacks: 1,
                        on_self: false,
                    }),
                    ..EffectPayload::default()
                },
                target: CharacterId(1),
            })
            .unwrap();

        let env = CombatEnv::empty();
        engine.resolve_round(&env).unwrap();
        let state = engine.state();
        assert_eq!(
            state
                .character(CharacterId::PLAYER)
                .unwrap()
                .statuses
                .stacks(StatusKind::Strength),
            2
        );
        assert_eq!(
            state
                .character(CharacterId(1))
                .unwrap()
                .statuses
                .stacks(StatusKind::Weak),
            1
        );
    }

    #[test]
    fn decay_runs_for_every_living_combatant_and_can_end_the_battle() {
        let mut state = battle(1);
        let env = CombatEnv::empty();
        let mut events = Vec::new();
        let enemy = state.character_mut(CharacterId(1)).unwrap();
        enemy.hp = 3;
        status::grant(&env, enemy, StatusKind::Poison, 4, &mut events);

        let mut engine = CombatEngine::new(&mut state);
        start_planning(&mut engine);
        engine.resolve_round(&env).unwrap();
        let events = engine.end_of_turn_decay().unwrap();

        assert!(events.contains(&CombatEvent::PoisonTick {
            target: CharacterId(1),
            damage: 3,
        }));
        assert!(events.contains(&CombatEvent::BattleEnded {
            outcome: BattleOutcome::Victory,
        }));
        assert_eq!(engine.state().round.phase, BattlePhase::Victory);
    }

    #[test]
    fn a_full_round_reaches_resolution_and_loops() {
        let mut state = battle(1);
        let mut engine = CombatEngine::new(&mut state);
        start_planning(&mut engine);
        engine
            .submit_action(attack(
                CharacterId::PLAYER,
                Polarity::Player,
                CharacterId(1),
                2,
                5,
                ActionType::Normal,
            ))
            .unwrap();

        let env = CombatEnv::empty();
        engine.resolve_round(&env).unwrap();
        assert_eq!(engine.state().round.phase, BattlePhase::Resolution);
        engine.end_of_turn_decay().unwrap();

        let events = engine.begin_round().unwrap();
        assert_eq!(events, vec![CombatEvent::RoundStarted { round: 2 }]);
    }
}
