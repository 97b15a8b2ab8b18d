//! Status grant, removal, and end-of-turn decay.
//!
//! Granting merges into an existing instance or inserts a fresh one with the
//! kind's default countdown; elemental residues are mutually exclusive and
//! blocked entirely while the target holds Sturdy. Decay runs once per
//! combatant at end of turn, dispatching on the kind's [`DecayRule`], then
//! sweeps every instance whose stacks or countdown reached zero.

use crate::config::CombatConfig;
use crate::env::CombatEnv;
use crate::events::CombatEvent;
use crate::state::status::StatusInstance;
use crate::state::{CharacterState, StatusKind};

// ============================================================================
// Granting and removal
// ============================================================================

/// Grants `stacks` of `kind` with the kind's default countdown.
///
/// Returns false when the grant was blocked (a residue on a Sturdy target).
pub fn grant(
    env: &CombatEnv,
    target: &mut CharacterState,
    kind: StatusKind,
    stacks: u32,
    events: &mut Vec<CombatEvent>,
) -> bool {
    grant_with_duration(env, target, kind, stacks, kind.default_duration(), events)
}

/// Grants `stacks` of `kind` with an explicit countdown.
///
/// Merging into an existing instance adds stacks under the catalog's
/// stacking rules and leaves the countdown untouched.
pub fn grant_with_duration(
    env: &CombatEnv,
    target: &mut CharacterState,
    kind: StatusKind,
    stacks: u32,
    duration: i32,
    events: &mut Vec<CombatEvent>,
) -> bool {
    if kind.is_residue() {
        if target.statuses.has(StatusKind::Sturdy) {
            tracing::debug!(target = target.id.0, %kind, "residue blocked by Sturdy");
            return false;
        }
        // At most one residue per combatant: a new element displaces the old.
        let existing = target.statuses.residue().map(|r| r.kind);
        if let Some(existing) = existing
            && existing != kind
            && target.statuses.remove(existing)
        {
            events.push(CombatEvent::StatusRemoved {
                target: target.id,
                kind: existing,
            });
        }
    }

    let attrs = env.status_attributes(kind);
    match target.statuses.get_mut(kind) {
        Some(instance) => instance.add_stacks(stacks, &attrs),
        None => target
            .statuses
            .insert(StatusInstance::new(kind, stacks, duration, &attrs)),
    }
    events.push(CombatEvent::StatusGranted {
        target: target.id,
        kind,
        stacks,
    });
    true
}

/// Removes every stack of `kind`. Returns true if it was present.
pub fn remove(
    target: &mut CharacterState,
    kind: StatusKind,
    events: &mut Vec<CombatEvent>,
) -> bool {
    if target.statuses.remove(kind) {
        events.push(CombatEvent::StatusRemoved {
            target: target.id,
            kind,
        });
        true
    } else {
        false
    }
}

// ============================================================================
// End-of-turn decay
// ============================================================================

/// How a status kind evolves when a round ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DecayRule {
    /// Never decays; cleared only by explicit removal.
    Persist,
    /// Loses one stack per round.
    ShedStack,
    /// Cleared entirely at end of turn.
    Expire,
    /// Counts the round countdown down; swept when it reaches zero.
    Countdown,
    /// Counts down, then sheds a stack and re-arms for another round while
    /// stacks remain.
    SturdyCountdown,
    /// Heals the holder for its stack count, then sheds a stack.
    RegenTick,
    /// Deals its stack count as direct health loss, then sheds a stack.
    PoisonTick,
    /// Counts down; detonates for max(6, 20% of current health) at zero.
    BombCountdown,
}

fn decay_rule(kind: StatusKind) -> DecayRule {
    match kind {
        StatusKind::Strength => DecayRule::Persist,
        StatusKind::FireResidue
        | StatusKind::WaterResidue
        | StatusKind::EarthResidue
        | StatusKind::AirResidue
        | StatusKind::Weak
        | StatusKind::Fortify
        | StatusKind::Fragile => DecayRule::ShedStack,
        StatusKind::TempStrength | StatusKind::Frozen => DecayRule::Expire,
        StatusKind::Miss | StatusKind::Vulnerable | StatusKind::Stealth => DecayRule::Countdown,
        StatusKind::Sturdy => DecayRule::SturdyCountdown,
        StatusKind::Regeneration => DecayRule::RegenTick,
        StatusKind::Poison => DecayRule::PoisonTick,
        StatusKind::Bomb => DecayRule::BombCountdown,
    }
}

/// Runs end-of-turn decay for one combatant and sweeps expired instances.
///
/// Poison and bomb damage here is direct health loss; armor does not absorb
/// it. The caller checks for deaths and battle end afterwards.
pub fn end_of_turn(target: &mut CharacterState, events: &mut Vec<CombatEvent>) {
    for kind in target.statuses.kinds() {
        match decay_rule(kind) {
            DecayRule::Persist => {}
            DecayRule::ShedStack => {
                if let Some(instance) = target.statuses.get_mut(kind) {
                    instance.shed_stacks(1);
                }
            }
            DecayRule::Expire => {
                if let Some(instance) = target.statuses.get_mut(kind) {
                    instance.expire();
                }
            }
            DecayRule::Countdown => {
                if let Some(instance) = target.statuses.get_mut(kind) {
                    instance.tick_duration();
                }
            }
            DecayRule::SturdyCountdown => {
                if let Some(instance) = target.statuses.get_mut(kind) {
                    instance.tick_duration();
                    if instance.duration == 0 {
                        instance.shed_stacks(1);
                        if instance.stacks > 0 {
                            instance.duration = 1;
                        }
                    }
                }
            }
            DecayRule::RegenTick => {
                let stacks = target.statuses.stacks(kind);
                if stacks > 0 {
                    let healed = target.heal(stacks);
                    events.push(CombatEvent::RegenerationTick {
                        target: target.id,
                        healed,
                    });
                    if let Some(instance) = target.statuses.get_mut(kind) {
                        instance.shed_stacks(1);
                    }
                }
            }
            DecayRule::PoisonTick => {
                let stacks = target.statuses.stacks(kind);
                if stacks > 0 {
                    let damage = target.take_direct_damage(stacks);
                    events.push(CombatEvent::PoisonTick {
                        target: target.id,
                        damage,
                    });
                    if !target.is_alive() {
                        events.push(CombatEvent::Died { target: target.id });
                    }
                    if let Some(instance) = target.statuses.get_mut(kind) {
                        instance.shed_stacks(1);
                    }
                }
            }
            DecayRule::BombCountdown => {
                if let Some(instance) = target.statuses.get_mut(kind) {
                    instance.tick_duration();
                    if instance.duration == 0 {
                        let blast = CombatConfig::BOMB_MIN_DAMAGE.max(target.hp.div_ceil(5));
                        let damage = target.take_direct_damage(blast);
                        events.push(CombatEvent::BombExploded {
                            target: target.id,
                            damage,
                        });
                        if !target.is_alive() {
                            events.push(CombatEvent::Died { target: target.id });
                        }
                    }
                }
            }
        }
    }

    for kind in target.statuses.sweep_expired() {
        events.push(CombatEvent::StatusExpired {
            target: target.id,
            kind,
        });
    }
}
