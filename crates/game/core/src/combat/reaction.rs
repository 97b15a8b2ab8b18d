//! Elemental residues and the reaction matrix.
//!
//! The first elemental hit on a clean target lays a 1-stack residue; a hit of
//! the same element refreshes it; a differing element consumes the residue
//! and fires one of six pair reactions. Each pair has two outcomes, picked by
//! the target's polarity: reactions on enemies punish, reactions on the
//! player's side protect. Physical and Chaos hits never interact with
//! residues.

use crate::config::CombatConfig;
use crate::env::{CombatEnv, RollCtx, roll_context};
use crate::events::CombatEvent;
use crate::state::{CharacterState, Element, Polarity, StatusKind};
use crate::status;

/// The twelve reaction outcomes, one per element pair and target polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReactionKind {
    /// Fire x Water on an enemy: plants a Bomb.
    SteamBurst,
    /// Fire x Water on an ally: grants Stealth.
    MistVeil,
    /// Fire x Earth on an enemy: grants Vulnerable.
    Vitrify,
    /// Fire x Earth on an ally: grants Fortify and armor.
    MoltenArmor,
    /// Fire x Air on an enemy: amplifies the hit and grants Weak.
    Deflagration,
    /// Fire x Air on an ally: singes for 1 and grants Strength.
    FlameWind,
    /// Water x Earth on an enemy: grants Poison.
    Mire,
    /// Water x Earth on an ally: grants Regeneration.
    Nourish,
    /// Water x Air on an enemy: 30% chance to Freeze.
    Frost,
    /// Water x Air on an ally: cleanses one random debuff and heals.
    Purify,
    /// Earth x Air on an enemy: grants Miss.
    DustStorm,
    /// Earth x Air on an ally: grants Sturdy.
    StoneSkin,
}

impl ReactionKind {
    /// Looks up the reaction for an unordered element pair against a target
    /// side. `None` when the elements match or either is non-elemental.
    pub fn classify(existing: Element, incoming: Element, target: Polarity) -> Option<ReactionKind> {
        use Element::*;
        let pair = |a: Element, b: Element| {
            (existing == a && incoming == b) || (existing == b && incoming == a)
        };
        let kind = match target {
            Polarity::Enemy if pair(Fire, Water) => ReactionKind::SteamBurst,
            Polarity::Player if pair(Fire, Water) => ReactionKind::MistVeil,
            Polarity::Enemy if pair(Fire, Earth) => ReactionKind::Vitrify,
            Polarity::Player if pair(Fire, Earth) => ReactionKind::MoltenArmor,
            Polarity::Enemy if pair(Fire, Air) => ReactionKind::Deflagration,
            Polarity::Player if pair(Fire, Air) => ReactionKind::FlameWind,
            Polarity::Enemy if pair(Water, Earth) => ReactionKind::Mire,
            Polarity::Player if pair(Water, Earth) => ReactionKind::Nourish,
            Polarity::Enemy if pair(Water, Air) => ReactionKind::Frost,
            Polarity::Player if pair(Water, Air) => ReactionKind::Purify,
            Polarity::Enemy if pair(Earth, Air) => ReactionKind::DustStorm,
            Polarity::Player if pair(Earth, Air) => ReactionKind::StoneSkin,
            _ => return None,
        };
        Some(kind)
    }
}

/// Resolves residues and reactions for one elemental hit.
///
/// May amplify `damage` (Deflagration) and grants statuses through the
/// status engine, so Sturdy blocks residue re-application transitively.
/// Returns true when a reaction fired; laying or refreshing a residue
/// returns false.
pub fn resolve(
    env: &CombatEnv,
    rolls: &RollCtx,
    target: &mut CharacterState,
    element: Element,
    damage: &mut u32,
    events: &mut Vec<CombatEvent>,
) -> bool {
    if !element.is_elemental() {
        return false;
    }

    let existing = match target.statuses.residue().map(|r| r.kind) {
        None => {
            if let Some(residue) = StatusKind::residue_of(element) {
                status::grant(env, target, residue, 1, events);
            }
            return false;
        }
        Some(kind) => kind,
    };
    // Residue kinds always carry an element.
    let Some(existing_element) = existing.residue_element() else {
        return false;
    };
    if existing_element == element {
        if let Some(residue) = StatusKind::residue_of(element) {
            status::grant(env, target, residue, 1, events);
        }
        return false;
    }

    let Some(kind) = ReactionKind::classify(existing_element, element, target.polarity) else {
        return false;
    };
    events.push(CombatEvent::ReactionTriggered {
        reaction: kind,
        target: target.id,
    });
    apply(env, rolls, kind, target, damage, events);

    // The consumed residue goes away regardless of what the reaction did.
    if target.statuses.remove(existing) {
        events.push(CombatEvent::StatusRemoved {
            target: target.id,
            kind: existing,
        });
    }
    true
}

fn apply(
    env: &CombatEnv,
    rolls: &RollCtx,
    kind: ReactionKind,
    target: &mut CharacterState,
    damage: &mut u32,
    events: &mut Vec<CombatEvent>,
) {
    match kind {
        ReactionKind::SteamBurst => {
            status::grant_with_duration(env, target, StatusKind::Bomb, 1, 3, events);
        }
        ReactionKind::MistVeil => {
            status::grant_with_duration(env, target, StatusKind::Stealth, 1, 1, events);
        }
        ReactionKind::Vitrify => {
            status::grant_with_duration(env, target, StatusKind::Vulnerable, 1, 1, events);
        }
        ReactionKind::MoltenArmor => {
            status::grant(env, target, StatusKind::Fortify, 2, events);
            let gained = target.gain_armor(4);
            events.push(CombatEvent::ArmorGained {
                target: target.id,
                amount: gained,
            });
        }
        ReactionKind::Deflagration => {
            *damage = damage.saturating_mul(3).div_ceil(2);
            status::grant(env, target, StatusKind::Weak, 1, events);
        }
        ReactionKind::FlameWind => {
            let lost = target.take_direct_damage(1);
            events.push(CombatEvent::DamageDealt {
                attacker: None,
                target: target.id,
                amount: lost,
                element: Element::Fire,
                armor_absorbed: 0,
            });
            if !target.is_alive() {
                events.push(CombatEvent::Died { target: target.id });
            }
            status::grant(env, target, StatusKind::Strength, 3, events);
        }
        ReactionKind::Mire => {
            status::grant(env, target, StatusKind::Poison, 6, events);
        }
        ReactionKind::Nourish => {
            status::grant(env, target, StatusKind::Regeneration, 5, events);
        }
        ReactionKind::Frost => {
            if rolls.percent(target.id, roll_context::FREEZE) <= CombatConfig::FREEZE_CHANCE {
                status::grant(env, target, StatusKind::Frozen, 1, events);
            }
        }
        ReactionKind::Purify => {
            let present: Vec<StatusKind> = StatusKind::DEBUFFS
                .into_iter()
                .filter(|&k| target.statuses.has(k))
                .collect();
            if !present.is_empty() {
                let pick = rolls.pick(target.id, roll_context::DEBUFF_PICK, present.len());
                status::remove(target, present[pick], events);
            }
            let healed = target.heal(4);
            events.push(CombatEvent::Healed {
                target: target.id,
                amount: healed,
            });
        }
        ReactionKind::DustStorm => {
            status::grant(env, target, StatusKind::Miss, 1, events);
        }
        ReactionKind::StoneSkin => {
            status::grant(env, target, StatusKind::Sturdy, 1, events);
        }
    }
}
