//! The per-hit damage pipeline.
//!
//! A hit arrives here with the attacker's buff pass already applied (see
//! [`super::damage::attack_damage`]) and flows through a fixed order:
//! Stealth negation, elemental reaction, Bomb fuse tick, target mitigation,
//! armor-then-health, one-shot Vulnerable consumption, death check.

use crate::env::{CombatEnv, RollCtx};
use crate::events::CombatEvent;
use crate::state::{CharacterId, CharacterState, Element, StatusKind};
use crate::status;

/// Applies one damaging hit to a target.
///
/// `attacker` is carried for event attribution only; `None` marks sourceless
/// damage. The amount passed in is post-buff, pre-mitigation.
pub fn apply_hit(
    env: &CombatEnv,
    rolls: &RollCtx,
    attacker: Option<CharacterId>,
    target: &mut CharacterState,
    damage: u32,
    element: Element,
    events: &mut Vec<CombatEvent>,
) {
    // Stealth negates the whole hit before anything else runs: no residue is
    // laid, no reaction fires, the Bomb fuse does not tick.
    if target.statuses.has(StatusKind::Stealth) {
        status::remove(target, StatusKind::Stealth, events);
        events.push(CombatEvent::StealthNegated { target: target.id });
        return;
    }

    let mut damage = damage;
    super::reaction::resolve(env, rolls, target, element, &mut damage, events);

    // Elemental hits shorten a planted Bomb's fuse. A fuse that reaches zero
    // here detonates at the next end-of-turn decay.
    if element != Element::Physical
        && let Some(bomb) = target.statuses.get_mut(StatusKind::Bomb)
    {
        bomb.tick_duration();
    }

    land_hit(attacker, target, damage, element, events);
}

/// Applies mitigated damage with no attacker pass, reaction, or fuse tick.
/// Used for sourceless hits such as preparation omens.
pub fn apply_plain_hit(
    target: &mut CharacterState,
    damage: u32,
    element: Element,
    events: &mut Vec<CombatEvent>,
) {
    land_hit(None, target, damage, element, events);
}

fn land_hit(
    attacker: Option<CharacterId>,
    target: &mut CharacterState,
    damage: u32,
    element: Element,
    events: &mut Vec<CombatEvent>,
) {
    let mitigated = target.mitigate(damage, element);
    let had_vulnerable = target.statuses.has(StatusKind::Vulnerable);
    let (armor_absorbed, _health_lost) = target.absorb_hit(mitigated);
    events.push(CombatEvent::DamageDealt {
        attacker,
        target: target.id,
        amount: mitigated,
        element,
        armor_absorbed,
    });

    // Vulnerable is spent by the first hit it amplifies, whatever the element.
    if mitigated > 0 && had_vulnerable {
        status::remove(target, StatusKind::Vulnerable, events);
    }

    if !target.is_alive() {
        events.push(CombatEvent::Died { target: target.id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Polarity;

    fn target() -> CharacterState {
        CharacterState::new(CharacterId(1), Polarity::Enemy, 30, 0)
    }

    fn hit(ch: &mut CharacterState, damage: u32, element: Element) -> Vec<CombatEvent> {
        let env = CombatEnv::empty();
        let rolls = RollCtx::new(None, 0, 0);
        let mut events = Vec::new();
        apply_hit(&env, &rolls, None, ch, damage, element, &mut events);
        events
    }

    #[test]
    fn armor_absorbs_before_health() {
        let mut ch = target();
        ch.armor = 5;
        let events = hit(&mut ch, 8, Element::Physical);
        assert_eq!(ch.armor, 0);
        assert_eq!(ch.hp, 27);
        assert!(events.contains(&CombatEvent::DamageDealt {
            attacker: None,
            target: ch.id,
            amount: 8,
            element: Element::Physical,
            armor_absorbed: 5,
        }));
    }

    #[test]
    fn stealth_negates_one_hit_entirely() {
        let env = CombatEnv::empty();
        let mut ch = target();
        let mut events = Vec::new();
        status::grant(&env, &mut ch, StatusKind::Stealth, 1, &mut events);

        let events = hit(&mut ch, 10, Element::Fire);
        assert_eq!(ch.hp, 30);
        assert!(!ch.statuses.has(StatusKind::Stealth));
        // Not even a residue is laid on a negated hit.
        assert!(ch.statuses.residue().is_none());
        assert!(events.contains(&CombatEvent::StealthNegated { target: ch.id }));

        // The next hit lands normally.
        hit(&mut ch, 10, Element::Fire);
        assert_eq!(ch.hp, 20);
    }

    #[test]
    fn vulnerable_amplifies_once_then_is_consumed() {
        let env = CombatEnv::empty();
        let mut ch = target();
        let mut events = Vec::new();
        status::grant(&env, &mut ch, StatusKind::Vulnerable, 1, &mut events);

        hit(&mut ch, 3, Element::Physical);
        assert_eq!(ch.hp, 24);
        assert!(!ch.statuses.has(StatusKind::Vulnerable));

        hit(&mut ch, 3, Element::Physical);
        assert_eq!(ch.hp, 21);
    }

    #[test]
    fn elemental_hits_tick_the_bomb_fuse() {
        let env = CombatEnv::empty();
        let mut ch = target();
        let mut events = Vec::new();
        status::grant(&env, &mut ch, StatusKind::Bomb, 1, &mut events);
        assert_eq!(ch.statuses.get(StatusKind::Bomb).unwrap().duration, 3);

        hit(&mut ch, 2, Element::Chaos);
        assert_eq!(ch.statuses.get(StatusKind::Bomb).unwrap().duration, 2);

        // Physical hits leave the fuse alone.
        hit(&mut ch, 2, Element::Physical);
        assert_eq!(ch.statuses.get(StatusKind::Bomb).unwrap().duration, 2);
    }

    #[test]
    fn lethal_hit_emits_death() {
        let mut ch = target();
        ch.hp = 3;
        let events = hit(&mut ch, 10, Element::Physical);
        assert!(!ch.is_alive());
        assert!(events.contains(&CombatEvent::Died { target: ch.id }));
    }

    #[test]
    fn reaction_amplification_feeds_the_hit() {
        let mut ch = target();
        hit(&mut ch, 2, Element::Air);
        assert_eq!(ch.hp, 28);

        // Fire on the Air residue: Deflagration, ceil(4 * 1.5) = 6.
        let events = hit(&mut ch, 4, Element::Fire);
        assert_eq!(ch.hp, 22);
        assert!(events.iter().any(|e| matches!(
            e,
            CombatEvent::ReactionTriggered {
                reaction: crate::combat::ReactionKind::Deflagration,
                ..
            }
        )));
        assert_eq!(ch.statuses.stacks(StatusKind::Weak), 1);
    }
}
