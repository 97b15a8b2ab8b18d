//! Attacker-side damage adjustment.

use crate::state::{StatusKind, StatusSet};

/// Applies the attacker's buff pass to a base damage value: +1 per Strength
/// and TempStrength stack, then x0.75 (floored) under Weak. Never less than 1.
pub fn attack_damage(attacker: &StatusSet, base: u32) -> u32 {
    let mut damage = base
        .saturating_add(attacker.stacks(StatusKind::Strength))
        .saturating_add(attacker.stacks(StatusKind::TempStrength));
    if attacker.has(StatusKind::Weak) {
        damage = damage.saturating_mul(3) / 4;
    }
    damage.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StatusAttributes;
    use crate::state::status::{NO_COUNTDOWN, StatusInstance};

    fn statuses(entries: &[(StatusKind, u32)]) -> StatusSet {
        let attrs = StatusAttributes {
            stackable: true,
            max_stacks: 99,
        };
        let mut set = StatusSet::empty();
        for &(kind, stacks) in entries {
            set.insert(StatusInstance::new(kind, stacks, NO_COUNTDOWN, &attrs));
        }
        set
    }

    #[test]
    fn strength_stacks_add_flat_damage() {
        let set = statuses(&[(StatusKind::Strength, 2), (StatusKind::TempStrength, 1)]);
        assert_eq!(attack_damage(&set, 5), 8);
    }

    #[test]
    fn weak_reduces_after_buffs() {
        // (6 + 2) * 0.75 floored = 6
        let set = statuses(&[(StatusKind::Strength, 2), (StatusKind::Weak, 1)]);
        assert_eq!(attack_damage(&set, 6), 6);
    }

    #[test]
    fn damage_never_drops_below_one() {
        let set = statuses(&[(StatusKind::Weak, 1)]);
        assert_eq!(attack_damage(&set, 1), 1);
        assert_eq!(attack_damage(&statuses(&[]), 0), 1);
    }
}
