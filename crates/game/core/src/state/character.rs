//! Combatant state and the clamps a combatant owns.
//!
//! Mitigation, heal reduction, and armor-gain scaling live here because they
//! read only the combatant's own status set. All arithmetic is integer-only
//! so outcomes are identical on every host: x0.75 floors as `* 3 / 4`, x1.25
//! and x1.5 ceil via `div_ceil`. Multiplications saturate so oversized host
//! inputs pin at the numeric ceiling instead of panicking.

use crate::state::status::{StatusKind, StatusSet};
use crate::state::{CharacterId, Element, MonsterId, Polarity};

/// One combatant in the battle roster.
///
/// Created at battle start and never removed; death is `hp == 0`, and dead
/// combatants keep their roster slot so ids stay stable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterState {
    pub id: CharacterId,
    pub polarity: Polarity,
    pub max_hp: u32,
    pub hp: u32,
    /// Unbounded above; absorbs damage before health.
    pub armor: u32,
    pub statuses: StatusSet,

    // === Enemy intent bookkeeping (None for player-polarity combatants) ===
    /// Monster catalog entry driving this combatant's skill selection.
    pub monster: Option<MonsterId>,
    /// Whether the monster's one-shot opening skill has been used.
    pub opener_used: bool,
    /// Cursor into the monster's skill list for cyclic selection.
    pub skill_cursor: usize,
}

impl CharacterState {
    pub fn new(id: CharacterId, polarity: Polarity, max_hp: u32, armor: u32) -> Self {
        Self {
            id,
            polarity,
            max_hp,
            hp: max_hp,
            armor,
            statuses: StatusSet::empty(),
            monster: None,
            opener_used: false,
            skill_cursor: 0,
        }
    }

    pub fn with_monster(mut self, monster: MonsterId) -> Self {
        self.monster = Some(monster);
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Restores health, reduced by 25% (floored, minimum 1) while poisoned.
    /// Returns the health actually gained after the max-hp clamp.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if amount == 0 {
            return 0;
        }
        let amount = if self.statuses.has(StatusKind::Poison) {
            (amount.saturating_mul(3) / 4).max(1)
        } else {
            amount
        };
        let gained = amount.min(self.max_hp - self.hp);
        self.hp += gained;
        gained
    }

    /// Adds armor, scaled up by Fortify (x1.25 per stack, ceiled) and down by
    /// Fragile (x0.75 floored, minimum 1). Returns the armor actually added.
    pub fn gain_armor(&mut self, amount: u32) -> u32 {
        if amount == 0 {
            return 0;
        }
        let mut amount = amount;
        let fortify = self.statuses.stacks(StatusKind::Fortify);
        if fortify > 0 {
            amount = amount.saturating_mul(5).saturating_mul(fortify).div_ceil(4);
        }
        if self.statuses.has(StatusKind::Fragile) {
            amount = (amount.saturating_mul(3) / 4).max(1);
        }
        self.armor = self.armor.saturating_add(amount);
        amount
    }

    /// Applies the combatant's own mitigation to an incoming hit:
    /// Sturdy x0.75 (floored, minimum 1), then Vulnerable x2 for physical or
    /// x1.5 for elemental hits (ceiled). Never returns less than 1.
    pub fn mitigate(&self, damage: u32, element: Element) -> u32 {
        let mut damage = damage;
        if self.statuses.has(StatusKind::Sturdy) {
            damage = (damage.saturating_mul(3) / 4).max(1);
        }
        if self.statuses.has(StatusKind::Vulnerable) {
            damage = match element {
                Element::Physical => damage.saturating_mul(2),
                _ => damage.saturating_mul(3).div_ceil(2),
            };
        }
        damage.max(1)
    }

    /// Routes damage through armor first, then health.
    /// Returns `(armor_absorbed, health_lost)`.
    pub fn absorb_hit(&mut self, damage: u32) -> (u32, u32) {
        let absorbed = self.armor.min(damage);
        self.armor -= absorbed;
        let health_lost = (damage - absorbed).min(self.hp);
        self.hp -= health_lost;
        (absorbed, health_lost)
    }

    /// Direct health loss bypassing armor (poison ticks, bomb blasts).
    /// Returns the health actually lost.
    pub fn take_direct_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.hp);
        self.hp -= lost;
        lost
    }
}
