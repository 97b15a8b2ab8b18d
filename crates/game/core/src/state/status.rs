//! Status effect state for combatants.
//!
//! A combatant carries at most one [`StatusInstance`] per kind; granting an
//! already-present kind merges stacks under the kind's catalog attributes.
//! Lifetimes follow two independent countdowns: `stacks` (depleted by decay
//! rules or consumption) and `duration` (a per-round countdown, `-1` when the
//! kind has none). An instance is swept once either reaches zero.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::env::StatusAttributes;
use crate::state::Element;

/// Sentinel for instances whose expiry is driven purely by stack depletion.
pub const NO_COUNTDOWN: i32 = -1;

/// Every status a combatant can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatusKind {
    // ========================================================================
    // Elemental residues (at most one per combatant)
    // ========================================================================
    FireResidue,
    WaterResidue,
    EarthResidue,
    AirResidue,

    // ========================================================================
    // Buffs
    // ========================================================================
    /// Flat outgoing-damage bonus per stack. Does not decay.
    Strength,

    /// Flat outgoing-damage bonus per stack, cleared at end of turn.
    TempStrength,

    /// Armor gain multiplied by 1.25 per stack.
    Fortify,

    /// Heals its stack count at end of turn, then sheds a stack.
    Regeneration,

    /// Incoming damage reduced by 25%; blocks new elemental residues.
    Sturdy,

    /// Negates the next damaging hit entirely, then is consumed.
    Stealth,

    // ========================================================================
    // Debuffs
    // ========================================================================
    /// Outgoing damage reduced by 25%.
    Weak,

    /// Armor gain reduced by 25%.
    Fragile,

    /// Deals its stack count as direct health loss at end of turn; reduces
    /// healing received by 25%.
    Poison,

    /// Cannot act this round.
    Frozen,

    /// Each action has a 50% chance to lose its damage component.
    Miss,

    /// Next hit is amplified (x2 physical, x1.5 elemental), then consumed.
    Vulnerable,

    /// Explodes when its countdown ends; elemental hits shorten the fuse.
    Bomb,
}

impl StatusKind {
    /// Residue kind laid by an elemental hit.
    pub fn residue_of(element: Element) -> Option<StatusKind> {
        match element {
            Element::Fire => Some(StatusKind::FireResidue),
            Element::Water => Some(StatusKind::WaterResidue),
            Element::Earth => Some(StatusKind::EarthResidue),
            Element::Air => Some(StatusKind::AirResidue),
            Element::Physical | Element::Chaos => None,
        }
    }

    /// The element this residue kind marks, if it is a residue.
    pub fn residue_element(self) -> Option<Element> {
        match self {
            StatusKind::FireResidue => Some(Element::Fire),
            StatusKind::WaterResidue => Some(Element::Water),
            StatusKind::EarthResidue => Some(Element::Earth),
            StatusKind::AirResidue => Some(Element::Air),
            _ => None,
        }
    }

    pub fn is_residue(self) -> bool {
        self.residue_element().is_some()
    }

    /// Debuffs eligible for random cleansing (the Water x Air ally reaction).
    pub const DEBUFFS: [StatusKind; 7] = [
        StatusKind::Weak,
        StatusKind::Fragile,
        StatusKind::Poison,
        StatusKind::Frozen,
        StatusKind::Miss,
        StatusKind::Vulnerable,
        StatusKind::Bomb,
    ];

    /// Round countdown assigned when the kind is granted without an explicit
    /// duration. Most kinds expire through stack depletion instead.
    pub fn default_duration(self) -> i32 {
        match self {
            StatusKind::Miss | StatusKind::Sturdy | StatusKind::Vulnerable | StatusKind::Stealth => {
                1
            }
            StatusKind::Bomb => 3,
            _ => NO_COUNTDOWN,
        }
    }
}

/// One active status on a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusInstance {
    pub kind: StatusKind,
    pub stacks: u32,
    /// Rounds until the kind's countdown trigger fires; [`NO_COUNTDOWN`] when
    /// expiry is driven purely by stacks.
    pub duration: i32,
}

impl StatusInstance {
    pub fn new(kind: StatusKind, stacks: u32, duration: i32, attrs: &StatusAttributes) -> Self {
        let stacks = if attrs.stackable {
            stacks.clamp(1, attrs.max_stacks)
        } else {
            1
        };
        Self {
            kind,
            stacks,
            duration,
        }
    }

    /// Merges additional stacks under the catalog attributes. Non-stackable
    /// kinds are pinned at a single stack; duration is left untouched. The
    /// addition saturates, so oversized requests clamp instead of panicking.
    pub fn add_stacks(&mut self, amount: u32, attrs: &StatusAttributes) {
        if !attrs.stackable {
            self.stacks = 1;
            return;
        }
        self.stacks = self.stacks.saturating_add(amount).clamp(1, attrs.max_stacks);
    }

    pub fn shed_stacks(&mut self, amount: u32) {
        self.stacks = self.stacks.saturating_sub(amount);
    }

    pub fn expire(&mut self) {
        self.stacks = 0;
    }

    /// Counts the round countdown down by one; inert at zero or below.
    pub fn tick_duration(&mut self) {
        if self.duration > 0 {
            self.duration -= 1;
        }
    }

    pub fn should_be_removed(&self) -> bool {
        self.stacks == 0 || self.duration == 0
    }
}

/// Bounded set of active statuses, at most one instance per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusSet {
    effects: ArrayVec<StatusInstance, { CombatConfig::MAX_STATUS_EFFECTS }>,
}

impl StatusSet {
    pub fn empty() -> Self {
        Self {
            effects: ArrayVec::new(),
        }
    }

    pub fn get(&self, kind: StatusKind) -> Option<&StatusInstance> {
        self.effects.iter().find(|e| e.kind == kind)
    }

    pub fn get_mut(&mut self, kind: StatusKind) -> Option<&mut StatusInstance> {
        self.effects.iter_mut().find(|e| e.kind == kind)
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.get(kind).is_some()
    }

    /// Stack count for a kind, zero when absent.
    pub fn stacks(&self, kind: StatusKind) -> u32 {
        self.get(kind).map_or(0, |e| e.stacks)
    }

    /// The single elemental residue currently held, if any.
    pub fn residue(&self) -> Option<&StatusInstance> {
        self.effects.iter().find(|e| e.kind.is_residue())
    }

    /// Inserts a new instance. Silently dropped when the set is full.
    pub fn insert(&mut self, instance: StatusInstance) {
        if !self.effects.is_full() {
            self.effects.push(instance);
        }
    }

    /// Removes every instance of `kind`. Returns true if one was present.
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let before = self.effects.len();
        self.effects.retain(|e| e.kind != kind);
        self.effects.len() != before
    }

    /// Drops every instance whose stacks or countdown reached zero, returning
    /// the removed kinds in instance order.
    pub fn sweep_expired(&mut self) -> Vec<StatusKind> {
        let removed: Vec<StatusKind> = self
            .effects
            .iter()
            .filter(|e| e.should_be_removed())
            .map(|e| e.kind)
            .collect();
        self.effects.retain(|e| !e.should_be_removed());
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &StatusInstance> {
        self.effects.iter()
    }

    /// Active kinds in instance order. Snapshot for iterate-while-mutating.
    pub fn kinds(&self) -> Vec<StatusKind> {
        self.effects.iter().map(|e| e.kind).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
