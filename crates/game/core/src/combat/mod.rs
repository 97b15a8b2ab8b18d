//! Damage resolution: attacker buffs, elemental reactions, and the hit
//! pipeline that composes them with mitigation and armor.

pub mod damage;
pub mod pipeline;
pub mod reaction;

pub use reaction::ReactionKind;
