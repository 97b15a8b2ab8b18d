//! Data-driven battle content and loaders.
//!
//! This crate houses the static battle catalogs and provides loaders for RON
//! data files:
//! - Status attributes (stacking rules per status kind)
//! - Card specs (speed, type, class, effect payload)
//! - Monster definitions (base stats, skills, action patterns)
//!
//! The loaded catalogs implement combat-core's oracle traits
//! ([`combat_core::StatusOracle`], [`combat_core::MonsterOracle`]) and never
//! appear in battle state. [`ContentFactory`] builds the initial
//! [`combat_core::BattleState`] from a monster roster.

pub mod loaders;

pub use loaders::{
    CardCatalog, CardClass, CardSpec, ContentFactory, MonsterCatalog, MonsterDef, StatusCatalog,
    build_battle,
};
