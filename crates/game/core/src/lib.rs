//! Deterministic card-battle combat rules.
//!
//! `combat-core` defines the canonical battle rules (actions, statuses,
//! elemental reactions, the damage pipeline) and exposes pure, synchronous
//! APIs for hosts to drive a battle round by round. All state mutation flows
//! through [`engine::CombatEngine`]; randomness is injected through
//! [`env::RngOracle`] so a fixed seed replays a battle exactly.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod events;
pub mod state;
pub mod status;
pub use action::{
    ActionDescriptor, ActionType, DamageSpec, DeflectOutcome, EffectPayload, RoundQueue,
    StatusGrant,
};
pub use combat::ReactionKind;
pub use config::CombatConfig;
pub use engine::{CombatEngine, EngineError};
pub use env::{
    ActionPattern, CombatEnv, FixedRng, MonsterOracle, OracleError, PcgRng, RngOracle, RollCtx,
    SkillSpec, StatusAttributes, StatusOracle, derive_seed,
};
pub use events::{CombatEvent, SkipReason};
pub use state::{
    BattleOutcome, BattlePhase, BattleState, CharacterId, CharacterState, Element, MonsterId,
    NO_COUNTDOWN, Omen, Polarity, RoundState, StatusInstance, StatusKind, StatusSet,
};
