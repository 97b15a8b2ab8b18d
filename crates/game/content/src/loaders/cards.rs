//! Card catalog loader.

use std::path::Path;

use combat_core::{ActionDescriptor, ActionType, CharacterId, EffectPayload, Polarity};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Gameplay class of a card, used by the host's deck and slot layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardClass {
    Attack,
    Skill,
    Ability,
}

/// One card as it appears in the card catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSpec {
    pub id: u32,
    pub name: String,
    pub class: CardClass,
    pub speed: i32,
    pub action_type: ActionType,
    pub payload: EffectPayload,
}

impl CardSpec {
    /// Builds the action this card submits when played.
    pub fn descriptor(
        &self,
        actor: CharacterId,
        polarity: Polarity,
        target: CharacterId,
    ) -> ActionDescriptor {
        ActionDescriptor {
            actor,
            polarity,
            speed: self.speed,
            action_type: self.action_type,
            payload: self.payload,
            target,
        }
    }
}

/// Card catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCatalog {
    pub cards: Vec<CardSpec>,
}

impl CardCatalog {
    /// Load the card catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))
    }

    /// The catalog shipped with this crate, embedded at compile time.
    pub fn builtin() -> LoadResult<Self> {
        ron::from_str(include_str!("../../data/cards.ron"))
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded cards.ron: {}", e))
    }

    pub fn get(&self, id: u32) -> Option<&CardSpec> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
