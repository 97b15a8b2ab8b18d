//! Monster catalog loader.

use std::collections::HashMap;
use std::path::Path;

use combat_core::{ActionPattern, MonsterId, MonsterOracle, SkillSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One monster definition: base stats, skill list, and selection pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterDef {
    pub id: u32,
    pub name: String,
    pub max_hp: u32,
    pub armor: u32,
    pub skills: Vec<SkillSpec>,
    pub pattern: ActionPattern,
}

/// Monster catalog structure for RON files.
///
/// Implements [`MonsterOracle`]; unknown monster ids yield an empty skill
/// list, so their combatants contribute no intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonsterCatalog {
    pub monsters: Vec<MonsterDef>,
    #[serde(skip)]
    by_id: HashMap<u32, usize>,
}

impl MonsterCatalog {
    /// Load the monster catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = read_file(path)?;
        let catalog: MonsterCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse monster catalog RON: {}", e))?;
        Ok(catalog.indexed())
    }

    /// The catalog shipped with this crate, embedded at compile time.
    pub fn builtin() -> LoadResult<Self> {
        let catalog: MonsterCatalog = ron::from_str(include_str!("../../data/monsters.ron"))
            .map_err(|e| anyhow::anyhow!("Failed to parse embedded monsters.ron: {}", e))?;
        Ok(catalog.indexed())
    }

    fn indexed(mut self) -> Self {
        self.by_id = self
            .monsters
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();
        self
    }

    pub fn get(&self, id: MonsterId) -> Option<&MonsterDef> {
        self.by_id.get(&id.0).map(|&i| &self.monsters[i])
    }
}

impl MonsterOracle for MonsterCatalog {
    fn skills(&self, monster: MonsterId) -> &[SkillSpec] {
        self.get(monster).map_or(&[], |def| def.skills.as_slice())
    }

    fn action_pattern(&self, monster: MonsterId) -> Option<ActionPattern> {
        self.get(monster).map(|def| def.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses_with_valid_patterns() {
        let catalog = MonsterCatalog::builtin().unwrap();
        assert!(!catalog.monsters.is_empty());
        for def in &catalog.monsters {
            assert!(!def.skills.is_empty(), "{} has no skills", def.name);
            assert!(def.pattern.actions_per_turn >= 1);
            if let Some(opener) = def.pattern.opener {
                assert!(opener < def.skills.len(), "{} opener out of range", def.name);
            }
        }
    }

    #[test]
    fn unknown_monster_yields_no_skills() {
        let catalog = MonsterCatalog::builtin().unwrap();
        assert!(catalog.skills(MonsterId(9999)).is_empty());
        assert!(catalog.action_pattern(MonsterId(9999)).is_none());
    }
}
