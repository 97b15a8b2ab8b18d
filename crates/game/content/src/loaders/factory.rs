//! Content factory for building catalogs and the initial battle state.

use std::path::{Path, PathBuf};

use combat_core::{BattleState, CharacterId, CharacterState, MonsterId, Polarity};

use crate::loaders::{CardCatalog, LoadResult, MonsterCatalog, StatusCatalog};

/// Loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── statuses.ron
/// ├── cards.ron
/// └── monsters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the status catalog from `statuses.ron`.
    pub fn load_statuses(&self) -> LoadResult<StatusCatalog> {
        StatusCatalog::load(&self.data_dir.join("statuses.ron"))
    }

    /// Load the card catalog from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<CardCatalog> {
        CardCatalog::load(&self.data_dir.join("cards.ron"))
    }

    /// Load the monster catalog from `monsters.ron`.
    pub fn load_monsters(&self) -> LoadResult<MonsterCatalog> {
        MonsterCatalog::load(&self.data_dir.join("monsters.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Builds the initial battle state: the player in roster slot 0, one enemy
/// per requested monster id with catalog base stats.
///
/// Unknown monster ids are a configuration error surfaced before battle
/// start, not silently dropped.
pub fn build_battle(
    catalog: &MonsterCatalog,
    player_hp: u32,
    player_armor: u32,
    monsters: &[u32],
    seed: u64,
) -> LoadResult<BattleState> {
    let mut roster = vec![CharacterState::new(
        CharacterId::PLAYER,
        Polarity::Player,
        player_hp,
        player_armor,
    )];
    for (slot, &monster) in monsters.iter().enumerate() {
        let def = catalog
            .get(MonsterId(monster))
            .ok_or_else(|| anyhow::anyhow!("unknown monster id {monster}"))?;
        roster.push(
            CharacterState::new(
                CharacterId(slot as u32 + 1),
                Polarity::Enemy,
                def.max_hp,
                def.armor,
            )
            .with_monster(MonsterId(monster)),
        );
    }
    Ok(BattleState::new(roster, seed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn build_battle_places_the_player_first() {
        let catalog = MonsterCatalog::builtin().unwrap();
        let first = catalog.monsters[0].id;
        let second = catalog.monsters[1].id;
        let state = build_battle(&catalog, 50, 0, &[first, second], 7).unwrap();

        assert_eq!(state.characters().len(), 3);
        let player = state.character(CharacterId::PLAYER).unwrap();
        assert_eq!(player.polarity, Polarity::Player);
        assert_eq!(player.hp, 50);

        let enemy = state.character(CharacterId(1)).unwrap();
        assert_eq!(enemy.polarity, Polarity::Enemy);
        assert_eq!(enemy.monster, Some(MonsterId(first)));
        assert_eq!(enemy.hp, catalog.monsters[0].max_hp);
    }

    #[test]
    fn unknown_monster_is_a_configuration_error() {
        let catalog = MonsterCatalog::builtin().unwrap();
        assert!(build_battle(&catalog, 50, 0, &[9999], 7).is_err());
    }
}
