//! Shared identifier and classification types.

/// Identifies a combatant within the battle roster.
///
/// Ids are assigned at battle start and stay stable for the whole battle;
/// dead combatants keep their id and slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl CharacterId {
    /// Conventional id of the player combatant (roster slot 0).
    pub const PLAYER: CharacterId = CharacterId(0);
}

/// Identifies a monster definition in the monster catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterId(pub u32);

/// Which side of the battle a combatant (or action) belongs to.
///
/// Polarity selects the reaction-outcome branch and the default AoE target
/// set, and breaks speed ties in the action queue (enemies act first).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Polarity {
    Player,
    Enemy,
}

impl Polarity {
    /// Tie-break rank for equal-speed queue ordering: enemies before players.
    pub fn tie_rank(self) -> u8 {
        match self {
            Polarity::Enemy => 0,
            Polarity::Player => 1,
        }
    }

    pub fn opposite(self) -> Polarity {
        match self {
            Polarity::Player => Polarity::Enemy,
            Polarity::Enemy => Polarity::Player,
        }
    }
}

/// Damage element carried by a hit.
///
/// The four elemental variants leave residues and participate in reactions;
/// `Physical` and `Chaos` never interact with residues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Element {
    Physical,
    Fire,
    Water,
    Earth,
    Air,
    Chaos,
}

impl Element {
    /// The residue-leaving elements, in canonical order.
    pub const ELEMENTAL: [Element; 4] =
        [Element::Fire, Element::Water, Element::Earth, Element::Air];

    /// True for the four elements that lay residues and react.
    pub fn is_elemental(self) -> bool {
        matches!(
            self,
            Element::Fire | Element::Water | Element::Earth | Element::Air
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_and_chaos_are_inert() {
        assert!(!Element::Physical.is_elemental());
        assert!(!Element::Chaos.is_elemental());
        for element in Element::ELEMENTAL {
            assert!(element.is_elemental());
        }
    }

    #[test]
    fn enemy_acts_before_player_on_ties() {
        assert!(Polarity::Enemy.tie_rank() < Polarity::Player.tie_rank());
    }
}
