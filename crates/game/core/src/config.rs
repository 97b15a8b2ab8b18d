/// Combat configuration constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatConfig;

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum concurrent statuses on one combatant.
    pub const MAX_STATUS_EFFECTS: usize = 16;

    // ===== fixed balance values =====
    /// Chance (percent) that a Miss-afflicted action loses its damage.
    pub const MISS_CHANCE: u32 = 50;
    /// Chance (percent) that the Water x Air enemy reaction freezes.
    pub const FREEZE_CHANCE: u32 = 30;
    /// Bomb blast floor; the blast is the larger of this and 20% of the
    /// holder's current health, ceiled.
    pub const BOMB_MIN_DAMAGE: u32 = 6;
}
