//! Status catalog oracle.

use crate::state::StatusKind;

/// Static attributes of a status kind, supplied by the host catalog.
///
/// Display metadata (names, icons, descriptions) stays host-side; the core
/// only needs the stacking rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusAttributes {
    /// Whether stacks accumulate; non-stackable kinds are pinned at 1.
    pub stackable: bool,
    pub max_stacks: u32,
}

impl StatusAttributes {
    /// Built-in fallback when the host catalog has no entry for a kind.
    pub fn default_for(kind: StatusKind) -> Self {
        match kind {
            // Single-stack markers: residues and the one-shot/countdown kinds.
            StatusKind::FireResidue
            | StatusKind::WaterResidue
            | StatusKind::EarthResidue
            | StatusKind::AirResidue
            | StatusKind::Frozen
            | StatusKind::Miss
            | StatusKind::Stealth
            | StatusKind::Vulnerable
            | StatusKind::Bomb => Self {
                stackable: false,
                max_stacks: 1,
            },
            _ => Self {
                stackable: true,
                max_stacks: 99,
            },
        }
    }
}

/// Read-only status catalog supplied by the host.
pub trait StatusOracle: Send + Sync {
    /// Attributes for a status kind, or `None` when the catalog has no entry.
    fn status_attributes(&self, kind: StatusKind) -> Option<StatusAttributes>;
}
