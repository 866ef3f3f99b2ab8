//! Combat-related domain events
//!
//! These enums communicate what happened when a monster was spawned, hit or
//! when it hit back.

/// Outcome of a spawn attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// A new monster now occupies the slot
    Spawned { name: String, max_hp: u32 },
    /// A monster was already active, nothing changed
    AlreadyActive,
}

/// Outcome of damaging the monster slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonsterDamageOutcome {
    /// The slot was empty (never spawned, or already defeated)
    NoMonster,
    /// Monster took damage but is still standing
    Wounded { damage_dealt: u32, remaining_hp: u32 },
    /// This hit took the monster from positive HP to zero
    Defeated { name: String, damage_dealt: u32 },
}

impl MonsterDamageOutcome {
    /// True only for the hit that crossed from alive to defeated.
    pub fn is_defeat(&self) -> bool {
        matches!(self, Self::Defeated { .. })
    }
}

/// Outcome of a monster attack tick against the character
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonsterAttackOutcome {
    /// No active monster, nothing happened
    Idle,
    /// The monster hit the character
    Hit {
        monster: String,
        damage: u32,
        remaining_hp: u32,
        still_alive: bool,
    },
}
