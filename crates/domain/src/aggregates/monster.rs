//! Monster aggregate - the single hostile slot the survivor fights
//!
//! The slot is "empty" whenever `hp == 0`. A defeated monster keeps its name
//! so the overlay can still show who was beaten until the next spawn.

use serde::{Deserialize, Serialize};

use crate::events::{MonsterDamageOutcome, SpawnOutcome};

/// Base HP of every monster before level scaling.
pub const MONSTER_BASE_HP: u32 = 100;
/// Extra monster HP per character level at spawn time.
pub const MONSTER_HP_PER_LEVEL: u32 = 20;

/// Max HP of a monster spawned against a character of `character_level`.
pub fn scaled_max_hp(character_level: u32) -> u32 {
    MONSTER_BASE_HP.saturating_add(MONSTER_HP_PER_LEVEL.saturating_mul(character_level))
}

/// The monster slot.
///
/// # Invariants
///
/// - At most one active monster: `spawn` is a no-op while `hp > 0`
/// - `hp` never goes below 0
/// - `damage` reports `Defeated` exactly once per monster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    name: Option<String>,
    hp: u32,
    max_hp: u32,
}

impl Monster {
    /// An empty slot: nothing has been spawned yet.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.hp > 0
    }

    /// Fill the slot with a fresh monster scaled to `character_level`.
    ///
    /// Does nothing if a monster is still active, so two racing spawns leave
    /// the first one in place.
    ///
    /// ```
    /// use survivor_domain::aggregates::Monster;
    /// use survivor_domain::SpawnOutcome;
    ///
    /// let mut monster = Monster::new();
    /// assert!(matches!(monster.spawn("Grubbin", 1), SpawnOutcome::Spawned { max_hp: 120, .. }));
    /// assert_eq!(monster.spawn("Other", 5), SpawnOutcome::AlreadyActive);
    /// assert_eq!(monster.name(), Some("Grubbin"));
    /// ```
    pub fn spawn(&mut self, name: impl Into<String>, character_level: u32) -> SpawnOutcome {
        if self.is_active() {
            return SpawnOutcome::AlreadyActive;
        }

        let name = name.into();
        let max_hp = scaled_max_hp(character_level);
        self.name = Some(name.clone());
        self.max_hp = max_hp;
        self.hp = max_hp;

        SpawnOutcome::Spawned { name, max_hp }
    }

    /// Hit the monster, clamped at 0.
    ///
    /// Defeat is edge-triggered: only the hit that takes HP from positive to
    /// zero returns `Defeated`. Hitting an empty slot returns `NoMonster`.
    pub fn damage(&mut self, amount: u32) -> MonsterDamageOutcome {
        if !self.is_active() {
            return MonsterDamageOutcome::NoMonster;
        }

        let before = self.hp;
        self.hp = self.hp.saturating_sub(amount);
        let damage_dealt = before - self.hp;

        if self.hp == 0 {
            MonsterDamageOutcome::Defeated {
                name: self.name.clone().unwrap_or_default(),
                damage_dealt,
            }
        } else {
            MonsterDamageOutcome::Wounded {
                damage_dealt,
                remaining_hp: self.hp,
            }
        }
    }
}
