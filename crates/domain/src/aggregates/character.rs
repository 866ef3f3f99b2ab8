//! Character aggregate - the survivor kept alive by the audience
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: HP, XP and inventory only change through the methods below
//! - **Unsigned amounts**: negative heals or damage are unrepresentable
//! - **Synchronous**: no method performs I/O, so the engine can apply any of
//!   them atomically while it holds the game-state lock

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// HP the survivor starts with.
pub const STARTING_HP: u32 = 100;
/// Max HP the survivor starts with.
pub const STARTING_MAX_HP: u32 = 100;
pub const STARTING_LEVEL: u32 = 1;
/// XP needed to go from one level to the next.
pub const XP_PER_LEVEL: u32 = 100;
/// Max HP gained on every level-up.
pub const MAX_HP_PER_LEVEL: u32 = 10;
/// Number of recently received items kept for the overlay.
pub const MAX_RECENT_ITEMS: usize = 3;

/// The survivor character.
///
/// # Invariants
///
/// - `hp <= max_hp` after every mutation
/// - `xp < XP_PER_LEVEL` once `add_xp` returns (overflow is carried into the next level)
/// - `recent_items.len() <= MAX_RECENT_ITEMS`, oldest evicted first
/// - `level` never decreases
///
/// # Example
///
/// ```
/// use survivor_domain::aggregates::Character;
///
/// let mut character = Character::new();
/// character.remove_hp(30);
/// assert_eq!(character.add_hp(50), 30);
/// assert_eq!(character.hp(), character.max_hp());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    hp: u32,
    max_hp: u32,
    level: u32,
    xp: u32,
    recent_items: VecDeque<String>,
}

impl Character {
    /// Create the survivor with the fixed starting stats.
    pub fn new() -> Self {
        Self {
            hp: STARTING_HP,
            max_hp: STARTING_MAX_HP,
            level: STARTING_LEVEL,
            xp: 0,
            recent_items: VecDeque::with_capacity(MAX_RECENT_ITEMS + 1),
        }
    }

    /// Set current HP, clamped to max HP.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    /// Set pending XP without triggering a level-up.
    ///
    /// Values at or above `XP_PER_LEVEL` are settled by the next `add_xp` call.
    pub fn with_xp(mut self, xp: u32) -> Self {
        self.xp = xp;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[inline]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// XP required to reach the next level.
    #[inline]
    pub fn xp_for_next_level(&self) -> u32 {
        XP_PER_LEVEL
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Recently received items, oldest first.
    pub fn recent_items(&self) -> impl ExactSizeIterator<Item = &str> {
        self.recent_items.iter().map(String::as_str)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Heal the character, capped at max HP.
    ///
    /// Returns the HP actually restored (0 when already full).
    pub fn add_hp(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Damage the character, clamped at 0.
    ///
    /// Returns `true` while the character still has HP left. Reaching 0 is
    /// not fatal: the survivor simply stays at 0 until healed.
    pub fn remove_hp(&mut self, amount: u32) -> bool {
        self.hp = self.hp.saturating_sub(amount);
        self.is_alive()
    }

    /// Grant XP, levelling up as many times as the total allows.
    ///
    /// Returns `true` if at least one level-up happened.
    ///
    /// ```
    /// use survivor_domain::aggregates::Character;
    ///
    /// let mut character = Character::new().with_xp(95);
    /// assert!(character.add_xp(120));
    /// assert_eq!(character.level(), 3);
    /// assert_eq!(character.xp(), 15);
    /// ```
    pub fn add_xp(&mut self, amount: u32) -> bool {
        self.xp = self.xp.saturating_add(amount);
        let mut leveled_up = false;
        while self.xp >= XP_PER_LEVEL {
            self.level_up();
            leveled_up = true;
        }
        leveled_up
    }

    /// Advance one level: spend the XP, raise max HP and fully heal.
    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.xp = self.xp.saturating_sub(XP_PER_LEVEL);
        self.max_hp = self.max_hp.saturating_add(MAX_HP_PER_LEVEL);
        self.hp = self.max_hp;
    }

    /// Remember a received item; only the last `MAX_RECENT_ITEMS` are kept.
    pub fn record_item(&mut self, name: impl Into<String>) {
        self.recent_items.push_back(name.into());
        while self.recent_items.len() > MAX_RECENT_ITEMS {
            self.recent_items.pop_front();
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
