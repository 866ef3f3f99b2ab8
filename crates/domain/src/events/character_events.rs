//! Character-related domain events

/// Outcome of resolving a gift against the character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftApplied {
    /// HP actually restored after capping at max HP
    pub hp_gained: u32,
    /// XP granted by the gift payload
    pub xp_gained: u32,
    /// Whether the XP pushed the character through at least one level
    pub leveled_up: bool,
    /// Level after the gift was applied
    pub level: u32,
}

/// Outcome of one like milestone being applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneReached {
    /// Cumulative likes at the boundary that was crossed
    pub total_likes: u64,
    pub hp_gained: u32,
    pub xp_gained: u32,
    pub leveled_up: bool,
}
