//! Survivor domain model.
//!
//! Pure game rules for the survivor character, the monster slot and the like
//! milestone counter. Nothing in this crate awaits or touches the filesystem.

pub mod aggregates;
pub mod events;
pub mod value_objects;

pub use aggregates::{Character, LikeMilestones, Monster};

pub use aggregates::character::{
    MAX_HP_PER_LEVEL, MAX_RECENT_ITEMS, STARTING_HP, STARTING_LEVEL, STARTING_MAX_HP,
    XP_PER_LEVEL,
};
pub use aggregates::like_milestones::DEFAULT_MILESTONE_THRESHOLD;
pub use aggregates::monster::{scaled_max_hp, MONSTER_BASE_HP, MONSTER_HP_PER_LEVEL};

pub use events::{
    GiftApplied, MilestoneReached, MonsterAttackOutcome, MonsterDamageOutcome, SpawnOutcome,
};

pub use value_objects::{
    find_gift, gift_effect, GameSnapshot, GiftEffect, MonsterSnapshot, DEFAULT_GIFT,
};
