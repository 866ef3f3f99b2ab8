//! Aggregate roots - domain objects that own their state
//!
//! Each aggregate:
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//! - Never performs I/O

pub mod character;
pub mod like_milestones;
pub mod monster;

pub use character::Character;
pub use like_milestones::LikeMilestones;
pub use monster::Monster;
