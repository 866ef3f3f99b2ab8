//! Use cases - game orchestration on top of the domain aggregates.
//!
//! - `game` - the engine façade that owns all mutable state
//! - `narration` - queue and rate-limited worker for LLM narration
//! - `monster_attacks` - periodic attack scheduler
//! - `monster_names` - LLM monster names with fixed fallbacks

pub mod game;
pub mod monster_attacks;
pub mod monster_names;
pub mod narration;
