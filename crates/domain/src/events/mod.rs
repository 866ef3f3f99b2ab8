//! Domain Events
//!
//! Return types from aggregate mutations, communicating what happened when
//! state was modified so the engine can decide which side effects follow
//! (XP bonus, narration, persistence).

pub mod character_events;
pub mod combat_events;

pub use character_events::*;
pub use combat_events::*;
