//! Survivor engine library.
//!
//! Runs the live survivor game: audience events mutate the game state, a
//! rate-limited worker narrates what happens, a scheduler lets the monster
//! strike back, and every change is written out for the stream overlay.
//!
//! ## Structure
//!
//! - `use_cases/` - Game engine, narration pipeline, monster timers
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Live event entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod prompt_templates;
pub mod use_cases;

/// Shared helpers for engine tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
