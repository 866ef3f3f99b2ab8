//! API layer - live event entry points.

pub mod live_events;

pub use live_events::{dispatch, LiveEvent, LiveEventHandler};
