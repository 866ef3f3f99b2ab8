//! Value objects - Immutable objects defined by their attributes

mod gift;
mod snapshot;

pub use gift::{find_gift, gift_effect, GiftEffect, DEFAULT_GIFT};
pub use snapshot::{GameSnapshot, MonsterSnapshot};
