//! Live audience events.
//!
//! The event source adapter turns platform events into [`LiveEvent`]s and
//! hands them to [`dispatch`], which takes care of gift streaks before
//! calling into a [`LiveEventHandler`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Capabilities an event consumer must provide.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LiveEventHandler: Send + Sync {
    /// One gift, already expanded from any streak/repeat count.
    async fn on_gift(&self, user: &str, gift_name: &str);
    /// A batch of likes from one user.
    async fn on_likes(&self, user: &str, count: u32);
    async fn on_comment(&self, user: &str, text: &str);
}

/// An event as delivered by the live platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    Gift {
        user: String,
        gift_name: String,
        #[serde(default = "default_repeat_count")]
        repeat_count: u32,
        /// False while a combo streak is still running
        #[serde(default = "default_streak_final")]
        is_streak_final: bool,
    },
    Like {
        user: String,
        count: u32,
    },
    Comment {
        user: String,
        text: String,
    },
}

fn default_repeat_count() -> u32 {
    1
}

fn default_streak_final() -> bool {
    true
}

/// Route one event to the handler.
///
/// Gifts in a running streak are ignored; the final event of a streak carries
/// the full repeat count and produces one `on_gift` call per repetition.
pub async fn dispatch(handler: &dyn LiveEventHandler, event: LiveEvent) {
    match event {
        LiveEvent::Gift {
            user,
            gift_name,
            repeat_count,
            is_streak_final,
        } => {
            if !is_streak_final {
                tracing::trace!(user = %user, gift = %gift_name, repeat_count, "Gift streak in progress");
                return;
            }
            tracing::info!(user = %user, gift = %gift_name, repeat_count, "Gift received");
            for _ in 0..repeat_count.max(1) {
                handler.on_gift(&user, &gift_name).await;
            }
        }
        LiveEvent::Like { user, count } => {
            if count == 0 {
                return;
            }
            tracing::debug!(user = %user, count, "Likes received");
            handler.on_likes(&user, count).await;
        }
        LiveEvent::Comment { user, text } => {
            handler.on_comment(&user, &text).await;
        }
    }
}
