//! Like milestone accumulator
//!
//! Counts cumulative likes and reports every threshold boundary crossed. The
//! result only depends on the running total, never on how the likes were
//! batched: 250 likes at once cross the same boundaries as 100 + 100 + 50.

use serde::{Deserialize, Serialize};

/// Default number of likes between two milestones.
pub const DEFAULT_MILESTONE_THRESHOLD: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeMilestones {
    threshold: u32,
    total_likes: u64,
    since_last_milestone: u32,
}

impl LikeMilestones {
    /// A zero threshold is treated as 1 (a milestone per like).
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            total_likes: 0,
            since_last_milestone: 0,
        }
    }

    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[inline]
    pub fn total_likes(&self) -> u64 {
        self.total_likes
    }

    /// Likes accumulated since the last milestone, always below the threshold.
    #[inline]
    pub fn pending(&self) -> u32 {
        self.since_last_milestone
    }

    #[inline]
    pub fn likes_to_next_milestone(&self) -> u32 {
        self.threshold - self.since_last_milestone
    }

    /// Add `count` likes and return the cumulative total at each boundary crossed.
    ///
    /// ```
    /// use survivor_domain::aggregates::LikeMilestones;
    ///
    /// let mut likes = LikeMilestones::new(100);
    /// assert_eq!(likes.record_likes(250), vec![100, 200]);
    /// assert_eq!(likes.pending(), 50);
    /// ```
    pub fn record_likes(&mut self, count: u32) -> Vec<u64> {
        let mut crossings = Vec::new();
        let mut boundary = self.total_likes + u64::from(self.threshold - self.since_last_milestone);

        self.total_likes = self.total_likes.saturating_add(u64::from(count));
        let mut pending = u64::from(self.since_last_milestone) + u64::from(count);

        while pending >= u64::from(self.threshold) {
            pending -= u64::from(self.threshold);
            crossings.push(boundary);
            boundary += u64::from(self.threshold);
        }

        // pending < threshold here, so it fits back into u32
        self.since_last_milestone = pending as u32;
        crossings
    }
}

impl Default for LikeMilestones {
    fn default() -> Self {
        Self::new(DEFAULT_MILESTONE_THRESHOLD)
    }
}
