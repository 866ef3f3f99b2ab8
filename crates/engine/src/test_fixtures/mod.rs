//! Shared test helpers for engine tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::TestGame;
//!
//! #[tokio::test]
//! async fn test_gift_spawns_monster() {
//!     let game = TestGame::new();
//!     game.engine.handle_gift("jean", "Rose").await;
//!     assert!(game.sink.last().expect("written").monster.is_some());
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use survivor_domain::GameSnapshot;

use crate::infrastructure::app_config::GameConfig;
use crate::infrastructure::ports::{
    FinishReason, LlmResponse, MockLlmPort, SinkError, StateSinkPort,
};
use crate::use_cases::game::GameEngine;
use crate::use_cases::monster_names::MonsterNamer;
use crate::use_cases::narration::{NarrationQueue, NarrationReceiver};

pub const TEST_MONSTER_NAME: &str = "Gloom Rat";

// =============================================================================
// State sink
// =============================================================================

/// Keeps every snapshot written, in order.
#[derive(Default)]
pub struct RecordingSink {
    snapshots: Mutex<Vec<GameSnapshot>>,
}

impl RecordingSink {
    pub fn last(&self) -> Option<GameSnapshot> {
        self.snapshots.lock().expect("sink lock").last().cloned()
    }

    pub fn count(&self) -> usize {
        self.snapshots.lock().expect("sink lock").len()
    }
}

#[async_trait]
impl StateSinkPort for RecordingSink {
    async fn write_snapshot(&self, snapshot: &GameSnapshot) -> Result<(), SinkError> {
        self.snapshots
            .lock()
            .expect("sink lock")
            .push(snapshot.clone());
        Ok(())
    }
}

// =============================================================================
// Engine
// =============================================================================

/// Namer backed by a mock LLM that always answers `name`.
pub fn fixed_namer(name: &'static str) -> MonsterNamer {
    let mut llm = MockLlmPort::new();
    llm.expect_generate().returning(move |_| {
        Ok(LlmResponse {
            content: name.to_string(),
            finish_reason: FinishReason::Stop,
        })
    });
    MonsterNamer::new(Arc::new(llm), Duration::from_secs(5))
}

/// An engine wired to in-memory collaborators.
pub struct TestGame {
    pub engine: Arc<GameEngine>,
    pub narrations: NarrationReceiver,
    pub sink: Arc<RecordingSink>,
}

impl TestGame {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let (queue, narrations) = NarrationQueue::channel();
        let sink = Arc::new(RecordingSink::default());
        let engine = Arc::new(GameEngine::new(
            config,
            queue,
            fixed_namer(TEST_MONSTER_NAME),
            sink.clone(),
        ));
        Self {
            engine,
            narrations,
            sink,
        }
    }

    /// Drain queued narration prompts.
    pub fn queued_prompts(&mut self) -> Vec<String> {
        std::iter::from_fn(|| self.narrations.try_next())
            .map(|request| request.prompt)
            .collect()
    }
}
