//! Application composition.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::infrastructure::app_config::GameConfig;
use crate::infrastructure::ports::{LlmPort, StateSinkPort};
use crate::use_cases::game::GameEngine;
use crate::use_cases::monster_attacks::MonsterAttackScheduler;
use crate::use_cases::monster_names::MonsterNamer;
use crate::use_cases::narration::{NarrationQueue, NarrationSettings, NarrationWorker};

/// A running game: the engine plus its background tasks.
///
/// Event sources call into [`App::engine`]; the narration worker and the
/// monster attack scheduler run until [`App::shutdown`].
pub struct App {
    engine: Arc<GameEngine>,
    cancel: CancellationToken,
    tasks: TaskTracker,
}

impl App {
    /// Wire the engine, publish the opening state and spawn the background
    /// tasks.
    pub async fn start(
        config: GameConfig,
        narrator: Arc<dyn LlmPort>,
        monster_namer: Arc<dyn LlmPort>,
        sink: Arc<dyn StateSinkPort>,
    ) -> Self {
        let (queue, receiver) = NarrationQueue::channel();
        let settings = NarrationSettings {
            cooldown: config.narration_cooldown,
            timeout: config.narration_timeout,
            temperature: config.narration_temperature,
        };
        let namer = MonsterNamer::new(monster_namer, config.narration_timeout);
        let attack_interval = config.monster_attack_interval;

        let engine = Arc::new(GameEngine::new(config, queue, namer, sink));
        engine.start().await;

        let cancel = CancellationToken::new();
        let tasks = TaskTracker::new();

        let worker = NarrationWorker::new(receiver, narrator, engine.clone(), settings);
        tasks.spawn(worker.run(cancel.clone()));

        let scheduler = MonsterAttackScheduler::new(engine.clone(), attack_interval);
        tasks.spawn(scheduler.run(cancel.clone()));

        tracing::info!("Game started");
        Self {
            engine,
            cancel,
            tasks,
        }
    }

    pub fn engine(&self) -> &Arc<GameEngine> {
        &self.engine
    }

    /// Token cancelled when the app shuts down, for event sources.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Stop the background tasks and wait for them to finish.
    pub async fn shutdown(self) {
        tracing::info!("Shutting down");
        self.cancel.cancel();
        self.tasks.close();
        self.tasks.wait().await;
    }
}
