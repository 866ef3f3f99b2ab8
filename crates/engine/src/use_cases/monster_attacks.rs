//! Periodic monster attacks.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::use_cases::game::GameEngine;

/// Ticks every `interval` and lets the active monster (if any) hit the
/// survivor. The first tick fires one full interval after start.
pub struct MonsterAttackScheduler {
    engine: Arc<GameEngine>,
    interval: Duration,
}

impl MonsterAttackScheduler {
    pub fn new(engine: Arc<GameEngine>, interval: Duration) -> Self {
        Self { engine, interval }
    }

    /// Run until cancelled. A tick that already started always completes.
    pub async fn run(self, cancel: CancellationToken) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Starting monster attack scheduler"
        );
        let mut ticker = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    self.engine.monster_attack().await;
                }
            }
        }

        tracing::info!("Monster attack scheduler stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::app_config::GameConfig;
    use crate::test_fixtures::TestGame;

    #[tokio::test(start_paused = true)]
    async fn three_attacks_in_thirty_five_seconds() {
        let game = TestGame::new();
        game.engine.spawn_monster().await;
        let cancel = CancellationToken::new();
        let interval = game.engine.config().monster_attack_interval;
        let scheduler = MonsterAttackScheduler::new(game.engine.clone(), interval);
        let handle = tokio::spawn(scheduler.run(cancel.clone()));

        tokio::time::sleep(Duration::from_secs(35)).await;
        cancel.cancel();
        handle.await.expect("scheduler exits cleanly");

        assert_eq!(game.engine.snapshot().await.hp, 25);
    }

    #[tokio::test(start_paused = true)]
    async fn no_damage_without_monster() {
        let game = TestGame::new();
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(
            MonsterAttackScheduler::new(game.engine.clone(), Duration::from_secs(10))
                .run(cancel.clone()),
        );

        tokio::time::sleep(Duration::from_secs(35)).await;
        cancel.cancel();
        handle.await.expect("scheduler exits cleanly");

        assert_eq!(game.engine.snapshot().await.hp, 100);
        assert_eq!(game.sink.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn survivor_hp_never_drops_below_zero() {
        let game = TestGame::with_config(GameConfig {
            monster_attack_damage: 60,
            ..GameConfig::default()
        });
        game.engine.spawn_monster().await;
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(
            MonsterAttackScheduler::new(game.engine.clone(), Duration::from_secs(10))
                .run(cancel.clone()),
        );

        tokio::time::sleep(Duration::from_secs(45)).await;
        cancel.cancel();
        handle.await.expect("scheduler exits cleanly");

        assert_eq!(game.engine.snapshot().await.hp, 0);
    }
}
