//! Game engine façade.
//!
//! Single entry point for everything that changes the game: live events,
//! scheduled monster attacks and finished narrations. All state lives behind
//! one async mutex; the sink write for a mutation happens while the lock is
//! still held, so overlay files always follow mutation order.

mod state;

pub use state::{GameState, LikesApplied};

use std::sync::Arc;

use async_trait::async_trait;
use survivor_domain::{
    find_gift, gift_effect, GameSnapshot, GiftApplied, MonsterAttackOutcome,
    MonsterDamageOutcome, SpawnOutcome,
};
use tokio::sync::Mutex;

use crate::api::live_events::LiveEventHandler;
use crate::infrastructure::app_config::GameConfig;
use crate::infrastructure::ports::StateSinkPort;
use crate::prompt_templates::{defeat_prompt, gift_prompt, milestone_prompt};
use crate::use_cases::monster_names::MonsterNamer;
use crate::use_cases::narration::{NarrationListener, NarrationQueue};

pub struct GameEngine {
    state: Mutex<GameState>,
    config: GameConfig,
    narration: NarrationQueue,
    namer: MonsterNamer,
    sink: Arc<dyn StateSinkPort>,
}

impl GameEngine {
    pub fn new(
        config: GameConfig,
        narration: NarrationQueue,
        namer: MonsterNamer,
        sink: Arc<dyn StateSinkPort>,
    ) -> Self {
        Self {
            state: Mutex::new(GameState::new(config.milestone_threshold)),
            config,
            narration,
            namer,
            sink,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Publish the opening state so the overlay has something to show.
    pub async fn start(&self) {
        let state = self.state.lock().await;
        self.persist(&state).await;
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Fill the monster slot if it is empty.
    ///
    /// The name lookup runs without the state lock; if another spawn wins the
    /// race meanwhile, this one returns `AlreadyActive` and changes nothing.
    pub async fn spawn_monster(&self) -> SpawnOutcome {
        let level = {
            let state = self.state.lock().await;
            if state.monster().is_active() {
                return SpawnOutcome::AlreadyActive;
            }
            state.character().level()
        };

        let name = self.namer.generate(level).await;

        let mut state = self.state.lock().await;
        let outcome = state.spawn_monster(name.as_str());
        if let SpawnOutcome::Spawned { name, max_hp } = &outcome {
            tracing::info!(monster = %name, max_hp, "Monster appeared");
            self.persist(&state).await;
        }
        outcome
    }

    /// Apply a gift: spawn a monster if needed, then heal, grant XP and
    /// queue one narration.
    pub async fn handle_gift(&self, user: &str, gift_name: &str) -> GiftApplied {
        self.spawn_monster().await;

        if find_gift(gift_name).is_none() {
            tracing::debug!(gift = %gift_name, "Unknown gift, using default effect");
        }
        let effect = gift_effect(gift_name);

        let mut state = self.state.lock().await;
        let applied = state.apply_gift(gift_name, &effect);
        if applied.leveled_up {
            tracing::info!(level = applied.level, "Level up");
        }
        self.persist(&state).await;
        self.narration
            .enqueue(gift_prompt(user, gift_name, &effect, &applied));

        applied
    }

    /// Apply a batch of likes, including every milestone it crosses.
    pub async fn handle_likes(&self, count: u32) -> LikesApplied {
        if count == 0 {
            return LikesApplied::default();
        }

        let mut state = self.state.lock().await;
        let applied = state.apply_likes(count, &self.config);
        self.persist(&state).await;

        for milestone in &applied.milestones {
            tracing::info!(total_likes = milestone.total_likes, "Like milestone reached");
            self.narration.enqueue(milestone_prompt(milestone));
        }
        if let Some(monster) = &applied.defeated {
            tracing::info!(monster = %monster, "Monster defeated");
            self.narration
                .enqueue(defeat_prompt(monster, self.config.defeat_xp_bonus));
        }

        applied
    }

    /// Hit the monster directly.
    pub async fn damage_monster(&self, amount: u32) -> MonsterDamageOutcome {
        let mut state = self.state.lock().await;
        let outcome = state.damage_monster(amount, self.config.defeat_xp_bonus);

        match &outcome {
            MonsterDamageOutcome::NoMonster => return MonsterDamageOutcome::NoMonster,
            MonsterDamageOutcome::Wounded { remaining_hp, .. } => {
                tracing::debug!(remaining_hp, "Monster wounded");
            }
            MonsterDamageOutcome::Defeated { name, .. } => {
                tracing::info!(monster = %name, "Monster defeated");
                self.narration
                    .enqueue(defeat_prompt(name, self.config.defeat_xp_bonus));
            }
        }
        self.persist(&state).await;
        outcome
    }

    /// One monster attack tick. Does nothing without an active monster.
    pub async fn monster_attack(&self) -> MonsterAttackOutcome {
        let mut state = self.state.lock().await;
        let outcome = state.monster_attack(self.config.monster_attack_damage);

        if let MonsterAttackOutcome::Hit {
            monster,
            damage,
            remaining_hp,
            still_alive,
        } = &outcome
        {
            if *still_alive {
                tracing::info!(monster = %monster, damage, remaining_hp, "Monster attacks");
            } else {
                tracing::warn!(monster = %monster, damage, "The survivor is down to 0 HP");
            }
            self.persist(&state).await;
        }
        outcome
    }

    /// Show a finished narration on the overlay.
    pub async fn record_narration(&self, text: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.set_last_action(text);
        self.persist(&state).await;
    }

    async fn persist(&self, state: &GameState) {
        if let Err(e) = self.sink.write_snapshot(&state.snapshot()).await {
            tracing::warn!(error = %e, "Failed to write game state");
        }
    }
}

#[async_trait]
impl LiveEventHandler for GameEngine {
    async fn on_gift(&self, user: &str, gift_name: &str) {
        self.handle_gift(user, gift_name).await;
    }

    async fn on_likes(&self, _user: &str, count: u32) {
        self.handle_likes(count).await;
    }

    async fn on_comment(&self, user: &str, text: &str) {
        tracing::info!(user = %user, comment = %text, "Comment");
    }
}

#[async_trait]
impl NarrationListener for GameEngine {
    async fn on_narration(&self, text: String) {
        tracing::info!(narration = %text, "Narration");
        self.record_narration(text).await;
    }
}
