//! In-memory game state.
//!
//! `GameState` owns the three aggregates plus the last narrated action. All
//! methods are synchronous; the engine wraps the state in a single async mutex
//! so every event applies atomically.

use survivor_domain::{
    Character, GameSnapshot, GiftApplied, GiftEffect, LikeMilestones, MilestoneReached, Monster,
    MonsterAttackOutcome, MonsterDamageOutcome, SpawnOutcome,
};

use crate::infrastructure::app_config::GameConfig;
use crate::prompt_templates::OPENING_ACTION;

/// What a batch of likes did to the game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikesApplied {
    /// HP actually healed by the per-like rule
    pub hp_gained: u32,
    /// Damage dealt to the monster by the per-like rule and milestones
    pub monster_damage: u32,
    /// One entry per milestone crossed, in order
    pub milestones: Vec<MilestoneReached>,
    /// Set when this batch defeated the monster
    pub defeated: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    character: Character,
    monster: Monster,
    likes: LikeMilestones,
    last_action: String,
}

impl GameState {
    pub fn new(milestone_threshold: u32) -> Self {
        Self {
            character: Character::new(),
            monster: Monster::new(),
            likes: LikeMilestones::new(milestone_threshold),
            last_action: OPENING_ACTION.to_string(),
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn monster(&self) -> &Monster {
        &self.monster
    }

    pub fn likes(&self) -> &LikeMilestones {
        &self.likes
    }

    pub fn set_last_action(&mut self, text: impl Into<String>) {
        self.last_action = text.into();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.character, &self.monster, &self.likes, &self.last_action)
    }

    /// Fill the monster slot unless a monster is already active.
    pub fn spawn_monster(&mut self, name: &str) -> SpawnOutcome {
        let level = self.character.level();
        self.monster.spawn(name, level)
    }

    /// Apply one gift's HP/XP and remember the item.
    pub fn apply_gift(&mut self, gift_name: &str, effect: &GiftEffect) -> GiftApplied {
        let hp_gained = self.character.add_hp(effect.hp);
        let leveled_up = self.character.add_xp(effect.xp);
        self.character.record_item(gift_name);

        GiftApplied {
            hp_gained,
            xp_gained: effect.xp,
            leveled_up,
            level: self.character.level(),
        }
    }

    /// Apply a batch of likes: per-like heal and damage, then every milestone
    /// the batch crosses.
    pub fn apply_likes(&mut self, count: u32, rules: &GameConfig) -> LikesApplied {
        let mut applied = LikesApplied {
            hp_gained: self
                .character
                .add_hp(count.saturating_mul(rules.like_heal_amount)),
            ..LikesApplied::default()
        };

        if rules.like_damage_amount > 0 {
            let outcome = self.damage_monster(
                count.saturating_mul(rules.like_damage_amount),
                rules.defeat_xp_bonus,
            );
            applied.absorb(outcome);
        }

        for total_likes in self.likes.record_likes(count) {
            let hp_gained = self.character.add_hp(rules.milestone_heal);
            let leveled_up = self.character.add_xp(rules.milestone_xp);
            applied.milestones.push(MilestoneReached {
                total_likes,
                hp_gained,
                xp_gained: rules.milestone_xp,
                leveled_up,
            });

            let outcome = self.damage_monster(rules.milestone_damage, rules.defeat_xp_bonus);
            applied.absorb(outcome);
        }

        applied
    }

    /// Hit the monster; the defeating hit also grants `defeat_xp_bonus`.
    pub fn damage_monster(&mut self, amount: u32, defeat_xp_bonus: u32) -> MonsterDamageOutcome {
        let outcome = self.monster.damage(amount);
        if outcome.is_defeat() {
            self.character.add_xp(defeat_xp_bonus);
        }
        outcome
    }

    /// One scheduled attack from the active monster, if any.
    pub fn monster_attack(&mut self, damage: u32) -> MonsterAttackOutcome {
        let Some(name) = self.monster.name().filter(|_| self.monster.is_active()) else {
            return MonsterAttackOutcome::Idle;
        };
        let monster = name.to_string();

        let still_alive = self.character.remove_hp(damage);
        MonsterAttackOutcome::Hit {
            monster,
            damage,
            remaining_hp: self.character.hp(),
            still_alive,
        }
    }
}

impl LikesApplied {
    fn absorb(&mut self, outcome: MonsterDamageOutcome) {
        match outcome {
            MonsterDamageOutcome::NoMonster => {}
            MonsterDamageOutcome::Wounded { damage_dealt, .. } => {
                self.monster_damage += damage_dealt;
            }
            MonsterDamageOutcome::Defeated { name, damage_dealt } => {
                self.monster_damage += damage_dealt;
                self.defeated = Some(name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survivor_domain::gift_effect;

    fn rules() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn starts_with_opening_action_and_no_monster() {
        let state = GameState::new(100);
        let snapshot = state.snapshot();

        assert_eq!(snapshot.hp, 100);
        assert_eq!(snapshot.level, 1);
        assert_eq!(snapshot.last_action, OPENING_ACTION);
        assert!(snapshot.monster.is_none());
    }

    #[test]
    fn rose_heals_grants_xp_and_is_recorded() {
        let mut state = GameState::new(100);
        state.character = Character::new().with_hp(80);

        let applied = state.apply_gift("Rose", &gift_effect("Rose"));

        assert_eq!(applied.hp_gained, 5);
        assert_eq!(applied.xp_gained, 10);
        assert!(!applied.leveled_up);
        assert_eq!(state.character().hp(), 85);
        assert_eq!(state.character().xp(), 10);
        assert_eq!(state.character().recent_items().collect::<Vec<_>>(), ["Rose"]);
    }

    #[test]
    fn lion_levels_up_and_fully_heals() {
        let mut state = GameState::new(100);
        state.character = Character::new().with_hp(20);

        let applied = state.apply_gift("Lion", &gift_effect("Lion"));

        assert!(applied.leveled_up);
        assert_eq!(applied.level, 2);
        assert_eq!(state.character().hp(), 110);
        assert_eq!(state.character().max_hp(), 110);
    }

    #[test]
    fn likes_heal_per_like_and_cap_at_max() {
        let mut state = GameState::new(100);
        state.character = Character::new().with_hp(95);

        let applied = state.apply_likes(10, &rules());

        assert_eq!(applied.hp_gained, 5);
        assert_eq!(state.character().hp(), 100);
        assert!(applied.milestones.is_empty());
    }

    #[test]
    fn like_damage_is_off_by_default() {
        let mut state = GameState::new(100);
        state.spawn_monster("Gloom Rat");

        let applied = state.apply_likes(50, &rules());

        assert_eq!(applied.monster_damage, 0);
        assert_eq!(state.monster().hp(), 120);
    }

    #[test]
    fn milestone_heals_grants_xp_and_hits_monster() {
        let mut state = GameState::new(100);
        state.character = Character::new().with_hp(50);
        state.spawn_monster("Gloom Rat");

        let applied = state.apply_likes(100, &rules());

        assert_eq!(applied.milestones.len(), 1);
        assert_eq!(applied.milestones[0].total_likes, 100);
        // 100 per-like HP caps at max, milestone heal has nothing left to add
        assert_eq!(state.character().hp(), 100);
        assert_eq!(state.character().xp(), 10);
        assert_eq!(applied.monster_damage, 10);
        assert_eq!(state.monster().hp(), 110);
    }

    #[test]
    fn one_large_batch_crosses_several_milestones() {
        let mut state = GameState::new(100);

        let applied = state.apply_likes(250, &rules());

        let totals: Vec<u64> = applied.milestones.iter().map(|m| m.total_likes).collect();
        assert_eq!(totals, [100, 200]);
        assert_eq!(state.likes().pending(), 50);
    }

    #[test]
    fn spawned_monster_scales_with_level() {
        let mut state = GameState::new(100);

        state.spawn_monster("Gloom Rat");

        assert_eq!(state.monster().hp(), 120);
        assert_eq!(state.monster().max_hp(), 120);
    }

    #[test]
    fn defeat_bonus_is_granted_once() {
        let mut state = GameState::new(100);
        state.spawn_monster("Gloom Rat");

        let first = state.damage_monster(150, 50);
        let second = state.damage_monster(10, 50);

        assert!(first.is_defeat());
        assert_eq!(second, MonsterDamageOutcome::NoMonster);
        assert_eq!(state.character().xp(), 50);
    }

    #[test]
    fn like_damage_can_defeat_monster() {
        let mut state = GameState::new(100);
        state.spawn_monster("Gloom Rat");
        let rules = GameConfig {
            like_damage_amount: 5,
            ..GameConfig::default()
        };

        let applied = state.apply_likes(30, &rules);

        // 150 damage against a 120 HP level-1 monster
        assert_eq!(applied.defeated.as_deref(), Some("Gloom Rat"));
        assert_eq!(applied.monster_damage, 120);
        assert_eq!(state.character().xp(), 50);
    }

    #[test]
    fn attack_without_monster_is_idle() {
        let mut state = GameState::new(100);
        assert_eq!(state.monster_attack(25), MonsterAttackOutcome::Idle);
        assert_eq!(state.character().hp(), 100);
    }

    #[test]
    fn attack_clamps_character_at_zero() {
        let mut state = GameState::new(100);
        state.character = Character::new().with_hp(10);
        state.spawn_monster("Gloom Rat");

        let outcome = state.monster_attack(25);

        assert_eq!(
            outcome,
            MonsterAttackOutcome::Hit {
                monster: "Gloom Rat".to_string(),
                damage: 25,
                remaining_hp: 0,
                still_alive: false,
            }
        );
    }

    #[test]
    fn defeated_monster_no_longer_attacks() {
        let mut state = GameState::new(100);
        state.spawn_monster("Gloom Rat");
        state.damage_monster(1_000, 50);

        assert_eq!(state.monster_attack(25), MonsterAttackOutcome::Idle);
    }
}
