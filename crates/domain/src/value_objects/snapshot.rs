//! Game snapshot - the read model handed to the persistence sink

use serde::{Deserialize, Serialize};

use crate::aggregates::{Character, LikeMilestones, Monster};

/// Monster part of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSnapshot {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub is_alive: bool,
}

/// Everything the overlay needs to render the current game state.
///
/// The field names are the JSON contract with the overlay renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub hp: u32,
    pub max_hp: u32,
    pub xp: u32,
    pub xp_for_next_level: u32,
    pub level: u32,
    pub recent_items: Vec<String>,
    pub last_action: String,
    pub total_likes: u64,
    pub likes_to_next_milestone: u32,
    /// `None` until the first monster has been spawned
    pub monster: Option<MonsterSnapshot>,
}

impl GameSnapshot {
    pub fn capture(
        character: &Character,
        monster: &Monster,
        likes: &LikeMilestones,
        last_action: &str,
    ) -> Self {
        Self {
            hp: character.hp(),
            max_hp: character.max_hp(),
            xp: character.xp(),
            xp_for_next_level: character.xp_for_next_level(),
            level: character.level(),
            recent_items: character.recent_items().map(str::to_owned).collect(),
            last_action: last_action.to_owned(),
            total_likes: likes.total_likes(),
            likes_to_next_milestone: likes.likes_to_next_milestone(),
            monster: monster.name().map(|name| MonsterSnapshot {
                name: name.to_owned(),
                hp: monster.hp(),
                max_hp: monster.max_hp(),
                is_alive: monster.is_active(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monster_is_null_before_first_spawn() {
        let snapshot = GameSnapshot::capture(
            &Character::new(),
            &Monster::new(),
            &LikeMilestones::default(),
            "waiting",
        );

        let json = serde_json::to_value(&snapshot).expect("snapshot serializes");
        assert!(json["monster"].is_null());
        assert_eq!(json["likes_to_next_milestone"], 100);
        assert_eq!(json["xp_for_next_level"], 100);
        assert_eq!(json["last_action"], "waiting");
    }

    #[test]
    fn defeated_monster_is_kept_with_is_alive_false() {
        let mut monster = Monster::new();
        monster.spawn("Cave Troll", 1);
        monster.damage(500);

        let snapshot = GameSnapshot::capture(
            &Character::new(),
            &monster,
            &LikeMilestones::default(),
            "",
        );

        assert_eq!(
            snapshot.monster,
            Some(MonsterSnapshot {
                name: "Cave Troll".to_string(),
                hp: 0,
                max_hp: 120,
                is_alive: false,
            })
        );
    }

    #[test]
    fn recent_items_are_copied_oldest_first() {
        let mut character = Character::new();
        character.record_item("Rose");
        character.record_item("Lion");

        let snapshot =
            GameSnapshot::capture(&character, &Monster::new(), &LikeMilestones::default(), "");
        assert_eq!(snapshot.recent_items, vec!["Rose", "Lion"]);
    }
}
