//! Prompt templates for narration and monster names.

use survivor_domain::{GiftApplied, GiftEffect, MilestoneReached};

/// Persona given to the narration model.
pub const NARRATOR_SYSTEM_PROMPT: &str = "You are a brave adventurer trapped in the Live Dungeon, \
a mysterious maze full of dangers. Your survival depends entirely on the viewers watching you live.

IMPORTANT RULES:
- Always answer in 1-2 sentences maximum (short and punchy)
- Be funny, lively and reactive
- Thank the viewers for what they do
- Always mention the name of the user who helps you
- Briefly describe what you do with the item or help you received
- Stay in character as an adventurer in a fantasy dungeon

Examples of good answers:
- \"Thanks @Jean for the Rose! I use it to charm a goblin and he lets me through. +10 HP!\"
- \"@Marie sends me a Heart! I turn it into an energy shield. I feel invincible! +5 HP!\"
- \"The likes keep pouring in! The positive energy slowly heals me... +2 HP\"";

/// Shown on the overlay while the narration service is unavailable.
pub const FALLBACK_NARRATION: &str = "The adventurer is momentarily dazed... (narration unavailable)";

/// Initial `last_action` before any event arrives.
pub const OPENING_ACTION: &str = "The adventure begins! Waiting for viewers...";

pub fn gift_prompt(user: &str, gift_name: &str, effect: &GiftEffect, applied: &GiftApplied) -> String {
    let level_info = if applied.leveled_up {
        format!(" LEVEL UP! Level {}!", applied.level)
    } else {
        String::new()
    };

    format!(
        "The user @{user} sends you a gift: {gift_name}.\n\
         You {action}.\n\
         You gain {hp} HP and {xp} XP.{level_info}\n\n\
         Answer in 1-2 sentences maximum. Thank @{user} and briefly describe your action.",
        action = effect.action,
        hp = applied.hp_gained,
        xp = applied.xp_gained,
    )
}

pub fn milestone_prompt(milestone: &MilestoneReached) -> String {
    let level_info = if milestone.leveled_up {
        " You even level up!"
    } else {
        ""
    };

    format!(
        "The viewers have sent you {total} likes in total!\n\
         This wave of positive energy heals you. +{hp} HP, +{xp} XP!{level_info}\n\n\
         React with enthusiasm in 1-2 sentences.",
        total = milestone.total_likes,
        hp = milestone.hp_gained,
        xp = milestone.xp_gained,
    )
}

pub fn defeat_prompt(monster: &str, xp_bonus: u32) -> String {
    format!(
        "With the viewers' help you have defeated {monster}! You gain {xp_bonus} XP.\n\n\
         Celebrate your victory in 1-2 sentences."
    )
}

pub const MONSTER_NAME_SYSTEM_PROMPT: &str =
    "You name monsters for a dark fantasy dungeon game. Answer with the name only.";

pub fn monster_name_prompt(character_level: u32) -> String {
    format!(
        "Invent a short, menacing name (2 to 4 words) for a dungeon monster \
         facing a level {character_level} adventurer. Answer with the name only, \
         no quotes, no explanation."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use survivor_domain::gift_effect;

    #[test]
    fn gift_prompt_mentions_user_action_and_level_up() {
        let effect = gift_effect("Lion");
        let applied = GiftApplied {
            hp_gained: 0,
            xp_gained: 100,
            leveled_up: true,
            level: 2,
        };

        let prompt = gift_prompt("vip", "Lion", &effect, &applied);

        assert!(prompt.contains("@vip"));
        assert!(prompt.contains("Lion"));
        assert!(prompt.contains(effect.action));
        assert!(prompt.contains("You gain 0 HP and 100 XP."));
        assert!(prompt.contains("LEVEL UP! Level 2!"));
    }

    #[test]
    fn gift_prompt_without_level_up_has_no_banner() {
        let effect = gift_effect("Rose");
        let applied = GiftApplied {
            hp_gained: 5,
            xp_gained: 10,
            leveled_up: false,
            level: 1,
        };

        assert!(!gift_prompt("jean", "Rose", &effect, &applied).contains("LEVEL UP"));
    }

    #[test]
    fn milestone_prompt_reports_cumulative_likes() {
        let prompt = milestone_prompt(&MilestoneReached {
            total_likes: 200,
            hp_gained: 5,
            xp_gained: 10,
            leveled_up: false,
        });
        assert!(prompt.contains("200 likes in total"));
    }
}
