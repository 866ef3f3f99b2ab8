//! Gift catalog - fixed HP/XP/flavor payloads keyed by gift name

use serde::Serialize;

/// What a single gift does to the survivor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GiftEffect {
    pub hp: u32,
    pub xp: u32,
    /// Flavor text describing what the survivor does with the gift
    pub action: &'static str,
}

/// Payload for gifts that are not in the catalog.
pub const DEFAULT_GIFT: GiftEffect = GiftEffect {
    hp: 5,
    xp: 10,
    action: "puts this mysterious gift to clever use",
};

const GIFT_CATALOG: &[(&str, GiftEffect)] = &[
    // Common gifts
    (
        "Rose",
        GiftEffect {
            hp: 5,
            xp: 10,
            action: "strikes a monster with the enchanted rose",
        },
    ),
    (
        "TikTok",
        GiftEffect {
            hp: 3,
            xp: 5,
            action: "raises the glowing logo as a magic shield",
        },
    ),
    (
        "Heart",
        GiftEffect {
            hp: 8,
            xp: 15,
            action: "absorbs the heart's energy to recover",
        },
    ),
    (
        "Finger Heart",
        GiftEffect {
            hp: 5,
            xp: 8,
            action: "casts a charm spell to calm the monsters",
        },
    ),
    // Mid-tier gifts
    (
        "Perfume",
        GiftEffect {
            hp: 15,
            xp: 30,
            action: "sprays the perfume to put the guards to sleep",
        },
    ),
    (
        "Football",
        GiftEffect {
            hp: 12,
            xp: 25,
            action: "kicks the ball to spring a trap from afar",
        },
    ),
    (
        "Sunglasses",
        GiftEffect {
            hp: 10,
            xp: 20,
            action: "puts on the sunglasses to spot secret passages",
        },
    ),
    // Rare gifts
    (
        "Swan",
        GiftEffect {
            hp: 25,
            xp: 50,
            action: "rides the swan across a river of lava",
        },
    ),
    (
        "Gaming Keyboard",
        GiftEffect {
            hp: 20,
            xp: 45,
            action: "hacks the dungeon's security system",
        },
    ),
    // Epic gifts
    (
        "Lion",
        GiftEffect {
            hp: 40,
            xp: 100,
            action: "summons a spirit lion that crushes the enemies",
        },
    ),
    (
        "Falcon",
        GiftEffect {
            hp: 35,
            xp: 90,
            action: "sends the falcon scouting to avoid the traps",
        },
    ),
    (
        "Drama Queen",
        GiftEffect {
            hp: 50,
            xp: 120,
            action: "channels pure drama to blast through a wall",
        },
    ),
];

/// Look up a gift by its exact name.
pub fn find_gift(name: &str) -> Option<GiftEffect> {
    GIFT_CATALOG
        .iter()
        .find(|(gift_name, _)| *gift_name == name)
        .map(|(_, effect)| *effect)
}

/// Look up a gift, falling back to `DEFAULT_GIFT` for unknown names.
pub fn gift_effect(name: &str) -> GiftEffect {
    find_gift(name).unwrap_or(DEFAULT_GIFT)
}
