//! Engine configuration.
//!
//! Everything is read from environment variables (a `.env` file at the repo
//! root is loaded first by `main`). Game balance values default to the fixed
//! constants of the game; service settings default to local endpoints except
//! the Gemini API key, which is required when Gemini narrates.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use survivor_domain::DEFAULT_MILESTONE_THRESHOLD;

use crate::infrastructure::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::infrastructure::ollama::{DEFAULT_OLLAMA_BASE_URL, DEFAULT_OLLAMA_MODEL};
use crate::infrastructure::state_files::DEFAULT_OVERLAY_DIR;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {var}: '{value}' ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

// ============================================================================
// Game balance
// ============================================================================

/// Game balance and pacing values.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Minimum time between two narration calls
    pub narration_cooldown: Duration,
    /// Upper bound on a single narration call
    pub narration_timeout: Duration,
    pub narration_temperature: f32,
    /// HP healed per like
    pub like_heal_amount: u32,
    /// Monster damage per like
    pub like_damage_amount: u32,
    pub milestone_threshold: u32,
    pub milestone_heal: u32,
    pub milestone_xp: u32,
    /// Monster damage per milestone crossed
    pub milestone_damage: u32,
    pub monster_attack_interval: Duration,
    pub monster_attack_damage: u32,
    /// XP granted once per monster defeated
    pub defeat_xp_bonus: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            narration_cooldown: Duration::from_secs(2),
            narration_timeout: Duration::from_secs(30),
            narration_temperature: 1.0,
            like_heal_amount: 1,
            like_damage_amount: 0,
            milestone_threshold: DEFAULT_MILESTONE_THRESHOLD,
            milestone_heal: 5,
            milestone_xp: 10,
            milestone_damage: 10,
            monster_attack_interval: Duration::from_secs(10),
            monster_attack_damage: 25,
            defeat_xp_bonus: 50,
        }
    }
}

// ============================================================================
// External services
// ============================================================================

/// Which backend produces narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NarrationProvider {
    #[default]
    Gemini,
    Ollama,
}

impl FromStr for NarrationProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "ollama" | "local" => Ok(Self::Ollama),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub narration_provider: NarrationProvider,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    /// Live channel whose events drive the game
    pub live_channel: String,
    /// Directory the overlay renderer reads from
    pub overlay_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            narration_provider: NarrationProvider::default(),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            live_channel: "@your_username".to_string(),
            overlay_dir: PathBuf::from(DEFAULT_OVERLAY_DIR),
        }
    }
}

// ============================================================================
// App config
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub services: ServiceConfig,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = AppConfig::default();
        let game = &mut config.game;
        let services = &mut config.services;

        if let Some(ms) = parse_var::<u64>(&get, "NARRATION_COOLDOWN_MS")? {
            game.narration_cooldown = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_var::<u64>(&get, "NARRATION_TIMEOUT_SECS")? {
            game.narration_timeout = Duration::from_secs(secs);
        }
        if let Some(v) = parse_var(&get, "LIKE_HEAL_AMOUNT")? {
            game.like_heal_amount = v;
        }
        if let Some(v) = parse_var(&get, "LIKE_DAMAGE_AMOUNT")? {
            game.like_damage_amount = v;
        }
        if let Some(v) = parse_var::<u32>(&get, "LIKE_MILESTONE_THRESHOLD")? {
            if v == 0 {
                return Err(ConfigError::Invalid {
                    var: "LIKE_MILESTONE_THRESHOLD",
                    value: v.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
            game.milestone_threshold = v;
        }
        if let Some(secs) = parse_var::<u64>(&get, "MONSTER_ATTACK_INTERVAL_SECS")? {
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    var: "MONSTER_ATTACK_INTERVAL_SECS",
                    value: secs.to_string(),
                    reason: "must be greater than zero".to_string(),
                });
            }
            game.monster_attack_interval = Duration::from_secs(secs);
        }
        if let Some(v) = parse_var(&get, "MONSTER_ATTACK_DAMAGE")? {
            game.monster_attack_damage = v;
        }

        if let Some(raw) = get("NARRATION_PROVIDER") {
            services.narration_provider =
                raw.parse().map_err(|_| ConfigError::Invalid {
                    var: "NARRATION_PROVIDER",
                    value: raw.clone(),
                    reason: "expected 'gemini' or 'ollama'".to_string(),
                })?;
        }
        services.gemini_api_key = get("GEMINI_API_KEY");
        if services.narration_provider == NarrationProvider::Gemini
            && services.gemini_api_key.is_none()
        {
            return Err(ConfigError::Missing("GEMINI_API_KEY"));
        }
        if let Some(v) = get("GEMINI_MODEL") {
            services.gemini_model = v;
        }
        if let Some(v) = get("GEMINI_BASE_URL") {
            services.gemini_base_url = v;
        }
        if let Some(v) = get("OLLAMA_BASE_URL").or_else(|| get("OLLAMA_URL")) {
            services.ollama_base_url = v;
        }
        if let Some(v) = get("OLLAMA_MODEL") {
            services.ollama_model = v;
        }
        if let Some(v) = get("LIVE_CHANNEL") {
            services.live_channel = v;
        }
        if let Some(v) = get("OVERLAY_DIR") {
            services.overlay_dir = PathBuf::from(v);
        }

        Ok(config)
    }
}

fn parse_var<T>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|e| ConfigError::Invalid {
                var,
                value: raw.clone(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_match_game_constants() {
        let config =
            AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "secret")])).expect("valid");

        assert_eq!(config.game.narration_cooldown, Duration::from_secs(2));
        assert_eq!(config.game.monster_attack_interval, Duration::from_secs(10));
        assert_eq!(config.game.monster_attack_damage, 25);
        assert_eq!(config.game.milestone_threshold, 100);
        assert_eq!(config.game.like_heal_amount, 1);
        assert_eq!(config.game.defeat_xp_bonus, 50);
        assert_eq!(config.services.narration_provider, NarrationProvider::Gemini);
        assert_eq!(config.services.gemini_api_key.as_deref(), Some("secret"));
        assert_eq!(config.services.overlay_dir, PathBuf::from("obs_files"));
    }

    #[test]
    fn gemini_without_key_is_fatal() {
        let result = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")]));
        assert_eq!(result, Err(ConfigError::Missing("GEMINI_API_KEY")));
    }

    #[test]
    fn ollama_narration_needs_no_key() {
        let config = AppConfig::from_lookup(lookup(&[
            ("NARRATION_PROVIDER", "Ollama"),
            ("OLLAMA_URL", "http://gpu-box:11434"),
        ]))
        .expect("valid");

        assert_eq!(config.services.narration_provider, NarrationProvider::Ollama);
        assert_eq!(config.services.ollama_base_url, "http://gpu-box:11434");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("NARRATION_COOLDOWN_MS", "500"),
            ("LIKE_DAMAGE_AMOUNT", "2"),
            ("LIKE_MILESTONE_THRESHOLD", "50"),
            ("MONSTER_ATTACK_INTERVAL_SECS", "3"),
            ("LIVE_CHANNEL", "@dungeon"),
        ]))
        .expect("valid");

        assert_eq!(config.game.narration_cooldown, Duration::from_millis(500));
        assert_eq!(config.game.like_damage_amount, 2);
        assert_eq!(config.game.milestone_threshold, 50);
        assert_eq!(config.game.monster_attack_interval, Duration::from_secs(3));
        assert_eq!(config.services.live_channel, "@dungeon");
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        let result = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("MONSTER_ATTACK_DAMAGE", "-5"),
        ]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                var: "MONSTER_ATTACK_DAMAGE",
                ..
            })
        ));
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let result = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("LIKE_MILESTONE_THRESHOLD", "0"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let result = AppConfig::from_lookup(lookup(&[("NARRATION_PROVIDER", "gpt")]));
        assert!(matches!(
            result,
            Err(ConfigError::Invalid {
                var: "NARRATION_PROVIDER",
                ..
            })
        ));
    }
}
