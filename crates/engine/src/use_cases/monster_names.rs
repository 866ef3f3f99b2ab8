//! Monster name generation.
//!
//! Names come from the local LLM. When it is unreachable, slow, or answers
//! with something unusable, a name is picked from a small fixed list instead.

use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;

use crate::infrastructure::ports::{LlmError, LlmPort, LlmRequest};
use crate::prompt_templates::{monster_name_prompt, MONSTER_NAME_SYSTEM_PROMPT};

pub const FALLBACK_MONSTER_NAMES: [&str; 2] = ["Looming Shadow", "The Beast"];

const MAX_NAME_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonsterName {
    Generated(String),
    Fallback(&'static str),
}

impl MonsterName {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Generated(name) => name.as_str(),
            Self::Fallback(name) => name,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

pub struct MonsterNamer {
    llm: Arc<dyn LlmPort>,
    timeout: Duration,
}

impl MonsterNamer {
    pub fn new(llm: Arc<dyn LlmPort>, timeout: Duration) -> Self {
        Self { llm, timeout }
    }

    pub async fn generate(&self, character_level: u32) -> MonsterName {
        let request = LlmRequest::new(monster_name_prompt(character_level))
            .with_system_prompt(MONSTER_NAME_SYSTEM_PROMPT)
            .with_temperature(1.0)
            .with_max_tokens(Some(20));

        let result = match tokio::time::timeout(self.timeout, self.llm.generate(request)).await {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout(self.timeout.as_secs())),
        };

        match result {
            Ok(response) => match clean_name(&response.content) {
                Some(name) => MonsterName::Generated(name),
                None => {
                    tracing::warn!(raw = %response.content, "Unusable monster name, using fallback");
                    fallback_name()
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "Monster name generation failed, using fallback");
                fallback_name()
            }
        }
    }
}

fn fallback_name() -> MonsterName {
    let name = FALLBACK_MONSTER_NAMES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(FALLBACK_MONSTER_NAMES[0]);
    MonsterName::Fallback(name)
}

/// First non-empty line, stripped of quotes and trailing punctuation.
fn clean_name(raw: &str) -> Option<String> {
    let line = raw.lines().map(str::trim).find(|l| !l.is_empty())?;
    let name = line
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '*' | '`'))
        .trim_end_matches(['.', '!', ':'])
        .trim();

    if name.is_empty() {
        return None;
    }
    Some(name.chars().take(MAX_NAME_CHARS).collect())
}
