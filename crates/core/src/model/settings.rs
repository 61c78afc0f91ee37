use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_QUESTIONS_PER_SESSION: u32 = 8;
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 600;

const MAX_QUESTIONS_PER_SESSION: u32 = 100;
const MAX_REVEAL_DELAY_MS: u32 = 10_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("questions per session must be between 1 and 100")]
    InvalidQuestionsPerSession,

    #[error("reveal delay must be at most 10000 ms")]
    InvalidRevealDelay,
}

/// Tunables for a quiz session.
///
/// Defaults match the classic game: eight questions and a 600 ms pause between a tap
/// and its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSettings {
    questions_per_session: u32,
    reveal_delay_ms: u32,
}

impl QuizSettings {
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidQuestionsPerSession` if `questions_per_session` is
    /// outside `1..=100`, and `SettingsError::InvalidRevealDelay` if the delay exceeds 10 s.
    pub fn new(questions_per_session: u32, reveal_delay_ms: u32) -> Result<Self, SettingsError> {
        if !(1..=MAX_QUESTIONS_PER_SESSION).contains(&questions_per_session) {
            return Err(SettingsError::InvalidQuestionsPerSession);
        }
        if reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(SettingsError::InvalidRevealDelay);
        }
        Ok(Self {
            questions_per_session,
            reveal_delay_ms,
        })
    }

    #[must_use]
    pub fn questions_per_session(&self) -> u32 {
        self.questions_per_session
    }

    #[must_use]
    pub fn reveal_delay_ms(&self) -> u32 {
        self.reveal_delay_ms
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.reveal_delay_ms))
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            questions_per_session: DEFAULT_QUESTIONS_PER_SESSION,
            reveal_delay_ms: DEFAULT_REVEAL_DELAY_MS,
        }
    }
}
