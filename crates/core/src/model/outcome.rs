use serde::{Deserialize, Serialize};

use crate::model::catalog::Country;

/// Result of a single guess, shown to the player before the next round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The player found the flag; `score` already includes this round.
    Correct { score: u32 },
    /// The player tapped the flag of `tapped` instead.
    Wrong { tapped: Country },
}

impl GuessOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Correct { .. } => "Correct",
            Self::Wrong { .. } => "Wrong",
        }
    }

    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Correct { score } => format!("That's correct! Your score is now {score}"),
            Self::Wrong { tapped } => format!("Oops! That's the flag of {tapped}"),
        }
    }
}

/// Final result of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    final_score: u32,
    questions: u32,
}

impl GameSummary {
    #[must_use]
    pub fn new(final_score: u32, questions: u32) -> Self {
        Self {
            final_score,
            questions,
        }
    }

    #[must_use]
    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    #[must_use]
    pub fn questions(&self) -> u32 {
        self.questions
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        "Game Ended"
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!("Your final score is {}", self.final_score)
    }
}
