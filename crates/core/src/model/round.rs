use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::catalog::Country;

/// Number of flags shown per round.
pub const CHOICES_PER_ROUND: usize = 3;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("choice index {0} is out of range (expected 0..3)")]
    InvalidChoice(usize),

    #[error("country {name:?} is offered more than once")]
    DuplicateChoice { name: String },
}

//
// ─── CHOICE INDEX ──────────────────────────────────────────────────────────────
//

/// Position of a flag within a round, always in `0..CHOICES_PER_ROUND`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChoiceIndex(u8);

impl ChoiceIndex {
    pub const ALL: [ChoiceIndex; CHOICES_PER_ROUND] = [Self(0), Self(1), Self(2)];

    /// # Errors
    ///
    /// Returns `RoundError::InvalidChoice` if `index` is not 0, 1 or 2.
    pub fn new(index: usize) -> Result<Self, RoundError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(RoundError::InvalidChoice(index))
    }

    #[must_use]
    pub fn value(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<usize> for ChoiceIndex {
    type Error = RoundError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl fmt::Debug for ChoiceIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChoiceIndex({})", self.0)
    }
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// One question: three distinct countries in display order and the position of the answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    choices: [Country; CHOICES_PER_ROUND],
    correct: ChoiceIndex,
}

impl Round {
    /// # Errors
    ///
    /// Returns `RoundError::DuplicateChoice` if a country is offered twice.
    pub fn new(
        choices: [Country; CHOICES_PER_ROUND],
        correct: ChoiceIndex,
    ) -> Result<Self, RoundError> {
        for (i, country) in choices.iter().enumerate() {
            if choices[i + 1..].contains(country) {
                return Err(RoundError::DuplicateChoice {
                    name: country.as_str().to_string(),
                });
            }
        }
        Ok(Self::from_distinct(choices, correct))
    }

    // Callers guarantee the choices are pairwise distinct.
    pub(crate) fn from_distinct(
        choices: [Country; CHOICES_PER_ROUND],
        correct: ChoiceIndex,
    ) -> Self {
        Self { choices, correct }
    }

    #[must_use]
    pub fn choices(&self) -> &[Country; CHOICES_PER_ROUND] {
        &self.choices
    }

    #[must_use]
    pub fn choice(&self, index: ChoiceIndex) -> &Country {
        &self.choices[index.value()]
    }

    #[must_use]
    pub fn correct_index(&self) -> ChoiceIndex {
        self.correct
    }

    /// The country the player is asked to find.
    #[must_use]
    pub fn prompt(&self) -> &Country {
        self.choice(self.correct)
    }

    #[must_use]
    pub fn is_correct(&self, index: ChoiceIndex) -> bool {
        index == self.correct
    }
}
