mod catalog;
mod outcome;
mod round;
mod settings;

pub use catalog::{Catalog, CatalogError, Country, SAMPLE_COUNTRIES};
pub use outcome::{GameSummary, GuessOutcome};
pub use round::{CHOICES_PER_ROUND, ChoiceIndex, Round, RoundError};
pub use settings::{
    DEFAULT_QUESTIONS_PER_SESSION, DEFAULT_REVEAL_DELAY_MS, QuizSettings, SettingsError,
};
