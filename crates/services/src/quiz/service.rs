use std::sync::Arc;

use quiz_core::model::{
    CHOICES_PER_ROUND, Catalog, ChoiceIndex, Country, GameSummary, GuessOutcome, QuizSettings,
    Round,
};

use super::observer::{QuizEvent, QuizObserver};
use super::progress::QuizProgress;
use super::source::{RoundSource, ShuffledRounds};
use crate::error::QuizError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Where the quiz currently is in its guess / result / end cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    /// The current round is waiting for a tap.
    AwaitingGuess,
    /// The round was answered; the outcome waits for acknowledgement.
    Resolved(GuessOutcome),
    /// The last question was acknowledged; the summary waits for a restart.
    SessionEnded(GameSummary),
}

/// What acknowledging a result led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    NextRound { question_number: u32 },
    SessionEnded(GameSummary),
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Flag quiz state machine.
///
/// Owns the catalog, the current round and the session counters. All mutating calls are
/// synchronous; a rejected call returns a `QuizError` and leaves every field untouched.
pub struct QuizService {
    catalog: Catalog,
    settings: QuizSettings,
    source: Box<dyn RoundSource>,
    observers: Vec<Arc<dyn QuizObserver>>,
    round: Round,
    score: u32,
    question_number: u32,
    phase: QuizPhase,
}

impl QuizService {
    /// Creates a quiz drawing rounds from an OS-seeded generator and starts the first session.
    #[must_use]
    pub fn new(catalog: Catalog, settings: QuizSettings) -> Self {
        Self::with_source(catalog, settings, Box::new(ShuffledRounds::from_entropy()))
    }

    /// Creates a quiz drawing rounds from `source` and starts the first session.
    #[must_use]
    pub fn with_source(
        catalog: Catalog,
        settings: QuizSettings,
        mut source: Box<dyn RoundSource>,
    ) -> Self {
        let round = source.draw(&catalog);
        Self {
            catalog,
            settings,
            source,
            observers: Vec::new(),
            round,
            score: 0,
            question_number: 1,
            phase: QuizPhase::AwaitingGuess,
        }
    }

    /// Registers an observer for all subsequent transitions.
    pub fn subscribe(&mut self, observer: Arc<dyn QuizObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The country the player is asked to find.
    #[must_use]
    pub fn prompt(&self) -> &Country {
        self.round.prompt()
    }

    #[must_use]
    pub fn choices(&self) -> &[Country; CHOICES_PER_ROUND] {
        self.round.choices()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// 1-based number of the current question.
    #[must_use]
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub fn questions_per_session(&self) -> u32 {
        self.settings.questions_per_session()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::SessionEnded(_))
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            score: self.score,
            question_number: self.question_number,
            questions_per_session: self.questions_per_session(),
            is_finished: self.is_finished(),
        }
    }

    /// Resets the counters and draws a fresh round.
    pub fn start_session(&mut self) {
        self.score = 0;
        self.question_number = 1;
        self.round = self.source.draw(&self.catalog);
        self.phase = QuizPhase::AwaitingGuess;
        tracing::debug!(prompt = %self.round.prompt(), "session started");
        self.emit(&QuizEvent::SessionStarted);
    }

    /// Resolves the current round with the flag at `index`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAwaitingGuess` unless a round is open, and
    /// `QuizError::InvalidChoice` if `index` is not 0, 1 or 2.
    pub fn submit_guess(&mut self, index: usize) -> Result<GuessOutcome, QuizError> {
        if self.phase != QuizPhase::AwaitingGuess {
            tracing::warn!(index, "guess rejected: no open round");
            return Err(QuizError::NotAwaitingGuess);
        }
        let Ok(choice) = ChoiceIndex::new(index) else {
            tracing::warn!(index, "guess rejected: choice out of range");
            return Err(QuizError::InvalidChoice { index });
        };

        let outcome = if self.round.is_correct(choice) {
            self.score = self.score.saturating_add(1);
            GuessOutcome::Correct { score: self.score }
        } else {
            GuessOutcome::Wrong {
                tapped: self.round.choice(choice).clone(),
            }
        };

        tracing::debug!(
            question_number = self.question_number,
            correct = outcome.is_correct(),
            "round resolved"
        );
        self.phase = QuizPhase::Resolved(outcome.clone());
        let event = match &outcome {
            GuessOutcome::Correct { score } => QuizEvent::ShowCorrect { score: *score },
            GuessOutcome::Wrong { tapped } => QuizEvent::ShowWrong {
                tapped: tapped.clone(),
            },
        };
        self.emit(&event);
        Ok(outcome)
    }

    /// Moves past a resolved round: draws the next one, or ends the session after the
    /// last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotResolved` unless a guess is waiting for acknowledgement.
    pub fn acknowledge_result(&mut self) -> Result<Advance, QuizError> {
        if !matches!(self.phase, QuizPhase::Resolved(_)) {
            tracing::warn!("acknowledge rejected: no resolved round");
            return Err(QuizError::NotResolved);
        }

        if self.question_number >= self.questions_per_session() {
            let summary = GameSummary::new(self.score, self.question_number);
            self.phase = QuizPhase::SessionEnded(summary);
            tracing::debug!(final_score = self.score, "session ended");
            self.emit(&QuizEvent::ShowGameEnd {
                final_score: self.score,
            });
            return Ok(Advance::SessionEnded(summary));
        }

        self.question_number += 1;
        self.round = self.source.draw(&self.catalog);
        self.phase = QuizPhase::AwaitingGuess;
        tracing::debug!(
            question_number = self.question_number,
            prompt = %self.round.prompt(),
            "next round drawn"
        );
        self.emit(&QuizEvent::RoundStarted {
            question_number: self.question_number,
        });
        Ok(Advance::NextRound {
            question_number: self.question_number,
        })
    }

    /// Dismisses the game summary and starts over.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotEnded` unless the session has ended.
    pub fn acknowledge_end(&mut self) -> Result<(), QuizError> {
        if !self.is_finished() {
            tracing::warn!("restart rejected: session still running");
            return Err(QuizError::NotEnded);
        }
        self.start_session();
        Ok(())
    }

    fn emit(&self, event: &QuizEvent) {
        for observer in &self.observers {
            observer.notify(event);
        }
    }
}
