use std::sync::Arc;

use quiz_core::model::{Catalog, QuizSettings};
use services::{QuizService, ShuffledRounds, TracingObserver};

/// What the composition root (e.g. `crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Catalog;
    fn settings(&self) -> QuizSettings;
    /// Fixed seed for reproducible rounds; `None` seeds from the OS.
    fn round_seed(&self) -> Option<u64>;
    /// Directory flag images are served from.
    fn flags_dir(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Catalog,
    settings: QuizSettings,
    round_seed: Option<u64>,
    flags_dir: Arc<str>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            settings: app.settings(),
            round_seed: app.round_seed(),
            flags_dir: Arc::from(app.flags_dir()),
        }
    }

    #[must_use]
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn flags_dir(&self) -> &str {
        &self.flags_dir
    }

    /// Builds a fresh quiz for a view, with transitions logged.
    #[must_use]
    pub fn new_quiz(&self) -> QuizService {
        let source = match self.round_seed {
            Some(seed) => ShuffledRounds::seeded(seed),
            None => ShuffledRounds::from_entropy(),
        };
        let mut quiz =
            QuizService::with_source(self.catalog.clone(), self.settings, Box::new(source));
        quiz.subscribe(Arc::new(TracingObserver));
        quiz
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
