use quiz_core::model::Country;
use services::{Advance, QuizPhase, QuizService};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Tap(usize),
    Continue,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogAction {
    Continue,
    Restart,
}

impl DialogAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Continue => "Continue",
            Self::Restart => "Restart",
        }
    }

    #[must_use]
    pub fn intent(self) -> QuizIntent {
        match self {
            Self::Continue => QuizIntent::Continue,
            Self::Restart => QuizIntent::Restart,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogVm {
    pub title: String,
    pub message: String,
    pub action: DialogAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlagVm {
    pub index: usize,
    pub name: String,
    pub image_src: String,
    pub tapped: bool,
    pub dimmed: bool,
}

/// Everything the quiz view needs for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub prompt: String,
    pub score_label: String,
    pub question_label: String,
    pub flags: Vec<FlagVm>,
    pub dialog: Option<DialogVm>,
}

#[must_use]
pub fn flag_image_src(flags_dir: &str, country: &Country) -> String {
    let dir = flags_dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("{country}.png")
    } else {
        format!("{dir}/{country}.png")
    }
}

/// Presentation state layered over a `QuizService`.
///
/// The result dialog is kept closed after a tap until `reveal` is called, so the view can
/// pace it; the game-end dialog opens as soon as the last result is acknowledged.
pub struct QuizVm {
    quiz: QuizService,
    flags_dir: String,
    tapped: Option<usize>,
    dialog_open: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: QuizService, flags_dir: impl Into<String>) -> Self {
        Self {
            quiz,
            flags_dir: flags_dir.into(),
            tapped: None,
            dialog_open: false,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &QuizService {
        &self.quiz
    }

    #[must_use]
    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Applies an intent. Returns `false` when the quiz rejected it.
    pub fn dispatch(&mut self, intent: QuizIntent) -> bool {
        match intent {
            QuizIntent::Tap(index) => self.tap(index),
            QuizIntent::Continue => self.continue_round(),
            QuizIntent::Restart => self.restart(),
        }
    }

    pub fn tap(&mut self, index: usize) -> bool {
        if self.quiz.submit_guess(index).is_err() {
            return false;
        }
        self.tapped = Some(index);
        self.dialog_open = false;
        true
    }

    /// Shows the pending result dialog.
    pub fn reveal(&mut self) {
        if matches!(self.quiz.phase(), QuizPhase::Resolved(_)) {
            self.dialog_open = true;
        }
    }

    pub fn continue_round(&mut self) -> bool {
        match self.quiz.acknowledge_result() {
            Ok(Advance::NextRound { .. }) => {
                self.tapped = None;
                self.dialog_open = false;
                true
            }
            Ok(Advance::SessionEnded(_)) => {
                self.tapped = None;
                self.dialog_open = true;
                true
            }
            Err(_) => false,
        }
    }

    pub fn restart(&mut self) -> bool {
        if self.quiz.acknowledge_end().is_err() {
            return false;
        }
        self.tapped = None;
        self.dialog_open = false;
        true
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreenVm {
        let flags = self
            .quiz
            .choices()
            .iter()
            .enumerate()
            .map(|(index, country)| FlagVm {
                index,
                name: country.as_str().to_string(),
                image_src: flag_image_src(&self.flags_dir, country),
                tapped: self.tapped == Some(index),
                dimmed: self.tapped.is_some_and(|tapped| tapped != index),
            })
            .collect();

        let progress = self.quiz.progress();
        QuizScreenVm {
            prompt: self.quiz.prompt().as_str().to_string(),
            score_label: format!("Score: {}", progress.score),
            question_label: format!(
                "Question {}/{}",
                progress.question_number, progress.questions_per_session
            ),
            flags,
            dialog: self.dialog(),
        }
    }

    fn dialog(&self) -> Option<DialogVm> {
        if !self.dialog_open {
            return None;
        }
        match self.quiz.phase() {
            QuizPhase::AwaitingGuess => None,
            QuizPhase::Resolved(outcome) => Some(DialogVm {
                title: outcome.title().to_string(),
                message: outcome.message(),
                action: DialogAction::Continue,
            }),
            QuizPhase::SessionEnded(summary) => Some(DialogVm {
                title: summary.title().to_string(),
                message: summary.message(),
                action: DialogAction::Restart,
            }),
        }
    }
}
