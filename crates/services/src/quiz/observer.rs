use quiz_core::model::Country;

/// Notification emitted after every state transition of a `QuizService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    SessionStarted,
    RoundStarted { question_number: u32 },
    ShowCorrect { score: u32 },
    ShowWrong { tapped: Country },
    ShowGameEnd { final_score: u32 },
}

/// Receives quiz transitions, e.g. to re-render or log.
pub trait QuizObserver: Send + Sync {
    fn notify(&self, event: &QuizEvent);
}

impl<F> QuizObserver for F
where
    F: Fn(&QuizEvent) + Send + Sync,
{
    fn notify(&self, event: &QuizEvent) {
        self(event);
    }
}

/// Logs each event through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl QuizObserver for TracingObserver {
    fn notify(&self, event: &QuizEvent) {
        match event {
            QuizEvent::SessionStarted => tracing::info!("quiz session started"),
            QuizEvent::RoundStarted { question_number } => {
                tracing::info!(question_number, "round started");
            }
            QuizEvent::ShowCorrect { score } => tracing::info!(score, "correct guess"),
            QuizEvent::ShowWrong { tapped } => {
                tracing::info!(tapped = %tapped, "wrong guess");
            }
            QuizEvent::ShowGameEnd { final_score } => {
                tracing::info!(final_score, "quiz session ended");
            }
        }
    }
}
