mod observer;
mod progress;
mod service;
mod source;

// Public API of the quiz subsystem.
pub use crate::error::QuizError;
pub use observer::{QuizEvent, QuizObserver, TracingObserver};
pub use progress::QuizProgress;
pub use service::{Advance, QuizPhase, QuizService};
pub use source::{RoundSource, ShuffledRounds};
