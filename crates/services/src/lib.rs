#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;

pub use error::QuizError;
pub use quiz::{
    Advance, QuizEvent, QuizObserver, QuizPhase, QuizProgress, QuizService, RoundSource,
    ShuffledRounds, TracingObserver,
};
