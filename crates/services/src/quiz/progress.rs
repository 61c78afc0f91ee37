/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub score: u32,
    pub question_number: u32,
    pub questions_per_session: u32,
    pub is_finished: bool,
}
