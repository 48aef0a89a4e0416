pub mod answers;
pub mod graded_report;
pub mod quiz;
pub mod quiz_question;
pub mod session_state;
pub use answers::AnswerMap;
pub use graded_report::{GradedReport, GradedResult};
pub use quiz::Quiz;
pub use quiz_question::{Difficulty, QuizQuestion, QuizQuestionOption};
pub use session_state::{GenerationForm, PendingRequest, Phase, SessionEvent, SessionState};
