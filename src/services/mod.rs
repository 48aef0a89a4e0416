pub mod generation_service;
pub mod quiz_session;
pub mod session_store;
pub mod submission_service;

pub use generation_service::GenerationService;
pub use quiz_session::QuizSession;
pub use session_store::{SessionStore, SharedSession};
pub use submission_service::SubmissionService;
