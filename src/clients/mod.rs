pub mod http;
pub mod quiz_generator;
pub mod quiz_grader;

pub use http::build_http_client;
pub use quiz_generator::{HttpQuizGenerator, QuizGenerator};
pub use quiz_grader::{HttpQuizGrader, QuizGrader};
