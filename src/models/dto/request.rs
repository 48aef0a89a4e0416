use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::session_state::DEFAULT_QUESTION_COUNT;
use crate::models::domain::{AnswerMap, Difficulty, GenerationForm, Quiz, QuizQuestion};

pub const MAX_TOPIC_LENGTH: u64 = 200;

fn default_question_count() -> i32 {
    DEFAULT_QUESTION_COUNT
}

/// Body of `POST /api/sessions/{id}/generate`.
///
/// Only transport limits are checked here; topic and count rules belong to
/// the session so that their failures show up in its state.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(
        max = MAX_TOPIC_LENGTH,
        message = "The topic can be at most 200 characters long."
    ))]
    pub topic: String,

    #[serde(default = "default_question_count")]
    pub count: i32,

    #[serde(default)]
    pub difficulty: Difficulty,
}

impl From<GenerateQuizRequest> for GenerationForm {
    fn from(request: GenerateQuizRequest) -> Self {
        GenerationForm {
            topic: request.topic,
            count: request.count,
            difficulty: request.difficulty,
        }
    }
}

/// Body of `PUT /api/sessions/{id}/answers/{question_id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordAnswerRequest {
    #[validate(length(equal = 1, message = "An answer must be a single option letter."))]
    pub letter: String,
}

impl RecordAnswerRequest {
    pub fn letter(&self) -> Option<char> {
        self.letter.chars().next()
    }
}

/// Sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerateQuizPayload {
    pub topic: String,
    pub count: u32,
    pub difficulty: Difficulty,
}

/// Sent to the grading service. Carries the full questions because the
/// grader keeps nothing from the generation step.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SubmitQuizPayload {
    pub answers: AnswerMap,
    pub questions: Vec<QuizQuestion>,
}

impl SubmitQuizPayload {
    pub fn new(quiz: &Quiz, answers: &AnswerMap) -> Self {
        Self {
            answers: answers.clone(),
            questions: quiz.questions().to_vec(),
        }
    }
}
