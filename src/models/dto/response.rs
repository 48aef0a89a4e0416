use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{
    AnswerMap, Difficulty, GradedReport, PendingRequest, Phase, QuizQuestion, QuizQuestionOption,
};
use crate::services::quiz_session::QuizSession;

/// Success body of the generation service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateQuizResponse {
    pub questions: Vec<QuizQuestion>,
}

/// Failure body of either collaborator.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceErrorBody {
    pub error: String,
}

/// A question as the player sees it: grading metadata is left out.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizQuestionOption>,
}

impl From<&QuizQuestion> for QuestionView {
    fn from(question: &QuizQuestion) -> Self {
        QuestionView {
            id: question.id.clone(),
            prompt: question.prompt.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: Uuid,
    pub phase: Phase,
    pub topic: String,
    pub count: i32,
    pub difficulty: Difficulty,
    pub questions: Vec<QuestionView>,
    pub answers: AnswerMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<GradedReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Set while the quiz service is working on this session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<PendingRequest>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&QuizSession> for SessionView {
    fn from(session: &QuizSession) -> Self {
        let state = session.state();
        SessionView {
            id: session.id(),
            phase: state.phase(),
            topic: state.form().topic.clone(),
            count: state.form().count,
            difficulty: state.form().difficulty,
            questions: state
                .quiz()
                .map(|quiz| quiz.questions().iter().map(QuestionView::from).collect())
                .unwrap_or_default(),
            answers: state.answers().clone(),
            report: state.report().cloned(),
            error: state.error().map(str::to_string),
            pending: state.pending(),
            created_at: session.created_at(),
            updated_at: session.updated_at(),
        }
    }
}
