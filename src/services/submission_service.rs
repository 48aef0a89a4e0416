use std::sync::Arc;

use crate::{
    clients::QuizGrader,
    constants::messages,
    errors::SubmissionError,
    models::{
        domain::{AnswerMap, GradedReport, Quiz},
        dto::request::SubmitQuizPayload,
    },
};

pub struct SubmissionService {
    grader: Arc<dyn QuizGrader>,
}

impl SubmissionService {
    pub fn new(grader: Arc<dyn QuizGrader>) -> Self {
        Self { grader }
    }

    /// Sends a fully answered quiz for grading. An unanswered question fails
    /// right away without contacting the grader.
    pub async fn submit(
        &self,
        quiz: &Quiz,
        answers: &AnswerMap,
    ) -> Result<GradedReport, SubmissionError> {
        if !answers.is_complete(quiz) {
            log::debug!(
                "Refusing submission with {} of {} questions answered",
                quiz.len() - quiz.unanswered(answers).count(),
                quiz.len()
            );
            return Err(SubmissionError::Incomplete(
                messages::ANSWER_ALL_QUESTIONS.to_string(),
            ));
        }

        let report = self
            .grader
            .grade_quiz(SubmitQuizPayload::new(quiz, answers))
            .await
            .map_err(|e| {
                log::warn!("Quiz grading failed: {}", e);
                SubmissionError::ServiceFailure(
                    e.reason()
                        .unwrap_or(messages::GRADING_UNAVAILABLE)
                        .to_string(),
                )
            })?;

        if report.total() != quiz.len() {
            log::warn!(
                "Grading returned {} results for a quiz of {} questions",
                report.total(),
                quiz.len()
            );
        }
        if report.score as usize != report.correct_count() {
            log::warn!(
                "Grading score {} disagrees with {} correct results",
                report.score,
                report.correct_count()
            );
        }

        log::info!("Quiz graded: {}", report);
        Ok(report)
    }
}
