use std::sync::Arc;

use crate::{
    clients::QuizGenerator,
    constants::messages,
    errors::GenerationError,
    models::{
        domain::{
            quiz::{MAX_QUESTION_COUNT, MIN_QUESTION_COUNT},
            Difficulty, Quiz,
        },
        dto::request::GenerateQuizPayload,
    },
};

pub struct GenerationService {
    generator: Arc<dyn QuizGenerator>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn QuizGenerator>) -> Self {
        Self { generator }
    }

    /// Validates the request locally, then asks the generation service for a quiz.
    /// Invalid input never reaches the service.
    pub async fn generate(
        &self,
        topic: &str,
        count: i32,
        difficulty: Difficulty,
    ) -> Result<Quiz, GenerationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(GenerationError::InvalidInput(messages::EMPTY_TOPIC.to_string()));
        }

        let count = usize::try_from(count)
            .ok()
            .filter(|count| (MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(count))
            .ok_or_else(|| {
                GenerationError::InvalidInput(messages::COUNT_OUT_OF_RANGE.to_string())
            })?;

        log::info!(
            "Requesting {} {} questions about '{}'",
            count,
            difficulty,
            topic
        );

        let request = GenerateQuizPayload {
            topic: topic.to_string(),
            count: count as u32,
            difficulty,
        };

        let questions = self.generator.generate_quiz(request).await.map_err(|e| {
            log::warn!("Quiz generation failed for '{}': {}", topic, e);
            GenerationError::ServiceFailure(
                e.reason()
                    .unwrap_or(messages::GENERATION_UNAVAILABLE)
                    .to_string(),
            )
        })?;

        Quiz::from_generated(questions, count).map_err(|e| {
            log::warn!("Discarding malformed quiz for '{}': {}", topic, e);
            GenerationError::ServiceFailure(messages::MALFORMED_QUIZ.to_string())
        })
    }
}
