use async_trait::async_trait;

use crate::{
    clients::http::{endpoint, post_json, GENERATE_QUIZ_PATH},
    errors::CollaboratorError,
    models::{
        domain::QuizQuestion,
        dto::{request::GenerateQuizPayload, response::GenerateQuizResponse},
    },
};

/// The service that writes quiz questions for a topic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGenerator: Send + Sync {
    async fn generate_quiz(
        &self,
        request: GenerateQuizPayload,
    ) -> Result<Vec<QuizQuestion>, CollaboratorError>;
}

pub struct HttpQuizGenerator {
    client: reqwest::Client,
    url: String,
}

impl HttpQuizGenerator {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: endpoint(base_url, GENERATE_QUIZ_PATH),
        }
    }
}

#[async_trait]
impl QuizGenerator for HttpQuizGenerator {
    async fn generate_quiz(
        &self,
        request: GenerateQuizPayload,
    ) -> Result<Vec<QuizQuestion>, CollaboratorError> {
        log::debug!("POST {} ({} questions)", self.url, request.count);

        let response: GenerateQuizResponse = post_json(&self.client, &self.url, &request).await?;
        Ok(response.questions)
    }
}
