use async_trait::async_trait;

use crate::{
    clients::http::{endpoint, post_json, SUBMIT_QUIZ_PATH},
    errors::CollaboratorError,
    models::{domain::GradedReport, dto::request::SubmitQuizPayload},
};

/// The service that scores a finished quiz.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizGrader: Send + Sync {
    async fn grade_quiz(&self, request: SubmitQuizPayload)
        -> Result<GradedReport, CollaboratorError>;
}

pub struct HttpQuizGrader {
    client: reqwest::Client,
    url: String,
}

impl HttpQuizGrader {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: endpoint(base_url, SUBMIT_QUIZ_PATH),
        }
    }
}

#[async_trait]
impl QuizGrader for HttpQuizGrader {
    async fn grade_quiz(
        &self,
        request: SubmitQuizPayload,
    ) -> Result<GradedReport, CollaboratorError> {
        log::debug!("POST {} ({} answers)", self.url, request.answers.len());

        post_json(&self.client, &self.url, &request).await
    }
}
