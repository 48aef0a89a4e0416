use std::sync::Arc;

use crate::{
    clients::{build_http_client, HttpQuizGenerator, HttpQuizGrader, QuizGenerator, QuizGrader},
    config::Config,
    errors::AppResult,
    services::{GenerationService, SessionStore, SubmissionService},
};

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let client = build_http_client(&config)?;

        let generator = Arc::new(HttpQuizGenerator::new(client.clone(), &config.quiz_service_url));
        let grader = Arc::new(HttpQuizGrader::new(client, &config.quiz_service_url));

        Ok(Self::with_collaborators(config, generator, grader))
    }

    /// Wires the state around any generation and grading implementation.
    pub fn with_collaborators(
        config: Config,
        generator: Arc<dyn QuizGenerator>,
        grader: Arc<dyn QuizGrader>,
    ) -> Self {
        let generation = Arc::new(GenerationService::new(generator));
        let submission = Arc::new(SubmissionService::new(grader));

        Self {
            sessions: Arc::new(SessionStore::new(generation, submission)),
            config: Arc::new(config),
        }
    }
}
