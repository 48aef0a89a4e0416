#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use tokio::sync::Notify;

use studay_server::{
    clients::{QuizGenerator, QuizGrader},
    errors::CollaboratorError,
    models::{
        domain::{GradedReport, GradedResult, QuizQuestion, QuizQuestionOption},
        dto::request::{GenerateQuizPayload, SubmitQuizPayload},
    },
};

const LETTERS: [char; 4] = ['A', 'B', 'C', 'D'];

/// Writes `count` four-option questions. Question `n` is answered by
/// `LETTERS[(n - 1) % 4]`.
pub struct InMemoryQuizGenerator {
    pub calls: AtomicUsize,
    failure: Option<CollaboratorError>,
}

impl InMemoryQuizGenerator {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: None,
        }
    }

    pub fn failing(error: CollaboratorError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn correct_letter(position: usize) -> char {
    LETTERS[position % LETTERS.len()]
}

#[async_trait]
impl QuizGenerator for InMemoryQuizGenerator {
    async fn generate_quiz(
        &self,
        request: GenerateQuizPayload,
    ) -> Result<Vec<QuizQuestion>, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        Ok((0..request.count as usize)
            .map(|i| {
                let mut metadata = Map::new();
                metadata.insert("correctAnswer".to_string(), json!(correct_letter(i).to_string()));
                metadata.insert(
                    "explanation".to_string(),
                    json!(format!("Fact {} about {}", i + 1, request.topic)),
                );
                QuizQuestion {
                    id: format!("q{}", i + 1),
                    prompt: format!("{} question {} ({})", request.topic, i + 1, request.difficulty),
                    options: LETTERS
                        .iter()
                        .map(|&letter| QuizQuestionOption {
                            letter,
                            text: format!("Option {}", letter),
                        })
                        .collect(),
                    grading_metadata: metadata,
                }
            })
            .collect())
    }
}

/// Holds every generation until `release` is notified, announcing on
/// `started` when a request arrives.
pub struct GatedQuizGenerator {
    pub started: Notify,
    pub release: Notify,
    inner: InMemoryQuizGenerator,
}

impl GatedQuizGenerator {
    pub fn new() -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
            inner: InMemoryQuizGenerator::new(),
        }
    }
}

#[async_trait]
impl QuizGenerator for GatedQuizGenerator {
    async fn generate_quiz(
        &self,
        request: GenerateQuizPayload,
    ) -> Result<Vec<QuizQuestion>, CollaboratorError> {
        self.started.notify_one();
        self.release.notified().await;
        self.inner.generate_quiz(request).await
    }
}

/// Grades against the `correctAnswer` each question carries.
pub struct InMemoryQuizGrader {
    pub calls: AtomicUsize,
    failure: Option<CollaboratorError>,
}

impl InMemoryQuizGrader {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: None,
        }
    }

    pub fn failing(error: CollaboratorError) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            failure: Some(error),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuizGrader for InMemoryQuizGrader {
    async fn grade_quiz(
        &self,
        request: SubmitQuizPayload,
    ) -> Result<GradedReport, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let results: Vec<GradedResult> = request
            .questions
            .iter()
            .map(|question| {
                let correct = question
                    .grading_metadata
                    .get("correctAnswer")
                    .and_then(Value::as_str)
                    .and_then(|s| s.chars().next())
                    .unwrap_or('A');
                let user_answer = request.answers.get(&question.id).unwrap_or('?');
                GradedResult {
                    id: question.id.clone(),
                    prompt: question.prompt.clone(),
                    user_answer,
                    correct_answer: correct,
                    is_correct: user_answer == correct,
                    explanation: question
                        .grading_metadata
                        .get("explanation")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                }
            })
            .collect();

        Ok(GradedReport {
            score: results.iter().filter(|r| r.is_correct).count() as u32,
            results,
        })
    }
}

pub fn collaborators() -> (Arc<InMemoryQuizGenerator>, Arc<InMemoryQuizGrader>) {
    (
        Arc::new(InMemoryQuizGenerator::new()),
        Arc::new(InMemoryQuizGrader::new()),
    )
}
