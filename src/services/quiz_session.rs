use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    constants::messages,
    errors::{GenerationError, SessionError, SubmissionError},
    models::domain::{
        AnswerMap, GenerationForm, GradedReport, PendingRequest, Quiz, SessionEvent, SessionState,
    },
    services::{generation_service::GenerationService, submission_service::SubmissionService},
};

/// One player's run through generate, answer, and results.
///
/// A collaborator call is split in two: `begin_*` marks the session pending
/// and hands back the call to make, `finish_*` applies its outcome. The
/// session does not need to be borrowed while the call runs, and any other
/// event arriving in between is refused with [`SessionError::RequestInFlight`].
pub struct QuizSession {
    id: Uuid,
    state: SessionState,
    generation: Arc<GenerationService>,
    submission: Arc<SubmissionService>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// A generation request that has been accepted but not yet sent.
pub struct GenerationCall {
    service: Arc<GenerationService>,
    form: GenerationForm,
}

impl GenerationCall {
    pub async fn run(self) -> Result<Quiz, GenerationError> {
        self.service
            .generate(&self.form.topic, self.form.count, self.form.difficulty)
            .await
    }
}

/// A submission that has been accepted but not yet graded.
pub struct SubmissionCall {
    service: Arc<SubmissionService>,
    quiz: Quiz,
    answers: AnswerMap,
}

impl SubmissionCall {
    pub async fn run(self) -> Result<GradedReport, SubmissionError> {
        self.service.submit(&self.quiz, &self.answers).await
    }
}

/// Clears the pending marker if the owning future is dropped before the
/// outcome was applied.
struct AbandonGuard<'a> {
    session: &'a mut QuizSession,
    request: PendingRequest,
}

impl Drop for AbandonGuard<'_> {
    fn drop(&mut self) {
        if self.session.state.pending() != Some(self.request) {
            return;
        }

        log::warn!("Session {} abandoned its {} request", self.session.id, self.request);
        let event = match self.request {
            PendingRequest::Generation => SessionEvent::GenerationFailed(
                GenerationError::ServiceFailure(messages::REQUEST_ABANDONED.to_string()),
            ),
            PendingRequest::Submission => SessionEvent::SubmissionFailed(
                SubmissionError::ServiceFailure(messages::REQUEST_ABANDONED.to_string()),
            ),
        };
        if let Err(e) = self.session.transition(event) {
            log::error!("Session {} could not clear its pending request: {}", self.session.id, e);
        }
    }
}

impl QuizSession {
    pub fn new(generation: Arc<GenerationService>, submission: Arc<SubmissionService>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            state: SessionState::new(),
            generation,
            submission,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Generates a quiz in one go. Dropping the future before it resolves
    /// records the request as interrupted.
    pub async fn generate(&mut self, form: GenerationForm) -> Result<&SessionState, SessionError> {
        let call = self.begin_generation(form)?;

        let mut guard = AbandonGuard {
            session: &mut *self,
            request: PendingRequest::Generation,
        };
        let outcome = call.run().await;
        let finished = guard.session.finish_generation(outcome);
        drop(guard);

        finished.map(|()| &self.state)
    }

    pub fn begin_generation(&mut self, form: GenerationForm) -> Result<GenerationCall, SessionError> {
        self.transition(SessionEvent::GenerationRequested(form.clone()))?;
        Ok(GenerationCall {
            service: self.generation.clone(),
            form,
        })
    }

    pub fn finish_generation(
        &mut self,
        outcome: Result<Quiz, GenerationError>,
    ) -> Result<(), SessionError> {
        match outcome {
            Ok(quiz) => {
                log::info!("Session {} received a quiz of {} questions", self.id, quiz.len());
                self.transition(SessionEvent::GenerationSucceeded(quiz))
            }
            Err(err) => {
                self.transition(SessionEvent::GenerationFailed(err.clone()))?;
                Err(err.into())
            }
        }
    }

    pub fn record_answer(
        &mut self,
        question_id: impl Into<String>,
        letter: char,
    ) -> Result<&SessionState, SessionError> {
        self.transition(SessionEvent::AnswerRecorded {
            question_id: question_id.into(),
            letter,
        })?;
        Ok(&self.state)
    }

    /// Submits the answers in one go. Dropping the future before it resolves
    /// records the request as interrupted and keeps the answers.
    pub async fn submit(&mut self) -> Result<&SessionState, SessionError> {
        let call = self.begin_submission()?;

        let mut guard = AbandonGuard {
            session: &mut *self,
            request: PendingRequest::Submission,
        };
        let outcome = call.run().await;
        let finished = guard.session.finish_submission(outcome);
        drop(guard);

        finished.map(|()| &self.state)
    }

    pub fn begin_submission(&mut self) -> Result<SubmissionCall, SessionError> {
        self.transition(SessionEvent::SubmissionRequested)?;

        match self.state.quiz().cloned() {
            Some(quiz) => Ok(SubmissionCall {
                service: self.submission.clone(),
                quiz,
                answers: self.state.answers().clone(),
            }),
            None => {
                let err = SubmissionError::Incomplete(messages::ANSWER_ALL_QUESTIONS.to_string());
                self.transition(SessionEvent::SubmissionFailed(err.clone()))?;
                Err(err.into())
            }
        }
    }

    pub fn finish_submission(
        &mut self,
        outcome: Result<GradedReport, SubmissionError>,
    ) -> Result<(), SessionError> {
        match outcome {
            Ok(report) => {
                log::info!("Session {} scored {}", self.id, report);
                self.transition(SessionEvent::SubmissionSucceeded(report))
            }
            Err(err) => {
                self.transition(SessionEvent::SubmissionFailed(err.clone()))?;
                Err(err.into())
            }
        }
    }

    pub fn restart(&mut self) -> Result<&SessionState, SessionError> {
        self.transition(SessionEvent::Restarted)?;
        log::debug!("Session {} restarted", self.id);
        Ok(&self.state)
    }

    fn transition(&mut self, event: SessionEvent) -> Result<(), SessionError> {
        self.state = self.state.apply(event)?;
        self.updated_at = Utc::now();
        Ok(())
    }
}
