use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{GenerationError, SessionError, SubmissionError};
use crate::models::domain::answers::AnswerMap;
use crate::models::domain::graded_report::GradedReport;
use crate::models::domain::quiz::Quiz;
use crate::models::domain::quiz_question::Difficulty;

pub const DEFAULT_QUESTION_COUNT: i32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Generating,
    Answering,
    Results,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Generating => write!(f, "generating"),
            Phase::Answering => write!(f, "answering"),
            Phase::Results => write!(f, "results"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingRequest {
    Generation,
    Submission,
}

impl fmt::Display for PendingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PendingRequest::Generation => write!(f, "generation"),
            PendingRequest::Submission => write!(f, "submission"),
        }
    }
}

/// What the user asked to be quizzed on.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GenerationForm {
    pub topic: String,
    pub count: i32,
    pub difficulty: Difficulty,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            count: DEFAULT_QUESTION_COUNT,
            difficulty: Difficulty::default(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SessionEvent {
    GenerationRequested(GenerationForm),
    GenerationSucceeded(Quiz),
    GenerationFailed(GenerationError),
    AnswerRecorded { question_id: String, letter: char },
    SubmissionRequested,
    SubmissionSucceeded(GradedReport),
    SubmissionFailed(SubmissionError),
    Restarted,
}

impl SessionEvent {
    fn action(&self) -> &'static str {
        match self {
            SessionEvent::GenerationRequested(_) => "generate a quiz",
            SessionEvent::GenerationSucceeded(_) | SessionEvent::GenerationFailed(_) => {
                "complete a generation"
            }
            SessionEvent::AnswerRecorded { .. } => "record an answer",
            SessionEvent::SubmissionRequested => "submit answers",
            SessionEvent::SubmissionSucceeded(_) | SessionEvent::SubmissionFailed(_) => {
                "complete a submission"
            }
            SessionEvent::Restarted => "restart",
        }
    }

    fn is_completion(&self) -> bool {
        matches!(
            self,
            SessionEvent::GenerationSucceeded(_)
                | SessionEvent::GenerationFailed(_)
                | SessionEvent::SubmissionSucceeded(_)
                | SessionEvent::SubmissionFailed(_)
        )
    }
}

/// Everything one quiz session knows.
///
/// Only changes through [`SessionState::apply`]. `quiz` is set only while
/// answering or showing results, `report` only while showing results.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    phase: Phase,
    form: GenerationForm,
    quiz: Option<Quiz>,
    answers: AnswerMap,
    report: Option<GradedReport>,
    error: Option<String>,
    pending: Option<PendingRequest>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn form(&self) -> &GenerationForm {
        &self.form
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn report(&self) -> Option<&GradedReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn pending(&self) -> Option<PendingRequest> {
        self.pending
    }

    /// Computes the state that follows `event`. An event the current phase
    /// does not accept is an error and `self` stays as it was.
    pub fn apply(&self, event: SessionEvent) -> Result<Self, SessionError> {
        let mut next = self.clone();

        match (self.phase, self.pending, event) {
            (Phase::Generating, None, SessionEvent::GenerationRequested(form)) => {
                next.form = form;
                next.error = None;
                next.pending = Some(PendingRequest::Generation);
            }
            (
                Phase::Generating,
                Some(PendingRequest::Generation),
                SessionEvent::GenerationSucceeded(quiz),
            ) => {
                next.phase = Phase::Answering;
                next.quiz = Some(quiz);
                next.answers = AnswerMap::new();
                next.pending = None;
            }
            (
                Phase::Generating,
                Some(PendingRequest::Generation),
                SessionEvent::GenerationFailed(err),
            ) => {
                next.error = Some(err.to_string());
                next.pending = None;
            }
            (Phase::Answering, None, SessionEvent::AnswerRecorded { question_id, letter }) => {
                next.answers = next.answers.record(question_id, letter);
            }
            (Phase::Answering, None, SessionEvent::SubmissionRequested) => {
                next.error = None;
                next.pending = Some(PendingRequest::Submission);
            }
            (
                Phase::Answering,
                Some(PendingRequest::Submission),
                SessionEvent::SubmissionSucceeded(report),
            ) => {
                next.phase = Phase::Results;
                next.report = Some(report);
                next.pending = None;
            }
            (
                Phase::Answering,
                Some(PendingRequest::Submission),
                SessionEvent::SubmissionFailed(err),
            ) => {
                next.error = Some(err.to_string());
                next.pending = None;
            }
            (Phase::Results, None, SessionEvent::Restarted) => {
                next = Self::default();
            }
            (_, Some(pending), event) if !event.is_completion() => {
                return Err(SessionError::RequestInFlight(pending));
            }
            (phase, _, event) => {
                return Err(SessionError::InvalidTransition {
                    phase,
                    action: event.action(),
                });
            }
        }

        Ok(next)
    }
}
