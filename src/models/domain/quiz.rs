use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::domain::answers::AnswerMap;
use crate::models::domain::quiz_question::QuizQuestion;

pub const MIN_QUESTION_COUNT: usize = 1;
pub const MAX_QUESTION_COUNT: usize = 10;
pub const MIN_OPTION_COUNT: usize = 2;

/// Structural problems in a question list handed back by the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizShapeError {
    #[error("expected {requested} questions but received {received}")]
    CountMismatch { requested: usize, received: usize },

    #[error("question '{question_id}' has fewer than two options")]
    TooFewOptions { question_id: String },

    #[error("question '{question_id}' repeats option letter '{letter}'")]
    DuplicateLetter { question_id: String, letter: char },

    #[error("question id '{0}' appears more than once")]
    DuplicateQuestionId(String),
}

/// An ordered, immutable set of generated questions.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Quiz {
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// Builds a quiz from a generation response, checking it has exactly
    /// `requested` well-formed questions. Questions without an id get a fresh one.
    pub fn from_generated(
        questions: Vec<QuizQuestion>,
        requested: usize,
    ) -> Result<Self, QuizShapeError> {
        if questions.len() != requested {
            return Err(QuizShapeError::CountMismatch {
                requested,
                received: questions.len(),
            });
        }

        let mut seen_ids = HashSet::new();
        let mut checked = Vec::with_capacity(questions.len());

        for mut question in questions {
            if question.id.trim().is_empty() {
                question.id = Uuid::new_v4().to_string();
            }

            if question.options.len() < MIN_OPTION_COUNT {
                return Err(QuizShapeError::TooFewOptions {
                    question_id: question.id,
                });
            }

            let mut letters = HashSet::new();
            let repeated = question.letters().find(|letter| !letters.insert(*letter));
            if let Some(letter) = repeated {
                return Err(QuizShapeError::DuplicateLetter {
                    question_id: question.id,
                    letter,
                });
            }

            if !seen_ids.insert(question.id.clone()) {
                return Err(QuizShapeError::DuplicateQuestionId(question.id));
            }

            checked.push(question);
        }

        Ok(Self { questions: checked })
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&QuizQuestion> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(|question| question.id.as_str())
    }

    /// Ids of the questions `answers` has no entry for, in quiz order.
    pub fn unanswered<'a>(&'a self, answers: &'a AnswerMap) -> impl Iterator<Item = &'a str> {
        self.question_ids().filter(move |id| !answers.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::quiz_question::QuizQuestionOption;
    use crate::test_utils::fixtures::{sample_question, sample_questions};

    #[test]
    fn from_generated_accepts_well_formed_questions() {
        let quiz = Quiz::from_generated(sample_questions(3), 3).expect("quiz should build");

        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz.question_ids().collect::<Vec<_>>(), vec!["q1", "q2", "q3"]);
        assert!(quiz.question("q2").is_some());
        assert!(quiz.question("q9").is_none());
    }

    #[test]
    fn from_generated_rejects_count_mismatch() {
        let err = Quiz::from_generated(sample_questions(2), 3).unwrap_err();
        assert_eq!(
            err,
            QuizShapeError::CountMismatch {
                requested: 3,
                received: 2
            }
        );
    }

    #[test]
    fn from_generated_rejects_single_option_question() {
        let mut question = sample_question("q1", 'A');
        question.options.truncate(1);

        let err = Quiz::from_generated(vec![question], 1).unwrap_err();
        assert!(matches!(err, QuizShapeError::TooFewOptions { .. }));
    }

    #[test]
    fn from_generated_rejects_repeated_letters() {
        let mut question = sample_question("q1", 'A');
        question.options.push(QuizQuestionOption {
            letter: 'A',
            text: "Duplicate".to_string(),
        });

        let err = Quiz::from_generated(vec![question], 1).unwrap_err();
        assert_eq!(
            err,
            QuizShapeError::DuplicateLetter {
                question_id: "q1".to_string(),
                letter: 'A'
            }
        );
    }

    #[test]
    fn from_generated_rejects_repeated_ids() {
        let questions = vec![sample_question("q1", 'A'), sample_question("q1", 'B')];

        let err = Quiz::from_generated(questions, 2).unwrap_err();
        assert_eq!(err, QuizShapeError::DuplicateQuestionId("q1".to_string()));
    }

    #[test]
    fn from_generated_assigns_missing_ids() {
        let first = sample_question("", 'A');
        let second = sample_question("  ", 'B');

        let quiz = Quiz::from_generated(vec![first, second], 2).expect("quiz should build");

        let ids: Vec<&str> = quiz.question_ids().collect();
        assert!(ids.iter().all(|id| Uuid::parse_str(id).is_ok()));
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn unanswered_lists_questions_in_quiz_order() {
        let quiz = Quiz::from_generated(sample_questions(3), 3).expect("quiz should build");
        let answers = AnswerMap::new().record("q2", 'A');

        let missing: Vec<&str> = quiz.unanswered(&answers).collect();
        assert_eq!(missing, vec!["q1", "q3"]);
    }
}
