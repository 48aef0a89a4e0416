use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::domain::quiz::Quiz;

/// The user's selections so far, keyed by question id.
///
/// Letters are taken as given: the caller is expected to only offer letters
/// that belong to the question. The session API checks this before recording.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, char>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the map with `question_id` set to `letter`, replacing any earlier pick.
    pub fn record(mut self, question_id: impl Into<String>, letter: char) -> Self {
        self.0.insert(question_id.into(), letter);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<char> {
        self.0.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.0.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> {
        self.0.iter().map(|(id, letter)| (id.as_str(), *letter))
    }

    /// True when every question of `quiz` has an answer.
    pub fn is_complete(&self, quiz: &Quiz) -> bool {
        quiz.question_ids().all(|id| self.contains(id))
    }
}
