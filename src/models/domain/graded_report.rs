use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedResult {
    pub id: String,
    pub prompt: String,
    pub user_answer: char,
    pub correct_answer: char,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GradedReport {
    pub score: u32,
    pub results: Vec<GradedResult>,
}

impl GradedReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|result| result.is_correct).count()
    }
}

impl fmt::Display for GradedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total())
    }
}
