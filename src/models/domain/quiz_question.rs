use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[serde(alias = "fácil", alias = "facil")]
    Easy,
    #[default]
    #[serde(alias = "média", alias = "media")]
    Medium,
    #[serde(alias = "difícil", alias = "dificil")]
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestionOption {
    pub letter: char,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub id: String,
    pub prompt: String,
    pub options: Vec<QuizQuestionOption>,
    /// Whatever else the generation service attached (correct letter, explanation).
    /// Sent back untouched on submission so the grader can stay stateless.
    #[serde(flatten)]
    pub grading_metadata: Map<String, Value>,
}

impl QuizQuestion {
    pub fn has_option(&self, letter: char) -> bool {
        self.options.iter().any(|option| option.letter == letter)
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.options.iter().map(|option| option.letter)
    }
}
