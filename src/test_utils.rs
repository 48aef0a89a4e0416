#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Map, Value};

    use crate::models::domain::{
        AnswerMap, GradedReport, GradedResult, Quiz, QuizQuestion, QuizQuestionOption,
    };

    /// A four-option question whose right answer is `correct`.
    pub fn sample_question(id: &str, correct: char) -> QuizQuestion {
        let mut grading_metadata = Map::new();
        grading_metadata.insert("correctAnswer".to_string(), json!(correct.to_string()));
        grading_metadata.insert(
            "explanation".to_string(),
            json!(format!("{correct} is the right choice.")),
        );

        QuizQuestion {
            id: id.to_string(),
            prompt: format!("Question {id}?"),
            options: ['A', 'B', 'C', 'D']
                .into_iter()
                .map(|letter| QuizQuestionOption {
                    letter,
                    text: format!("Option {letter}"),
                })
                .collect(),
            grading_metadata,
        }
    }

    /// Questions `q1..=qn`, the right answers cycling through A to D.
    pub fn sample_questions(count: usize) -> Vec<QuizQuestion> {
        (1..=count)
            .map(|n| {
                let correct = ['A', 'B', 'C', 'D'][(n - 1) % 4];
                sample_question(&format!("q{n}"), correct)
            })
            .collect()
    }

    pub fn sample_quiz(count: usize) -> Quiz {
        Quiz::from_generated(sample_questions(count), count).expect("fixture quiz is well formed")
    }

    /// Grades the way the grading service does, from the question's own metadata.
    pub fn grade(quiz: &Quiz, answers: &AnswerMap) -> GradedReport {
        let results: Vec<GradedResult> = quiz
            .questions()
            .iter()
            .filter_map(|question| {
                let user_answer = answers.get(&question.id)?;
                let correct_answer = question
                    .grading_metadata
                    .get("correctAnswer")
                    .and_then(Value::as_str)
                    .and_then(|s| s.chars().next())
                    .unwrap_or('A');
                Some(GradedResult {
                    id: question.id.clone(),
                    prompt: question.prompt.clone(),
                    user_answer,
                    correct_answer,
                    is_correct: user_answer.eq_ignore_ascii_case(&correct_answer),
                    explanation: question
                        .grading_metadata
                        .get("explanation")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string(),
                })
            })
            .collect();

        GradedReport {
            score: results.iter().filter(|r| r.is_correct).count() as u32,
            results,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::AnswerMap;

    #[test]
    fn test_fixtures_sample_quiz() {
        let quiz = sample_quiz(5);
        assert_eq!(quiz.len(), 5);
        assert_eq!(quiz.questions()[4].id, "q5");
    }

    #[test]
    fn test_fixtures_grade_scores_correct_letters() {
        let quiz = sample_quiz(3);
        let answers = AnswerMap::new().record("q1", 'A').record("q2", 'A').record("q3", 'C');

        let report = grade(&quiz, &answers);
        assert_eq!(report.results.len(), 3);
        assert_eq!(report.score, 2);
        assert!(!report.results[1].is_correct);
    }
}
