// User-facing texts shown next to the current phase.

pub const EMPTY_TOPIC: &str = "Please enter a topic for the quiz.";
pub const COUNT_OUT_OF_RANGE: &str = "Please choose between 1 and 10 questions.";
pub const GENERATION_UNAVAILABLE: &str =
    "Could not reach the quiz service to generate questions. Check that it is running and try again.";
pub const MALFORMED_QUIZ: &str =
    "The quiz service returned questions that could not be used. Please try again.";

pub const ANSWER_ALL_QUESTIONS: &str = "Please answer all questions before submitting.";
pub const GRADING_UNAVAILABLE: &str =
    "Could not reach the quiz service to grade your answers. Check that it is running and try again.";

pub const REQUEST_ABANDONED: &str =
    "The request to the quiz service was interrupted. Please try again.";
