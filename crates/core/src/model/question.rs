use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Number of questions in a generated quiz.
pub const QUIZ_LENGTH: usize = 5;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("expected 4 options, found {found}")]
    OptionCount { found: usize },

    #[error("option {index} cannot be empty")]
    EmptyOption { index: usize },

    #[error("correct answer index {index} is out of range")]
    CorrectAnswerOutOfRange { index: usize },

    #[error("expected 5 questions, found {found}")]
    QuestionCount { found: usize },

    #[error("unreadable question: {0}")]
    Malformed(String),

    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: Box<QuestionError>,
    },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple choice question.
///
/// Immutable once built; every instance has exactly [`OPTION_COUNT`] non-empty
/// options and a correct answer index inside that range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion", into = "RawQuestion")]
pub struct Question {
    text: String,
    options: [String; OPTION_COUNT],
    correct_answer: usize,
    explanation: String,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the text or an option is blank, the option count
    /// is not [`OPTION_COUNT`], or `correct_answer` does not point at an option.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_string();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }

        let options: [String; OPTION_COUNT] = options
            .try_into()
            .map_err(|found: Vec<String>| QuestionError::OptionCount { found: found.len() })?;
        if let Some(index) = options.iter().position(|option| option.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { index });
        }

        if correct_answer >= OPTION_COUNT {
            return Err(QuestionError::CorrectAnswerOutOfRange {
                index: correct_answer,
            });
        }

        Ok(Self {
            text,
            options,
            correct_answer,
            explanation: explanation.into().trim().to_string(),
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Exact index match; no partial credit.
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer
    }
}

/// Wire shape used by the question generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: usize,
    #[serde(default)]
    explanation: String,
}

impl TryFrom<RawQuestion> for Question {
    type Error = QuestionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        Self::new(raw.question, raw.options, raw.correct_answer, raw.explanation)
    }
}

impl From<Question> for RawQuestion {
    fn from(question: Question) -> Self {
        Self {
            question: question.text,
            options: question.options.into(),
            correct_answer: question.correct_answer,
            explanation: question.explanation,
        }
    }
}

//
// ─── QUESTION SET ─────────────────────────────────────────────────────────────
//

/// A complete quiz: exactly [`QUIZ_LENGTH`] questions in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionSet(Vec<Question>);

impl QuestionSet {
    /// # Errors
    ///
    /// Returns `QuestionError::QuestionCount` unless exactly [`QUIZ_LENGTH`] questions
    /// are given.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionError> {
        if questions.len() != QUIZ_LENGTH {
            return Err(QuestionError::QuestionCount {
                found: questions.len(),
            });
        }
        Ok(Self(questions))
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.0
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.0
    }
}

impl TryFrom<Vec<Question>> for QuestionSet {
    type Error = QuestionError;

    fn try_from(questions: Vec<Question>) -> Result<Self, Self::Error> {
        Self::new(questions)
    }
}

impl From<QuestionSet> for Vec<Question> {
    fn from(set: QuestionSet) -> Self {
        set.0
    }
}
