use quiz_core::SessionState;

use super::markdown_to_html;

/// How an option renders once the question has (or has not) been answered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Open,
    Correct,
    Wrong,
    Dimmed,
}

impl OptionMark {
    #[must_use]
    pub fn for_option(index: usize, selected: Option<usize>, correct: usize) -> Self {
        match selected {
            None => Self::Open,
            Some(_) if index == correct => Self::Correct,
            Some(chosen) if chosen == index => Self::Wrong,
            Some(_) => Self::Dimmed,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Open => "option",
            Self::Correct => "option option--correct",
            Self::Wrong => "option option--wrong",
            Self::Dimmed => "option option--dimmed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
    pub mark: OptionMark,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub explanation_html: String,
}

impl FeedbackVm {
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.correct { "Spot on!" } else { "Nice try!" }
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        if self.correct { "✨" } else { "💡" }
    }
}

/// Everything the question panel renders for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub text: String,
    pub options: Vec<OptionVm>,
    /// Present once an answer is committed.
    pub feedback: Option<FeedbackVm>,
    pub is_last: bool,
}

impl QuestionVm {
    /// `None` unless the session is answering a question.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Option<Self> {
        let question = state.current_question()?;
        let selected = state.selected_answer;
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| OptionVm {
                index,
                letter: option_letter(index),
                text: text.clone(),
                mark: OptionMark::for_option(index, selected, question.correct_answer()),
            })
            .collect();
        let feedback = state.selection_is_correct().map(|correct| FeedbackVm {
            correct,
            explanation_html: markdown_to_html(question.explanation()),
        });

        Some(Self {
            number: state.current_index + 1,
            total: state.total_questions(),
            text: question.text().to_string(),
            options,
            feedback,
            is_last: state.is_last_question(),
        })
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    /// Width of the progress bar, counting the current question as reached.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.number * 100 / self.total
    }

    #[must_use]
    pub fn advance_label(&self) -> &'static str {
        if self.is_last { "See Results" } else { "Next Question" }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.feedback.is_some()
    }
}

fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|offset| b'A'.checked_add(offset))
        .map_or('?', char::from)
}
