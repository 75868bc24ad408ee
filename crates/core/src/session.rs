//! Quiz session state machine.
//!
//! The session is a plain value; [`reduce`] maps `(state, event)` to the next
//! state plus at most one side effect for the caller to run. Nothing here
//! performs I/O.

use std::fmt;

use thiserror::Error;

use crate::model::{
    OPTION_COUNT, ProficiencyLevel, Question, QuestionSet, QuizOutcome, QuizSummary, Topic,
    UserProfile,
};

//
// ─── STATUS / EVENTS / EFFECTS ────────────────────────────────────────────────
//

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Idle,
    CollectingProfile,
    Generating,
    Answering,
    Finished,
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::CollectingProfile => "collecting-profile",
            Self::Generating => "generating",
            Self::Answering => "answering",
            Self::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// User actions and collaborator outcomes fed into [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TopicConfirmed(Topic),
    ProfileSubmitted(UserProfile),
    ProfileCancelled,
    GenerationSucceeded(QuestionSet),
    /// Carries the user-facing message.
    GenerationFailed(String),
    AnswerSelected(usize),
    Advanced,
    Exited,
    Restarted,
}

impl SessionEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::TopicConfirmed(_) => "topic-confirmed",
            Self::ProfileSubmitted(_) => "profile-submitted",
            Self::ProfileCancelled => "profile-cancelled",
            Self::GenerationSucceeded(_) => "generation-succeeded",
            Self::GenerationFailed(_) => "generation-failed",
            Self::AnswerSelected(_) => "answer-selected",
            Self::Advanced => "advanced",
            Self::Exited => "exited",
            Self::Restarted => "restarted",
        }
    }
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the question source for a quiz; feed the outcome back as
    /// `GenerationSucceeded` or `GenerationFailed`.
    RequestQuestions {
        topic: Topic,
        level: ProficiencyLevel,
    },
    /// Best-effort notification to the result sink. Nothing is fed back.
    SubmitResult(QuizSummary),
}

/// Why an event left the state untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    #[error("event `{event}` is not accepted while {status}")]
    NotAccepted {
        event: &'static str,
        status: SessionStatus,
    },
    #[error("an answer was already selected for this question")]
    AlreadyAnswered,
    #[error("option {index} does not exist")]
    NoSuchOption { index: usize },
    #[error("cannot advance before answering")]
    Unanswered,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SessionState,
    pub effect: Option<Effect>,
    pub ignored: Option<Ignored>,
}

impl Transition {
    fn applied(state: SessionState) -> Self {
        Self {
            state,
            effect: None,
            ignored: None,
        }
    }

    fn with_effect(state: SessionState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
            ignored: None,
        }
    }

    fn ignored(state: SessionState, reason: Ignored) -> Self {
        Self {
            state,
            effect: None,
            ignored: Some(reason),
        }
    }
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// The whole mutable state of one quiz journey.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub topic: Option<Topic>,
    /// Empty until generation succeeds, then exactly five.
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub selected_answer: Option<usize>,
    pub score: u32,
    /// Chosen option per answered question, in question order.
    pub answer_log: Vec<usize>,
    pub user_profile: Option<UserProfile>,
    /// Message from the last failed generation, shown on the topic screen.
    pub error: Option<String>,
}

impl SessionState {
    /// Fresh idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.status != SessionStatus::Answering {
            return None;
        }
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index + 1 == self.questions.len()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected_answer.is_some()
    }

    /// Advancing needs a committed answer for the current question.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.status == SessionStatus::Answering && self.is_answered()
    }

    /// Whether the selected answer for the current question is correct.
    #[must_use]
    pub fn selection_is_correct(&self) -> Option<bool> {
        let selected = self.selected_answer?;
        self.current_question()
            .map(|question| question.is_correct(selected))
    }

    /// Final score, only once the session is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        if self.status != SessionStatus::Finished {
            return None;
        }
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        Some(QuizOutcome::new(self.score, total))
    }

    fn summary(&self) -> Option<QuizSummary> {
        let profile = self.user_profile.as_ref()?;
        let topic = self.topic.clone()?;
        Some(QuizSummary {
            name: profile.name().to_string(),
            level: profile.level().clone(),
            topic,
            score: self.score,
            total: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
        })
    }

    fn clear_progress(&mut self) {
        self.questions.clear();
        self.current_index = 0;
        self.selected_answer = None;
        self.score = 0;
        self.answer_log.clear();
    }
}

//
// ─── TRANSITIONS ──────────────────────────────────────────────────────────────
//

/// Apply `event` to `state`.
///
/// Events that are not defined for the current status come back unchanged
/// with `ignored` set; they are never errors.
#[must_use]
pub fn reduce(mut state: SessionState, event: SessionEvent) -> Transition {
    use SessionEvent as E;
    use SessionStatus as S;

    match (state.status, event) {
        (S::Idle, E::TopicConfirmed(topic)) => {
            state.topic = Some(topic);
            state.status = S::CollectingProfile;
            Transition::applied(state)
        }

        (S::CollectingProfile, E::ProfileSubmitted(profile)) => {
            let Some(topic) = state.topic.clone() else {
                return Transition::ignored(
                    state,
                    Ignored::NotAccepted {
                        event: "profile-submitted",
                        status: S::CollectingProfile,
                    },
                );
            };
            let level = profile.level().clone();
            state.user_profile = Some(profile);
            state.error = None;
            state.status = S::Generating;
            Transition::with_effect(state, Effect::RequestQuestions { topic, level })
        }

        (S::CollectingProfile, E::ProfileCancelled) => {
            state.status = S::Idle;
            Transition::applied(state)
        }

        (S::Generating, E::GenerationSucceeded(set)) => {
            state.questions = set.into_questions();
            state.current_index = 0;
            state.selected_answer = None;
            state.score = 0;
            state.answer_log.clear();
            state.status = S::Answering;
            Transition::applied(state)
        }

        (S::Generating, E::GenerationFailed(message)) => {
            state.clear_progress();
            state.user_profile = None;
            state.error = Some(message);
            state.status = S::Idle;
            Transition::applied(state)
        }

        (S::Answering, E::AnswerSelected(index)) => {
            if state.selected_answer.is_some() {
                return Transition::ignored(state, Ignored::AlreadyAnswered);
            }
            if index >= OPTION_COUNT {
                return Transition::ignored(state, Ignored::NoSuchOption { index });
            }
            let correct = state
                .questions
                .get(state.current_index)
                .is_some_and(|question| question.is_correct(index));
            state.selected_answer = Some(index);
            if correct {
                state.score += 1;
            }
            state.answer_log.push(index);
            Transition::applied(state)
        }

        (S::Answering, E::Advanced) => {
            if state.selected_answer.is_none() {
                return Transition::ignored(state, Ignored::Unanswered);
            }
            if state.is_last_question() {
                state.status = S::Finished;
                match state.summary() {
                    Some(summary) => Transition::with_effect(state, Effect::SubmitResult(summary)),
                    None => Transition::applied(state),
                }
            } else {
                state.current_index += 1;
                state.selected_answer = None;
                Transition::applied(state)
            }
        }

        (S::Answering, E::Exited) => {
            state.clear_progress();
            state.status = S::Idle;
            Transition::applied(state)
        }

        (S::Finished, E::Restarted) => Transition::applied(SessionState::new()),

        (status, event) => Transition::ignored(
            state,
            Ignored::NotAccepted {
                event: event.name(),
                status,
            },
        ),
    }
}
