mod outcome;
mod profile;
mod question;
mod topic;

pub use outcome::{FeedbackTier, QuizOutcome, QuizResult, QuizSummary};
pub use profile::{ProficiencyLevel, ProfileError, UserProfile};
pub use question::{OPTION_COUNT, QUIZ_LENGTH, Question, QuestionError, QuestionSet};
pub use topic::{PREDEFINED_TOPICS, Topic, TopicChoice, TopicError};
