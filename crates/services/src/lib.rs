#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod question_source;
pub mod quiz_loop;
pub mod result_sink;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use config::{GenerationConfig, WebhookConfig};
pub use error::{ConfigError, GENERATION_FAILED_MESSAGE, GenerationError, SubmissionError};
pub use question_source::{ChatQuestionSource, QuestionSource, build_prompt, parse_questions};
pub use quiz_loop::{QuizController, QuizLoopService};
pub use result_sink::{DisabledResultSink, ResultSink, WebhookResultSink};
