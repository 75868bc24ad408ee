use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use quiz_core::model::{ProficiencyLevel, Question, QuestionError, QuestionSet, Topic};

use crate::config::GenerationConfig;
use crate::error::GenerationError;

/// Produces a five-question quiz for a topic.
///
/// Implementations make a single attempt; any transport failure or payload that
/// does not validate surfaces as one `GenerationError`.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn generate(
        &self,
        topic: &Topic,
        level: &ProficiencyLevel,
    ) -> Result<QuestionSet, GenerationError>;
}

//
// ─── CHAT COMPLETIONS ─────────────────────────────────────────────────────────
//

/// Question source backed by an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct ChatQuestionSource {
    client: Client,
    config: GenerationConfig,
}

impl ChatQuestionSource {
    #[must_use]
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn complete(&self, prompt: String) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GenerationError::NotConfigured)?;

        let payload = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.7,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(self.config.completions_url())
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl QuestionSource for ChatQuestionSource {
    async fn generate(
        &self,
        topic: &Topic,
        level: &ProficiencyLevel,
    ) -> Result<QuestionSet, GenerationError> {
        log::debug!(
            "requesting quiz on {topic:?} for {level} from {}",
            self.config.model
        );
        let content = self.complete(build_prompt(topic, level)).await?;
        parse_questions(&content)
    }
}

//
// ─── PROMPT / PARSING ─────────────────────────────────────────────────────────
//

/// Prompt asking for a five-question quiz in the generator wire shape.
#[must_use]
pub fn build_prompt(topic: &Topic, level: &ProficiencyLevel) -> String {
    format!(
        "Generate a 5-question multiple choice quiz about {topic} suitable for a {level}.\n\
         The questions should be educational, clear, and engaging.\n\
         Provide 4 options for each question and clearly identify the correct answer index (0-3).\n\
         Also include a brief explanation of why the answer is correct.\n\
         Respond with JSON only, shaped as:\n\
         {{\"questions\": [{{\"question\": string, \"options\": [string, string, string, string], \
         \"correctAnswer\": integer, \"explanation\": string}}]}}"
    )
}

/// Parse and validate a generator reply.
///
/// Accepts a bare JSON array or an object with a `questions` array, optionally
/// wrapped in a markdown code fence.
///
/// # Errors
///
/// Returns `GenerationError::Malformed` for anything that is not exactly five
/// valid questions.
pub fn parse_questions(content: &str) -> Result<QuestionSet, GenerationError> {
    let json = strip_code_fence(content);
    let payload: QuizPayload = serde_json::from_str(json)?;
    let items = match payload {
        QuizPayload::Bare(items) | QuizPayload::Wrapped { questions: items } => items,
    };

    let questions = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Question>(item).map_err(|err| QuestionError::InvalidQuestion {
                index,
                source: Box::new(QuestionError::Malformed(err.to_string())),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionSet::new(questions)?)
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop an optional language tag on the opening fence.
    let rest = rest.split_once('\n').map_or(rest, |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum QuizPayload {
    Bare(Vec<serde_json::Value>),
    Wrapped { questions: Vec<serde_json::Value> },
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
