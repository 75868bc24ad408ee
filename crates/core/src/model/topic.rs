use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Topics offered by the picker, in display order.
pub const PREDEFINED_TOPICS: [&str; 10] = [
    "Solar System",
    "World Capitals",
    "Human Biology",
    "Programming Basics",
    "Renaissance Art",
    "Ancient Rome",
    "Environmental Science",
    "Modern History",
    "Psychology",
    "Climate Change",
];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TopicError {
    #[error("topic cannot be empty")]
    Empty,
}

/// The subject a quiz is generated for. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// # Errors
    ///
    /// Returns `TopicError::Empty` if the trimmed input is empty.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TopicError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TopicError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Topic {
    type Error = TopicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

/// What the topic picker currently has selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicChoice {
    Predefined(&'static str),
    Custom(String),
}

impl Default for TopicChoice {
    fn default() -> Self {
        Self::Predefined(PREDEFINED_TOPICS[0])
    }
}

impl TopicChoice {
    /// The topic to confirm, or `None` while a custom topic is still blank.
    #[must_use]
    pub fn resolve(&self) -> Option<Topic> {
        match self {
            Self::Predefined(name) => Topic::new(name).ok(),
            Self::Custom(text) => Topic::new(text).ok(),
        }
    }

    /// Picker state that shows `topic` again: its predefined entry, or the custom text.
    #[must_use]
    pub fn from_topic(topic: &Topic) -> Self {
        PREDEFINED_TOPICS
            .iter()
            .find(|name| **name == topic.as_str())
            .map_or_else(|| Self::Custom(topic.to_string()), |name| Self::Predefined(*name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_is_trimmed_and_non_empty() {
        assert_eq!(Topic::new("  Ancient Rome ").unwrap().as_str(), "Ancient Rome");
        assert_eq!(Topic::new("   ").unwrap_err(), TopicError::Empty);
    }

    #[test]
    fn choice_resolves_custom_only_when_filled() {
        assert_eq!(
            TopicChoice::default().resolve(),
            Some(Topic::new("Solar System").unwrap())
        );
        assert_eq!(TopicChoice::Custom(" ".into()).resolve(), None);
        assert_eq!(
            TopicChoice::Custom("History of Jazz".into()).resolve(),
            Some(Topic::new("History of Jazz").unwrap())
        );
    }

    #[test]
    fn choice_restores_confirmed_topic() {
        assert_eq!(
            TopicChoice::from_topic(&Topic::new("Ancient Rome").unwrap()),
            TopicChoice::Predefined("Ancient Rome")
        );
        assert_eq!(
            TopicChoice::from_topic(&Topic::new("History of Jazz").unwrap()),
            TopicChoice::Custom("History of Jazz".into())
        );
    }
}
