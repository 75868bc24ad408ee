use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::{ProficiencyLevel, Topic};

//
// ─── SCORE ────────────────────────────────────────────────────────────────────
//

/// Final score of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: u32,
    pub total: u32,
}

impl QuizOutcome {
    #[must_use]
    pub fn new(score: u32, total: u32) -> Self {
        Self { score, total }
    }

    /// Whole-number percentage; `0` for an empty quiz.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        self.score.saturating_mul(100) / self.total
    }

    #[must_use]
    pub fn tier(&self) -> FeedbackTier {
        FeedbackTier::from_percentage(self.percentage())
    }
}

/// Feedback category shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTier {
    Top,
    High,
    Mid,
    Encouragement,
}

impl FeedbackTier {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => Self::Top,
            80.. => Self::High,
            60.. => Self::Mid,
            _ => Self::Encouragement,
        }
    }
}

//
// ─── RESULT PAYLOAD ───────────────────────────────────────────────────────────
//

/// Everything the result log needs from a finished session, minus the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub name: String,
    pub level: ProficiencyLevel,
    pub topic: Topic,
    pub score: u32,
    pub total: u32,
}

/// Record posted to the result log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub name: String,
    pub level: String,
    pub topic: String,
    pub score: u32,
    pub total: u32,
    /// RFC 3339 / ISO-8601 in UTC.
    pub timestamp: DateTime<Utc>,
}

impl QuizResult {
    #[must_use]
    pub fn new(summary: QuizSummary, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: summary.name,
            level: summary.level.label().to_string(),
            topic: summary.topic.into(),
            score: summary.score,
            total: summary.total,
            timestamp,
        }
    }
}
