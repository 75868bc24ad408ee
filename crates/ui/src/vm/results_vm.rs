use quiz_core::SessionState;
use quiz_core::model::FeedbackTier;

/// Results screen content for a finished session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub percentage: u32,
    pub score: u32,
    pub total: u32,
    pub tier: FeedbackTier,
    pub name: String,
    pub level: String,
}

impl ResultsVm {
    #[must_use]
    pub fn from_state(state: &SessionState) -> Option<Self> {
        let outcome = state.outcome()?;
        let (name, level) = state.user_profile.as_ref().map_or_else(
            || (String::new(), String::new()),
            |profile| (profile.name().to_string(), profile.level().label().to_string()),
        );
        Some(Self {
            percentage: outcome.percentage(),
            score: outcome.score,
            total: outcome.total,
            tier: outcome.tier(),
            name,
            level,
        })
    }

    #[must_use]
    pub fn icon(&self) -> &'static str {
        tier_icon(self.tier)
    }

    #[must_use]
    pub fn message(&self) -> String {
        tier_message(self.tier, &self.name)
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.score, self.total)
    }
}

#[must_use]
pub fn tier_icon(tier: FeedbackTier) -> &'static str {
    match tier {
        FeedbackTier::Top => "🏆",
        FeedbackTier::High => "🌟",
        FeedbackTier::Mid => "📚",
        FeedbackTier::Encouragement => "🌱",
    }
}

#[must_use]
pub fn tier_message(tier: FeedbackTier, name: &str) -> String {
    match tier {
        FeedbackTier::Top => format!("Outstanding, {name}! You're a true Master!"),
        FeedbackTier::High => format!("Great job, {name}! You really know your stuff!"),
        FeedbackTier::Mid => format!("Good effort, {name}! Keep learning!"),
        FeedbackTier::Encouragement => {
            format!("Don't give up, {name}! Every mistake is a step towards mastery.")
        }
    }
}
