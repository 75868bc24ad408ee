use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProfileError {
    #[error("name cannot be empty")]
    EmptyName,
}

//
// ─── PROFICIENCY LEVEL ────────────────────────────────────────────────────────
//

/// How advanced the quiz taker is. Used to tailor question difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProficiencyLevel {
    MiddleSchool,
    #[default]
    HighSchool,
    University,
    Professional,
    Casual,
    /// Free-text level typed by the user.
    Other(String),
}

impl ProficiencyLevel {
    /// The fixed levels, in picker order.
    pub const ALL: [ProficiencyLevel; 5] = [
        ProficiencyLevel::MiddleSchool,
        ProficiencyLevel::HighSchool,
        ProficiencyLevel::University,
        ProficiencyLevel::Professional,
        ProficiencyLevel::Casual,
    ];

    /// Label sent to the generator and the result log.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::MiddleSchool => "Middle School",
            Self::HighSchool => "High School Student",
            Self::University => "University / College",
            Self::Professional => "Professional / Expert",
            Self::Casual => "Casual Learner",
            Self::Other(text) => text,
        }
    }

    /// Shorter label for the picker.
    #[must_use]
    pub fn display_label(&self) -> &str {
        match self {
            Self::HighSchool => "High School",
            other => other.label(),
        }
    }

    /// Parse either a wire label or a display label; anything else is kept as free text.
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label() == trimmed || level.display_label() == trimmed)
            .unwrap_or_else(|| {
                if trimmed.is_empty() {
                    Self::default()
                } else {
                    Self::Other(trimmed.to_string())
                }
            })
    }
}

impl fmt::Display for ProficiencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for ProficiencyLevel {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<ProficiencyLevel> for String {
    fn from(level: ProficiencyLevel) -> Self {
        level.label().to_string()
    }
}

//
// ─── USER PROFILE ─────────────────────────────────────────────────────────────
//

/// Who is taking the quiz. Captured once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    name: String,
    level: ProficiencyLevel,
}

impl UserProfile {
    /// # Errors
    ///
    /// Returns `ProfileError::EmptyName` if the trimmed name is empty.
    pub fn new(name: impl AsRef<str>, level: ProficiencyLevel) -> Result<Self, ProfileError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            level,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level(&self) -> &ProficiencyLevel {
        &self.level
    }
}
