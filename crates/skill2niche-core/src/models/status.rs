//! Status enumerations for profiles and playbook entries.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Self-reported experience level of the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum ExperienceLevel {
    Beginner,
    #[default]
    Intermediate,
    Expert,
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "expert" => Ok(ExperienceLevel::Expert),
            _ => Err(format!("Invalid experience level: {s}")),
        }
    }
}

impl ExperienceLevel {
    /// Convert to the label used in prompts and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Expert => "Expert",
        }
    }
}

/// Pipeline column of a playbook entry.
///
/// Transitions are free-form: every status is reachable from every other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum PlaybookStatus {
    /// Saved but not yet worked on
    #[default]
    Idea,

    /// Automation is being designed
    Designing,

    /// Offer is being pitched to prospects
    Pitching,

    /// Running for a paying client
    Live,
}

impl PlaybookStatus {
    /// All statuses in board column order.
    pub const ALL: [PlaybookStatus; 4] = [
        PlaybookStatus::Idea,
        PlaybookStatus::Designing,
        PlaybookStatus::Pitching,
        PlaybookStatus::Live,
    ];

    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybookStatus::Idea => "Idea",
            PlaybookStatus::Designing => "Designing",
            PlaybookStatus::Pitching => "Pitching",
            PlaybookStatus::Live => "Live",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use skill2niche_core::models::PlaybookStatus;
    ///
    /// assert_eq!(PlaybookStatus::Live.with_icon(), "● Live");
    /// assert_eq!(PlaybookStatus::Idea.with_icon(), "○ Idea");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlaybookStatus::Idea => "○ Idea",
            PlaybookStatus::Designing => "✎ Designing",
            PlaybookStatus::Pitching => "➤ Pitching",
            PlaybookStatus::Live => "● Live",
        }
    }
}

impl FromStr for PlaybookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "idea" => Ok(PlaybookStatus::Idea),
            "designing" => Ok(PlaybookStatus::Designing),
            "pitching" => Ok(PlaybookStatus::Pitching),
            "live" => Ok(PlaybookStatus::Live),
            _ => Err(format!("Invalid playbook status: {s}")),
        }
    }
}
