//! Skill profile of the current user.

use serde::{Deserialize, Serialize};

use super::ExperienceLevel;

/// What the user can build with, fed into every generation prompt.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Free-form skills in the order the user entered them
    #[serde(default)]
    pub skills: Vec<String>,

    /// Tools picked from the tool catalog (no duplicates)
    #[serde(default)]
    pub tools: Vec<String>,

    #[serde(default)]
    pub experience: ExperienceLevel,

    /// Client types picked from the client-type catalog
    #[serde(default)]
    pub preferred_clients: Vec<String>,
}

impl Profile {
    /// Replaces the skills from comma-separated input.
    ///
    /// Entries are trimmed and empty entries dropped.
    pub fn set_skills_from_text(&mut self, text: &str) {
        self.skills = text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    /// Toggles set membership of `tool`, returning whether it is now present.
    pub fn toggle_tool(&mut self, tool: &str) -> bool {
        toggle(&mut self.tools, tool)
    }

    /// Toggles set membership of a preferred client type, returning whether
    /// it is now present.
    pub fn toggle_preferred_client(&mut self, client: &str) -> bool {
        toggle(&mut self.preferred_clients, client)
    }
}

fn toggle(items: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = items.iter().position(|t| t == value) {
        items.remove(pos);
        false
    } else {
        items.push(value.to_string());
        true
    }
}
