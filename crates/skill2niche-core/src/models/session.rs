//! Working session: the niche selection and the ideas generated from it.

use serde::{Deserialize, Serialize};

use super::{Idea, Niche};

/// Part of the in-memory state that survives between CLI invocations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkingSession {
    #[serde(default)]
    pub selected_niches: Vec<Niche>,

    #[serde(default)]
    pub ideas: Vec<Idea>,
}
