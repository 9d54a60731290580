//! Idea model and the raw generated draft it is built from.

use serde::{Deserialize, Serialize};

use super::{token::new_token, Blueprint};

/// A monetizable automation offer generated for one niche.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Random token assigned when the idea is generated
    pub id: String,

    /// Catalog id of the niche the idea belongs to
    pub niche_id: String,

    pub title: String,
    pub problem_statement: String,
    pub outcome: String,
    pub monetization_model: String,
    pub target_client: String,

    #[serde(default)]
    pub icp_descriptions: Vec<String>,

    #[serde(default)]
    pub outreach_angles: Vec<String>,

    /// Filled on first request and never regenerated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blueprint: Option<Blueprint>,

    /// Importable workflow document, kept verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow_json: Option<String>,
}

/// One item of the idea-generation response, before an id and niche are
/// assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDraft {
    pub title: String,
    pub problem_statement: String,
    pub outcome: String,
    pub monetization_model: String,
    pub target_client: String,
    pub icp_descriptions: Vec<String>,
    pub outreach_angles: Vec<String>,
}

impl Idea {
    /// Builds an idea from a draft with a fresh random id.
    pub fn from_draft(draft: IdeaDraft, niche_id: impl Into<String>) -> Self {
        Self {
            id: new_token(),
            niche_id: niche_id.into(),
            title: draft.title,
            problem_statement: draft.problem_statement,
            outcome: draft.outcome,
            monetization_model: draft.monetization_model,
            target_client: draft.target_client,
            icp_descriptions: draft.icp_descriptions,
            outreach_angles: draft.outreach_angles,
            blueprint: None,
            workflow_json: None,
        }
    }
}
