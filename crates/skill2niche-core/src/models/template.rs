//! Ready-made workflow templates shipped with the catalog.

use serde::Serialize;

/// Example workflow with an importable n8n document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: &'static str,
    pub title: &'static str,
    /// Niche name the template targets
    pub niche: &'static str,
    pub description: &'static str,
    pub tools: &'static [&'static str],
    pub workflow_json: &'static str,
}
