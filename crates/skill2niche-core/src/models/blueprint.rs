//! Blueprint model: a step-by-step automation design for an idea.

use serde::{Deserialize, Serialize};

/// Workflow design generated once per idea and immutable once attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    /// What the automation achieves for the client
    pub goal: String,

    /// Input requirements (accounts, data sources)
    pub inputs: Vec<String>,

    /// Output requirements (deliverables)
    pub outputs: Vec<String>,

    /// Trigger node and event that starts the workflow
    pub trigger: String,

    /// Ordered workflow nodes
    pub steps: Vec<NodeBlueprint>,

    /// Stability recommendation
    pub error_handling: String,
}

/// A single node in a blueprint's workflow.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NodeBlueprint {
    #[serde(default)]
    pub name: String,

    /// Node type tag as returned by the model (e.g. "Gmail", "IF", "Code")
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub description: String,
}

/// Coarse classification of a node type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Trigger,
    Logic,
    Code,
    App,
}

impl NodeBlueprint {
    /// Classifies the node by substrings of its type tag, first match wins.
    pub fn category(&self) -> NodeCategory {
        let kind = self.kind.to_lowercase();
        if kind.contains("trigger") {
            NodeCategory::Trigger
        } else if ["logic", "if", "filter"].iter().any(|k| kind.contains(k)) {
            NodeCategory::Logic
        } else if ["code", "function", "set"].iter().any(|k| kind.contains(k)) {
            NodeCategory::Code
        } else {
            NodeCategory::App
        }
    }
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Trigger => "trigger",
            NodeCategory::Logic => "logic",
            NodeCategory::Code => "code",
            NodeCategory::App => "app",
        }
    }
}
