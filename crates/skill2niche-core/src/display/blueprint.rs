//! Blueprint views and the plain-text recipes copied out of them.
//!
//! [`BlueprintView`] is the markdown detail page for an idea with its
//! blueprint. [`ShareText`] and [`StepsText`] are plain text meant for a
//! clipboard or a message, so they carry no markdown.

use std::fmt;

use crate::models::{Blueprint, Idea, NodeBlueprint};

/// Detail page for an idea with its blueprint attached.
pub struct BlueprintView<'a> {
    pub idea: &'a Idea,
    pub blueprint: &'a Blueprint,
}

impl<'a> BlueprintView<'a> {
    /// Returns `None` until the idea has a blueprint.
    pub fn of(idea: &'a Idea) -> Option<Self> {
        idea.blueprint
            .as_ref()
            .map(|blueprint| Self { idea, blueprint })
    }
}

impl fmt::Display for BlueprintView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bp = self.blueprint;
        write!(f, "{}", self.idea)?;

        writeln!(f, "\n## The Solution Strategy")?;
        writeln!(f)?;
        writeln!(f, "{}", bp.goal)?;
        writeln!(f)?;
        writeln!(f, "- **Trigger**: {}", bp.trigger)?;
        writeln!(f, "- **Inputs**: {}", bp.inputs.join(", "))?;
        writeln!(f, "- **Outputs**: {}", bp.outputs.join(", "))?;

        writeln!(f, "\n## n8n Automation Architecture")?;
        writeln!(f)?;
        for (i, step) in bp.steps.iter().enumerate() {
            writeln!(
                f,
                "{}. **{}** `{}` _{}_",
                i + 1,
                step.name,
                step.kind,
                step.category()
            )?;
            if !step.description.is_empty() {
                writeln!(f, "   {}", step.description)?;
            }
        }

        writeln!(f, "\n## Error Handling")?;
        writeln!(f)?;
        writeln!(f, "{}", bp.error_handling)?;

        if let Some(json) = &self.idea.workflow_json {
            writeln!(f, "\n## Workflow JSON")?;
            writeln!(f)?;
            writeln!(f, "```json")?;
            writeln!(f, "{json}")?;
            writeln!(f, "```")?;
        }

        Ok(())
    }
}

/// Numbered one-line-per-node listing: `1. [type] name: description`.
pub struct StepsText<'a>(pub &'a [NodeBlueprint]);

impl fmt::Display for StepsText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{}. [{}] {}: {}",
                i + 1,
                step.kind,
                step.name,
                step.description
            )?;
        }
        Ok(())
    }
}

/// Shareable recipe summarizing an idea's automation.
pub struct ShareText<'a> {
    pub idea: &'a Idea,
    pub blueprint: &'a Blueprint,
}

impl<'a> ShareText<'a> {
    /// Returns `None` until the idea has a blueprint.
    pub fn of(idea: &'a Idea) -> Option<Self> {
        idea.blueprint
            .as_ref()
            .map(|blueprint| Self { idea, blueprint })
    }
}

impl fmt::Display for ShareText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bp = self.blueprint;
        writeln!(f, "🚀 Skill2Niche Automation Recipe: {}", self.idea.title)?;
        writeln!(f, "Target: {}", self.idea.target_client)?;
        writeln!(f, "Goal: {}", bp.goal)?;
        writeln!(f)?;
        writeln!(f, "Trigger: {}", bp.trigger)?;
        writeln!(f, "Inputs: {}", bp.inputs.join(", "))?;
        writeln!(f)?;
        writeln!(f, "Steps:")?;
        writeln!(f, "{}", StepsText(&bp.steps))?;
        writeln!(f)?;
        write!(f, "Error Handling: {}", bp.error_handling.trim_end())
    }
}
