//! Display implementations for domain models.
//!
//! Everything renders as markdown so the CLI can hand it to the terminal
//! renderer and the MCP server can return it as text content.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    catalog,
    models::{
        ExperienceLevel, Idea, Niche, NodeCategory, PlaybookEntry, PlaybookStatus, Profile,
        Template, User,
    },
};

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlaybookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged in as **{}** ({})", self.name, self.email)
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** ({}): {}", self.name, self.id, self.description)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Skill Profile")?;
        writeln!(f)?;
        writeln!(f, "- **Skills**: {}", list_or_none(&self.skills))?;
        writeln!(f, "- **Tools**: {}", list_or_none(&self.tools))?;
        writeln!(f, "- **Experience**: {}", self.experience)?;
        writeln!(
            f,
            "- **Preferred clients**: {}",
            list_or_none(&self.preferred_clients)
        )
    }
}

impl Idea {
    /// Compact card used in idea lists.
    pub(super) fn fmt_card(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Niche**: {}", niche_name(&self.niche_id))?;
        writeln!(f, "- **Target client**: {}", self.target_client)?;
        writeln!(f, "- **Monetization**: {}", self.monetization_model)?;
        writeln!(f, "- **Problem**: {}", self.problem_statement)?;
        if self.blueprint.is_some() {
            writeln!(f, "- **Blueprint**: ready")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Idea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Niche**: {}", niche_name(&self.niche_id))?;
        writeln!(f, "- **Target client**: {}", self.target_client)?;
        writeln!(f, "- **Monetization**: {}", self.monetization_model)?;
        writeln!(f)?;

        writeln!(f, "## Problem")?;
        writeln!(f)?;
        writeln!(f, "{}", self.problem_statement)?;
        writeln!(f)?;
        writeln!(f, "## Outcome")?;
        writeln!(f)?;
        writeln!(f, "{}", self.outcome)?;

        if !self.icp_descriptions.is_empty() {
            writeln!(f, "\n## Ideal Customers")?;
            writeln!(f)?;
            for icp in &self.icp_descriptions {
                writeln!(f, "- {icp}")?;
            }
        }

        if !self.outreach_angles.is_empty() {
            writeln!(f, "\n## Outreach & Pitch Hooks")?;
            writeln!(f)?;
            for angle in &self.outreach_angles {
                writeln!(f, "- \"{angle}\"")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlaybookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} (ID: {}) ({})",
            self.idea.title,
            self.id,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Niche**: {}", niche_name(&self.idea.niche_id))?;
        writeln!(f, "- **Monetization**: {}", self.idea.monetization_model)?;
        writeln!(f, "- **Added**: {}", LocalDateTime(&self.created_at))?;
        if !self.notes.is_empty() {
            writeln!(f, "- **Notes**: {}", self.notes)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Niche**: {}", self.niche)?;
        writeln!(f, "- **Tools**: {}", self.tools.join(", "))?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

// Ideas restored from storage may reference a niche id the catalog no longer
// has.
fn niche_name(niche_id: &str) -> String {
    catalog::find_niche(niche_id)
        .map(|n| n.name)
        .unwrap_or_else(|| niche_id.to_string())
}
