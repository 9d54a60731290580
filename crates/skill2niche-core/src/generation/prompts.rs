//! Prompt templates and response schemas for the three generation calls.

use serde_json::{json, Value};

use crate::models::{Idea, Niche, Profile};

/// Prompt asking for automatable business problems across the selected
/// niches.
pub fn idea_prompt(profile: &Profile, niches: &[Niche]) -> String {
    let targets = niches
        .iter()
        .map(|n| format!("{} ({})", n.name, n.description))
        .collect::<Vec<_>>()
        .join("; ");

    format!(
        "Act as a World-Class Business Automation Consultant.\n\
         User Skills: {skills}\n\
         Tools: {tools}\n\
         Level: {level}\n\
         Target Niches: {targets}\n\
         \n\
         For each niche, generate 3-5 concrete business problems that can be solved with automation.\n\
         Focus on repeatable workflows that add massive value.\n\
         Ensure ideas are high-value and monetizable.",
        skills = profile.skills.join(", "),
        tools = profile.tools.join(", "),
        level = profile.experience.as_str(),
    )
}

/// Prompt asking for an n8n-focused blueprint of one idea.
pub fn blueprint_prompt(idea: &Idea, profile: &Profile) -> String {
    format!(
        "Generate a detailed n8n-focused automation blueprint for the following idea:\n\
         Idea Title: {title}\n\
         Problem: {problem}\n\
         Tools available: {tools}\n\
         \n\
         Provide:\n\
         1. A clear goal.\n\
         2. Input/Output requirements.\n\
         3. The trigger node.\n\
         4. A step-by-step sequence of nodes including Logic (IF, Set, Code), App nodes (Gmail, Google Sheets, etc.), and Data transformation.\n\
         5. Error handling recommendations.",
        title = idea.title,
        problem = idea.problem_statement,
        tools = profile.tools.join(", "),
    )
}

/// Free-text prompt asking for an importable n8n workflow document.
pub fn workflow_prompt(idea: &Idea) -> String {
    format!(
        "Generate a valid-looking n8n workflow JSON structure for this automation idea:\n\
         Title: {title}\n\
         Goal: {goal}\n\
         \n\
         The JSON should follow the n8n version 1 format:\n\
         {{\n  \"nodes\": [...],\n  \"connections\": {{...}}\n}}\n\
         Ensure it includes a trigger node and at least 3 processing/app nodes. Return ONLY the raw JSON string.",
        title = idea.title,
        goal = idea.outcome,
    )
}

fn string_list(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "description": description,
    })
}

/// Response schema for idea generation: an array of idea drafts.
pub fn idea_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING", "description": "Catchy service/offer title" },
                "problemStatement": { "type": "STRING", "description": "Detailed pain point description" },
                "outcome": { "type": "STRING", "description": "Quantifiable benefit to the client" },
                "monetizationModel": { "type": "STRING", "description": "Retainer, one-time, or usage-based" },
                "targetClient": { "type": "STRING", "description": "Specific ICP definition" },
                "icpDescriptions": string_list("3-5 Ideal Client Profile descriptions"),
                "outreachAngles": string_list("3-5 Hook sentences for cold outreach"),
            },
            "required": [
                "title",
                "problemStatement",
                "outcome",
                "monetizationModel",
                "targetClient",
                "icpDescriptions",
                "outreachAngles"
            ],
        }
    })
}

/// Response schema for blueprint generation.
pub fn blueprint_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "goal": { "type": "STRING" },
            "inputs": { "type": "ARRAY", "items": { "type": "STRING" } },
            "outputs": { "type": "ARRAY", "items": { "type": "STRING" } },
            "trigger": { "type": "STRING", "description": "The n8n trigger node and event" },
            "steps": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "type": { "type": "STRING" },
                        "description": { "type": "STRING" }
                    }
                }
            },
            "errorHandling": { "type": "STRING" }
        },
        "required": ["goal", "inputs", "outputs", "trigger", "steps", "errorHandling"]
    })
}
