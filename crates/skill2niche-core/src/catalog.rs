//! Static catalogs used as selection inputs and fallback content.

use crate::models::{Niche, Template};

/// Maximum number of niches that can be selected at once.
pub const MAX_SELECTED_NICHES: usize = 5;

/// Tools a profile can pick from.
pub const TOOLS: &[&str] = &[
    "n8n", "Zapier", "Make", "Airtable", "Notion", "WordPress", "Shopify", "HubSpot", "Slack",
    "OpenAI",
];

/// Client types a profile can prefer.
pub const CLIENT_TYPES: &[&str] = &["SMB", "Enterprise", "Agencies", "SaaS", "Solo-creators"];

// (id, name, description)
const NICHES: &[(&str, &str, &str)] = &[
    ("1", "Coaches", "Business, health, or life coaches scaling their practice."),
    ("2", "Local Services", "Plumbers, HVAC, clinics, and law firms."),
    ("3", "Ecommerce", "Shopify/WooCommerce brand owners."),
    ("4", "Agencies", "Marketing, creative, or recruiting agencies."),
    ("5", "Course Creators", "Online educators with high volume leads."),
    ("6", "Real Estate", "Agents and brokers managing property leads."),
    ("7", "SaaS", "Software companies automating ops."),
    ("8", "Content Creators", "YouTubers and podcasters scaling workflows."),
];

/// Example workflows with importable n8n documents.
pub const TEMPLATES: &[Template] = &[
    Template {
        id: "t1",
        title: "Abandoned Cart Recovery (WhatsApp)",
        niche: "Ecommerce",
        description: "Triggered by Shopify abandoned carts, sends a personalized WhatsApp message via Twilio.",
        tools: &["n8n", "Shopify", "Twilio"],
        workflow_json: r#"{"nodes":[{"parameters":{},"name":"Shopify Trigger","type":"n8n-nodes-base.shopifyTrigger","typeVersion":1,"position":[250,300]},{"parameters":{"message":"Hey {{ $json.customer.first_name }}, we noticed you left something behind!"},"name":"Twilio","type":"n8n-nodes-base.twilio","typeVersion":1,"position":[450,300]}],"connections":{"Shopify Trigger":{"main":[[{"node":"Twilio","type":"main","index":0}]]}}}"#,
    },
    Template {
        id: "t2",
        title: "Lead Magnet to CRM Sync",
        niche: "Coaches",
        description: "Connects Typeform submissions to HubSpot CRM and sends a Slack notification.",
        tools: &["n8n", "Typeform", "HubSpot", "Slack"],
        workflow_json: r#"{"nodes":[{"parameters":{},"name":"Typeform","type":"n8n-nodes-base.typeformTrigger","typeVersion":1,"position":[100,200]},{"parameters":{"resource":"contact"},"name":"HubSpot","type":"n8n-nodes-base.hubspot","typeVersion":1,"position":[300,200]},{"parameters":{"channel":"leads"},"name":"Slack","type":"n8n-nodes-base.slack","typeVersion":1,"position":[500,200]}],"connections":{"Typeform":{"main":[[{"node":"HubSpot","type":"main","index":0}]]},"HubSpot":{"main":[[{"node":"Slack","type":"main","index":0}]]}}}"#,
    },
    Template {
        id: "t3",
        title: "AI Content Repurposing",
        niche: "Content Creators",
        description: "Transcribes YouTube videos via Whisper, summarizes with GPT-4, and posts to LinkedIn.",
        tools: &["n8n", "OpenAI", "LinkedIn", "YouTube"],
        workflow_json: r#"{"nodes":[{"parameters":{},"name":"YouTube Trigger","type":"n8n-nodes-base.googleYouTubeTrigger","typeVersion":1,"position":[100,100]},{"parameters":{"model":"whisper-1"},"name":"Whisper","type":"n8n-nodes-base.openAi","typeVersion":1,"position":[300,100]},{"parameters":{"model":"gpt-4"},"name":"GPT-4","type":"n8n-nodes-base.openAi","typeVersion":1,"position":[500,100]},{"parameters":{},"name":"LinkedIn","type":"n8n-nodes-base.linkedIn","typeVersion":1,"position":[700,100]}],"connections":{"YouTube Trigger":{"main":[[{"node":"Whisper","type":"main","index":0}]]},"Whisper":{"main":[[{"node":"GPT-4","type":"main","index":0}]]},"GPT-4":{"main":[[{"node":"LinkedIn","type":"main","index":0}]]}}}"#,
    },
];

/// All catalog niches in display order.
pub fn niches() -> Vec<Niche> {
    NICHES.iter().map(|&(id, name, description)| to_niche(id, name, description)).collect()
}

/// Looks up a niche by id.
pub fn find_niche(id: &str) -> Option<Niche> {
    NICHES
        .iter()
        .find(|(niche_id, _, _)| *niche_id == id)
        .map(|&(id, name, description)| to_niche(id, name, description))
}

/// Looks up a template by id.
pub fn find_template(id: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Returns the catalog spelling of `tool`, matched case-insensitively.
pub fn canonical_tool(tool: &str) -> Option<&'static str> {
    TOOLS.iter().copied().find(|t| t.eq_ignore_ascii_case(tool.trim()))
}

/// Returns the catalog spelling of a client type, matched case-insensitively.
pub fn canonical_client_type(client: &str) -> Option<&'static str> {
    CLIENT_TYPES
        .iter()
        .copied()
        .find(|c| c.eq_ignore_ascii_case(client.trim()))
}

fn to_niche(id: &str, name: &str, description: &str) -> Niche {
    Niche {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_niche_catalog_ids_are_unique() {
        let all = niches();
        assert_eq!(all.len(), 8);
        for (i, niche) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|other| other.id != niche.id));
        }
    }

    #[test]
    fn test_find_niche() {
        assert_eq!(find_niche("1").map(|n| n.name), Some("Coaches".to_string()));
        assert!(find_niche("99").is_none());
    }

    #[test]
    fn test_canonical_lookups_ignore_case() {
        assert_eq!(canonical_tool("N8N"), Some("n8n"));
        assert_eq!(canonical_tool(" hubspot "), Some("HubSpot"));
        assert_eq!(canonical_tool("Excel"), None);
        assert_eq!(canonical_client_type("saas"), Some("SaaS"));
    }

    #[test]
    fn test_template_documents_are_json() {
        for template in TEMPLATES {
            let doc: serde_json::Value = serde_json::from_str(template.workflow_json).unwrap();
            assert!(doc["nodes"].is_array(), "{} has no nodes", template.id);
            assert!(doc["connections"].is_object());
        }
        assert!(find_template("t2").is_some());
    }
}
