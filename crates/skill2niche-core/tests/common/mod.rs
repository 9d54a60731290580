#![allow(dead_code)]

use serde_json::{json, Value};
use skill2niche_core::{params::Login, Engine, EngineBuilder};
use tempfile::TempDir;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

pub const MODEL: &str = "test-model";
pub const API_KEY: &str = "test-key";
pub const GENERATE_PATH: &str = "/models/test-model:generateContent";

/// Helper function to create an engine talking to `server`
pub async fn create_test_engine(server: &MockServer) -> (TempDir, Engine) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let engine = open_engine(&temp_dir, server).await;
    (temp_dir, engine)
}

/// Opens (or reopens) the engine stored in `temp_dir`
pub async fn open_engine(temp_dir: &TempDir, server: &MockServer) -> Engine {
    EngineBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_api_key(API_KEY)
        .with_model(MODEL)
        .with_api_base_url(server.uri())
        .build()
        .await
        .expect("Failed to create engine")
}

pub async fn login(engine: &Engine, email: &str) {
    engine
        .login(&Login {
            email: email.to_string(),
            password: "pw".to_string(),
        })
        .await
        .expect("Failed to log in");
}

/// A successful `generateContent` response whose only part is `text`
pub fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    }))
}

/// Mounts a reply for every generation request
pub async fn mount_reply(server: &MockServer, text: &str) {
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", API_KEY))
        .respond_with(gemini_reply(text))
        .mount(server)
        .await;
}

pub fn idea_json(title: &str) -> Value {
    json!({
        "title": title,
        "problemStatement": "Leads sit in inboxes for days",
        "outcome": "Every lead gets a reply within 5 minutes",
        "monetizationModel": "Retainer",
        "targetClient": "Solo coaches",
        "icpDescriptions": ["Coaches with 50+ leads a month"],
        "outreachAngles": ["How many leads went cold last week?"]
    })
}

/// Idea-list response text with `count` items
pub fn ideas_text(count: usize) -> String {
    let items: Vec<Value> = (0..count).map(|i| idea_json(&format!("Idea {i}"))).collect();
    Value::Array(items).to_string()
}

pub fn blueprint_text() -> String {
    json!({
        "goal": "Reply to every lead within 5 minutes",
        "inputs": ["Gmail account", "Calendly link"],
        "outputs": ["Personalized reply"],
        "trigger": "Gmail Trigger on new email",
        "steps": [
            { "name": "New Lead", "type": "Gmail Trigger", "description": "Watches the inbox" },
            { "name": "Qualify", "type": "IF", "description": "Checks the budget field" },
            { "name": "Reply", "type": "Gmail", "description": "Sends the booking link" }
        ],
        "errorHandling": "Retry failed sends and alert Slack"
    })
    .to_string()
}
