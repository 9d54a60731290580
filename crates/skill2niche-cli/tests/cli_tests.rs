use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing.
///
/// Generation settings are cleared so a developer's environment never
/// reaches the network.
fn s2n_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("s2n").expect("Failed to find s2n binary");
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("S2N_MODEL")
        .env_remove("S2N_API_BASE_URL")
        .arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("cli_test.db"));
    cmd
}

fn login(temp_dir: &TempDir, email: &str) {
    s2n_cmd(temp_dir)
        .args(["login", email, "--password", "secret"])
        .assert()
        .success();
}

/// Pulls the first `(ID: ...)` value out of rendered output
fn first_id(output: &[u8]) -> String {
    let text = String::from_utf8_lossy(output);
    let start = text.find("(ID: ").expect("no id in output") + "(ID: ".len();
    let end = start + text[start..].find(')').expect("unterminated id");
    text[start..end].to_string()
}

#[test]
fn test_cli_login_and_whoami() {
    let temp_dir = create_cli_test_environment();

    s2n_cmd(&temp_dir)
        .args(["login", "ada@example.com", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Logged in as **ada** (ada@example.com)",
        ));

    s2n_cmd(&temp_dir)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("ada@example.com"));
}

#[test]
fn test_cli_login_rejects_empty_password() {
    let temp_dir = create_cli_test_environment();

    s2n_cmd(&temp_dir)
        .args(["login", "ada@example.com", "--password", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password is required"));
}

#[test]
fn test_cli_commands_require_login() {
    let temp_dir = create_cli_test_environment();

    s2n_cmd(&temp_dir)
        .args(["profile", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));

    s2n_cmd(&temp_dir)
        .args(["niche", "toggle", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn test_cli_home_without_session() {
    let temp_dir = create_cli_test_environment();

    s2n_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[test]
fn test_cli_signup_and_forgot_password_are_notices() {
    let temp_dir = create_cli_test_environment();

    s2n_cmd(&temp_dir)
        .args(["signup", "--name", "Ada", "ada@example.com", "--password", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Account created! You can now log in.",
        ));

    s2n_cmd(&temp_dir)
        .args(["forgot-password", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password reset link sent"));

    // Neither flow logs anyone in
    s2n_cmd(&temp_dir).arg("whoami").assert().failure();
}

#[test]
fn test_cli_profile_edits_persist() {
    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");

    s2n_cmd(&temp_dir)
        .args(["profile", "skills", "Python, , API Integration"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- **Skills**: Python, API Integration",
        ));

    s2n_cmd(&temp_dir)
        .args(["profile", "tool", "airtable"])
        .assert()
        .success();

    s2n_cmd(&temp_dir)
        .args(["profile", "experience", "expert"])
        .assert()
        .success();

    s2n_cmd(&temp_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Airtable"))
        .stdout(predicate::str::contains("Expert"));
}

#[test]
fn test_cli_profile_rejects_unknown_tool() {
    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");

    s2n_cmd(&temp_dir)
        .args(["profile", "tool", "Excel"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("tool"));
}

#[test]
fn test_cli_niche_toggle_and_limit() {
    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");

    for id in ["1", "2", "3", "4", "5"] {
        s2n_cmd(&temp_dir)
            .args(["niche", "toggle", id])
            .assert()
            .success()
            .stdout(predicate::str::contains("Selected"));
    }

    s2n_cmd(&temp_dir)
        .args(["niche", "toggle", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 5 niches"));

    s2n_cmd(&temp_dir)
        .args(["niche", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Niches (5/5 selected)"))
        .stdout(predicate::str::contains("- [x] **Coaches** (1)"))
        .stdout(predicate::str::contains("- [ ] **Real Estate** (6)"));

    s2n_cmd(&temp_dir)
        .args(["niche", "toggle", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deselected Coaches"));
}

#[test]
fn test_cli_engine_start_without_niches_fails() {
    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");

    s2n_cmd(&temp_dir)
        .args(["engine", "start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select at least one niche!"));
}

#[test]
fn test_cli_engine_start_without_api_key_fails() {
    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");
    s2n_cmd(&temp_dir)
        .args(["niche", "toggle", "3"])
        .assert()
        .success();

    s2n_cmd(&temp_dir)
        .args(["engine", "start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate ideas"));

    s2n_cmd(&temp_dir)
        .args(["engine", "ideas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No ideas generated yet."));
}

#[test]
fn test_cli_empty_playbook() {
    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");

    s2n_cmd(&temp_dir)
        .args(["playbook", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your playbook is empty."));
}

#[test]
fn test_cli_tools_lists_catalogs() {
    let temp_dir = create_cli_test_environment();

    s2n_cmd(&temp_dir)
        .arg("tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("- n8n"))
        .stdout(predicate::str::contains("- Solo-creators"));
}

#[test]
fn test_cli_templates() {
    let temp_dir = create_cli_test_environment();

    s2n_cmd(&temp_dir)
        .args(["template", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Abandoned Cart Recovery (WhatsApp)"))
        .stdout(predicate::str::contains("Lead Magnet to CRM Sync"))
        .stdout(predicate::str::contains("AI Content Repurposing"));

    s2n_cmd(&temp_dir)
        .args(["template", "show", "t2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Typeform"))
        .stdout(predicate::str::contains("\"connections\""));

    s2n_cmd(&temp_dir)
        .args(["template", "show", "t9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Template with ID t9 not found"));
}

#[test]
fn test_cli_logout_keeps_data() {
    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");
    s2n_cmd(&temp_dir)
        .args(["niche", "toggle", "7"])
        .assert()
        .success();

    s2n_cmd(&temp_dir)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out ada@example.com"));

    s2n_cmd(&temp_dir).arg("whoami").assert().failure();

    login(&temp_dir, "ada@example.com");
    s2n_cmd(&temp_dir)
        .args(["niche", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- [x] **SaaS** (7)"));
}

#[test]
fn test_cli_users_do_not_share_data() {
    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");
    s2n_cmd(&temp_dir)
        .args(["profile", "skills", "Rust"])
        .assert()
        .success();

    login(&temp_dir, "grace@example.com");
    s2n_cmd(&temp_dir)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Skills**: (none)"));
}

// ============================================================================
// Generation against a stubbed endpoint
// ============================================================================

fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    }))
}

fn ideas_text(count: usize) -> String {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "title": format!("Lead Rescue {i}"),
                "problemStatement": "Leads sit in inboxes for days",
                "outcome": "Every lead gets a reply within 5 minutes",
                "monetizationModel": "Retainer",
                "targetClient": "Solo coaches",
                "icpDescriptions": ["Coaches with 50+ leads a month"],
                "outreachAngles": ["How many leads went cold last week?"]
            })
        })
        .collect();
    Value::Array(items).to_string()
}

fn generating_cmd(temp_dir: &TempDir, server: &MockServer) -> Command {
    let mut cmd = s2n_cmd(temp_dir);
    cmd.args(["--api-key", "test-key", "--model", "test-model"])
        .args(["--api-base-url", &server.uri()]);
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_generate_save_and_delete() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/test-model:generateContent"))
        .respond_with(gemini_reply(&ideas_text(8)))
        .mount(&server)
        .await;

    let temp_dir = create_cli_test_environment();
    login(&temp_dir, "ada@example.com");
    s2n_cmd(&temp_dir)
        .args(["niche", "toggle", "1"])
        .assert()
        .success();

    let output = generating_cmd(&temp_dir, &server)
        .args(["engine", "start"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lead Rescue 0"))
        .stdout(predicate::str::contains("- **Niche**: Coaches"))
        .get_output()
        .stdout
        .clone();
    let idea_id = first_id(&output);

    let output = s2n_cmd(&temp_dir)
        .args(["playbook", "save", &idea_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved \"Lead Rescue 0\""))
        .get_output()
        .stdout
        .clone();
    let entry_id = first_id(&output);

    s2n_cmd(&temp_dir)
        .args(["playbook", "save", &idea_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in the playbook"));

    s2n_cmd(&temp_dir)
        .args(["playbook", "status", &entry_id, "pitching"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moved to Pitching"));

    s2n_cmd(&temp_dir)
        .args(["playbook", "delete", &entry_id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled"));

    s2n_cmd(&temp_dir)
        .args(["playbook", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pitching (1)"));

    s2n_cmd(&temp_dir)
        .args(["playbook", "delete", &entry_id])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted \"Lead Rescue 0\""));

    s2n_cmd(&temp_dir)
        .args(["playbook", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your playbook is empty."));
}
