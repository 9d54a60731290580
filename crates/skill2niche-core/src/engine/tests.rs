//! Tests for the engine module that need no generation service.

use super::*;
use crate::{
    generation::ApiError,
    models::{Blueprint, ExperienceLevel, IdeaDraft, PlaybookStatus},
    params::{
        DeleteEntry, EntryRef, IdeaRef, Login, SetExperience, SetSkills, ToggleClient,
        ToggleNiche, ToggleTool, UpdateNotes, UpdateStatus,
    },
    store::{StorageKey, Store},
};
use std::sync::Arc;
use tempfile::TempDir;

/// Helper function to create a test engine without an API key
async fn create_test_engine() -> (TempDir, Engine) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let engine = EngineBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create engine");
    (temp_dir, engine)
}

async fn reopen(temp_dir: &TempDir) -> Engine {
    EngineBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .expect("Failed to reopen engine")
}

fn credentials(email: &str) -> Login {
    Login {
        email: email.to_string(),
        password: "pw".to_string(),
    }
}

fn idea(title: &str) -> Idea {
    let draft = IdeaDraft {
        title: title.to_string(),
        problem_statement: "Leads go cold".to_string(),
        outcome: "Faster replies".to_string(),
        monetization_model: "Retainer".to_string(),
        target_client: "Coaches".to_string(),
        icp_descriptions: vec![],
        outreach_angles: vec![],
    };
    Idea::from_draft(draft, "1")
}

fn blueprint() -> Blueprint {
    Blueprint {
        goal: "Reply fast".to_string(),
        inputs: vec!["Gmail".to_string()],
        outputs: vec!["Reply".to_string()],
        trigger: "Gmail Trigger".to_string(),
        steps: vec![],
        error_handling: "Retry".to_string(),
    }
}

fn niche(id: &str) -> ToggleNiche {
    ToggleNiche {
        niche_id: id.to_string(),
    }
}

#[tokio::test]
async fn test_operations_require_login() {
    let (_temp_dir, engine) = create_test_engine().await;

    assert!(engine.current_user().is_none());
    let result = engine
        .set_skills(&SetSkills {
            skills: "n8n".to_string(),
        })
        .await;
    assert!(matches!(result, Err(EngineError::NotLoggedIn)));
    assert!(matches!(
        engine.start_engine().await,
        Err(EngineError::NotLoggedIn)
    ));
}

#[tokio::test]
async fn test_profile_edits_persist_across_restarts() {
    let (temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();

    engine
        .set_skills(&SetSkills {
            skills: " n8n, , Python ,".to_string(),
        })
        .await
        .unwrap();
    engine
        .toggle_tool(&ToggleTool {
            tool: "zapier".to_string(),
        })
        .await
        .unwrap();
    engine
        .set_experience(&SetExperience {
            level: ExperienceLevel::Expert,
        })
        .await
        .unwrap();
    engine
        .toggle_preferred_client(&ToggleClient {
            client: "smb".to_string(),
        })
        .await
        .unwrap();
    drop(engine);

    let engine = reopen(&temp_dir).await;
    let profile = engine.profile();
    assert_eq!(profile.skills, vec!["n8n", "Python"]);
    assert_eq!(profile.tools, vec!["Zapier"]);
    assert_eq!(profile.experience, ExperienceLevel::Expert);
    assert_eq!(profile.preferred_clients, vec!["SMB"]);
}

#[tokio::test]
async fn test_toggle_tool_twice_removes_it() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();

    let params = ToggleTool {
        tool: "n8n".to_string(),
    };
    assert_eq!(engine.toggle_tool(&params).await.unwrap().tools, vec!["n8n"]);
    assert!(engine.toggle_tool(&params).await.unwrap().tools.is_empty());
}

#[tokio::test]
async fn test_unknown_catalog_values_are_rejected() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();

    let result = engine
        .toggle_tool(&ToggleTool {
            tool: "Excel".to_string(),
        })
        .await;
    assert!(matches!(result, Err(EngineError::InvalidInput { field, .. }) if field == "tool"));

    let result = engine.toggle_niche(&niche("42")).await;
    assert!(matches!(result, Err(EngineError::InvalidInput { field, .. }) if field == "niche_id"));
    assert!(engine.selected_niches().is_empty());
}

#[tokio::test]
async fn test_niche_selection_is_capped() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();

    for id in ["1", "2", "3", "4", "5"] {
        assert!(matches!(
            engine.toggle_niche(&niche(id)).await.unwrap(),
            NicheToggle::Selected(_)
        ));
    }

    let outcome = engine.toggle_niche(&niche("6")).await.unwrap();
    assert_eq!(outcome, NicheToggle::LimitReached);
    assert_eq!(engine.selected_niches().len(), 5);

    // Deselecting frees a slot
    assert!(matches!(
        engine.toggle_niche(&niche("2")).await.unwrap(),
        NicheToggle::Deselected(_)
    ));
    assert!(matches!(
        engine.toggle_niche(&niche("6")).await.unwrap(),
        NicheToggle::Selected(_)
    ));

    engine.clear_niches().await.unwrap();
    assert!(engine.selected_niches().is_empty());
}

#[tokio::test]
async fn test_start_engine_without_niches_changes_nothing() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    engine.state().ideas = vec![idea("Existing")];

    let result = engine.start_engine().await;
    assert!(matches!(
        result,
        Err(EngineError::InvalidInput { field, reason }) if field == "niches" && reason == "Select at least one niche!"
    ));
    assert_eq!(engine.ideas().len(), 1);
    assert!(!engine.is_busy());
}

#[tokio::test]
async fn test_failed_generation_clears_busy_and_keeps_ideas() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    engine.toggle_niche(&niche("1")).await.unwrap();
    engine.state().ideas = vec![idea("Existing")];

    // No API key configured
    let result = engine.start_engine().await;
    assert!(matches!(
        result,
        Err(EngineError::Generation(ApiError::InvalidConfig(_)))
    ));
    assert!(!engine.is_busy());
    assert_eq!(engine.ideas()[0].title, "Existing");
}

#[tokio::test]
async fn test_second_start_while_busy_is_rejected() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    engine.toggle_niche(&niche("1")).await.unwrap();

    let guard = {
        let mut state = engine.state();
        BusyGuard::acquire(&engine, &mut state).unwrap()
    };
    assert!(engine.is_busy());
    assert!(matches!(engine.start_engine().await, Err(EngineError::Busy)));

    drop(guard);
    assert!(!engine.is_busy());
}

#[tokio::test]
async fn test_failed_blueprint_clears_in_flight_marker() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let target = idea("Needs blueprint");
    let idea_id = target.id.clone();
    engine.state().ideas = vec![target];

    let result = engine
        .view_blueprint(&IdeaRef {
            idea_id: idea_id.clone(),
        })
        .await;
    assert!(matches!(result, Err(EngineError::Generation(_))));
    assert!(!engine.is_generating(GenerationKind::Blueprint, &idea_id));
    assert!(engine.ideas()[0].blueprint.is_none());
}

#[tokio::test]
async fn test_concurrent_generation_for_same_idea_is_rejected() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let target = idea("Busy idea");
    let idea_id = target.id.clone();
    engine.state().ideas = vec![target];

    let guard = {
        let mut state = engine.state();
        InFlightGuard::acquire(&engine, &mut state, GenerationKind::Blueprint, &idea_id).unwrap()
    };

    let result = engine
        .view_blueprint(&IdeaRef {
            idea_id: idea_id.clone(),
        })
        .await;
    assert!(matches!(result, Err(EngineError::GenerationInProgress { .. })));
    assert!(!engine.is_generating(GenerationKind::Workflow, &idea_id));

    drop(guard);
    assert!(!engine.is_generating(GenerationKind::Blueprint, &idea_id));
}

#[tokio::test]
async fn test_cached_blueprint_needs_no_request() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let mut target = idea("Cached");
    target.blueprint = Some(blueprint());
    let idea_id = target.id.clone();
    engine.state().ideas = vec![target];

    // Would fail without an API key if a request were made
    let viewed = engine
        .view_blueprint(&IdeaRef {
            idea_id: idea_id.clone(),
        })
        .await
        .unwrap();
    assert_eq!(viewed.blueprint, Some(blueprint()));
    assert_eq!(engine.snapshot().viewing, Some(idea_id));
}

#[tokio::test]
async fn test_unknown_idea_is_not_found() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();

    let params = IdeaRef {
        idea_id: "missing".to_string(),
    };
    assert!(matches!(
        engine.view_blueprint(&params).await,
        Err(EngineError::IdeaNotFound { .. })
    ));
    assert!(matches!(
        engine.save_to_playbook(&params).await,
        Err(EngineError::IdeaNotFound { .. })
    ));
}

#[tokio::test]
async fn test_save_to_playbook_prepends_and_rejects_duplicates() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let first = idea("First");
    let second = idea("Second");
    engine.state().ideas = vec![first.clone(), second.clone()];

    engine
        .save_to_playbook(&IdeaRef {
            idea_id: first.id.clone(),
        })
        .await
        .unwrap();
    let entry = engine
        .save_to_playbook(&IdeaRef {
            idea_id: second.id.clone(),
        })
        .await
        .unwrap();

    assert_eq!(entry.status, PlaybookStatus::Idea);
    assert!(entry.notes.is_empty());
    assert_eq!(engine.view(), ActiveView::Playbook);

    let titles: Vec<String> = engine
        .playbook()
        .into_iter()
        .map(|e| e.idea.title)
        .collect();
    assert_eq!(titles, vec!["Second", "First"]);

    let result = engine
        .save_to_playbook(&IdeaRef {
            idea_id: first.id.clone(),
        })
        .await;
    assert!(matches!(result, Err(EngineError::AlreadyInPlaybook { .. })));
    assert_eq!(engine.playbook().len(), 2);
}

#[tokio::test]
async fn test_status_notes_and_board() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let ideas = vec![idea("A"), idea("B"), idea("C")];
    engine.state().ideas = ideas.clone();

    let mut entry_ids = Vec::new();
    for i in &ideas {
        let entry = engine
            .save_to_playbook(&IdeaRef {
                idea_id: i.id.clone(),
            })
            .await
            .unwrap();
        entry_ids.push(entry.id);
    }

    engine
        .update_status(&UpdateStatus {
            id: entry_ids[0].clone(),
            status: PlaybookStatus::Live,
        })
        .await
        .unwrap();
    let updated = engine
        .update_notes(&UpdateNotes {
            id: entry_ids[1].clone(),
            notes: "Pitch on Monday".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.notes, "Pitch on Monday");

    let board = engine.playbook_board();
    assert_eq!(board.total(), 3);
    assert_eq!(board.column(PlaybookStatus::Live).len(), 1);
    assert_eq!(board.column(PlaybookStatus::Idea).len(), 2);

    let result = engine
        .update_status(&UpdateStatus {
            id: "nope".to_string(),
            status: PlaybookStatus::Live,
        })
        .await;
    assert!(matches!(result, Err(EngineError::EntryNotFound { .. })));
}

#[tokio::test]
async fn test_every_status_transition_is_allowed() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let target = idea("A");
    engine.state().ideas = vec![target.clone()];
    let entry = engine
        .save_to_playbook(&IdeaRef {
            idea_id: target.id.clone(),
        })
        .await
        .unwrap();

    for prior in PlaybookStatus::ALL {
        for next in PlaybookStatus::ALL {
            engine
                .update_status(&UpdateStatus {
                    id: entry.id.clone(),
                    status: prior,
                })
                .await
                .unwrap();
            let updated = engine
                .update_status(&UpdateStatus {
                    id: entry.id.clone(),
                    status: next,
                })
                .await
                .unwrap_or_else(|e| panic!("{prior} -> {next}: {e}"));

            assert_eq!(updated.status, next, "{prior} -> {next}");
            assert_eq!(engine.playbook()[0].status, next, "{prior} -> {next}");
            assert_eq!(engine.playbook_board().column(next).len(), 1);
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_note_edits_persist_latest_playbook() {
    let (temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let ideas: Vec<Idea> = (0..16).map(|i| idea(&format!("Idea {i}"))).collect();
    engine.state().ideas = ideas.clone();

    let mut entry_ids = Vec::new();
    for i in &ideas {
        let entry = engine
            .save_to_playbook(&IdeaRef {
                idea_id: i.id.clone(),
            })
            .await
            .unwrap();
        entry_ids.push(entry.id);
    }

    let engine = Arc::new(engine);
    let store = Store::new(temp_dir.path().join("test.db")).unwrap();

    for round in 0..30 {
        let tasks: Vec<_> = entry_ids
            .iter()
            .enumerate()
            .map(|(n, id)| {
                let engine = Arc::clone(&engine);
                let params = UpdateNotes {
                    id: id.clone(),
                    notes: format!("round {round} note {n}"),
                };
                tokio::spawn(async move { engine.update_notes(&params).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let stored: Vec<PlaybookEntry> = store
            .load(StorageKey::Playbook("user_ada@example.com"))
            .unwrap()
            .expect("playbook should be stored");
        assert_eq!(stored, engine.playbook(), "round {round}");
    }
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let target = idea("Doomed");
    engine.state().ideas = vec![target.clone()];
    let entry = engine
        .save_to_playbook(&IdeaRef {
            idea_id: target.id.clone(),
        })
        .await
        .unwrap();

    let result = engine
        .delete_entry(&DeleteEntry {
            id: entry.id.clone(),
            confirmed: false,
        })
        .await;
    assert!(matches!(result, Err(EngineError::InvalidInput { field, .. }) if field == "confirmed"));
    assert_eq!(engine.playbook().len(), 1);

    let removed = engine
        .delete_entry(&DeleteEntry {
            id: entry.id.clone(),
            confirmed: true,
        })
        .await
        .unwrap();
    assert_eq!(removed.map(|e| e.id), Some(entry.id.clone()));
    assert!(engine.get_entry(&EntryRef { id: entry.id }).is_err());

    let missing = engine
        .delete_entry(&DeleteEntry {
            id: "missing".to_string(),
            confirmed: true,
        })
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_logout_keeps_data_for_next_login() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    engine
        .set_skills(&SetSkills {
            skills: "Python".to_string(),
        })
        .await
        .unwrap();
    engine.toggle_niche(&niche("4")).await.unwrap();

    let previous = engine.logout().await.unwrap();
    assert_eq!(previous.map(|u| u.email), Some("ada@example.com".to_string()));
    assert!(engine.profile().skills.is_empty());
    assert!(engine.selected_niches().is_empty());

    // Another user starts from defaults
    engine.login(&credentials("bob@example.com")).await.unwrap();
    assert!(engine.profile().skills.is_empty());

    engine.login(&credentials("ADA@example.com")).await.unwrap();
    assert_eq!(engine.profile().skills, vec!["Python"]);
    assert_eq!(engine.selected_niches()[0].id, "4");
}

#[tokio::test]
async fn test_navigation_resets_on_logout() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    assert_eq!(engine.view(), ActiveView::Home);

    engine.set_view(ActiveView::Templates);
    assert_eq!(engine.snapshot().view, ActiveView::Templates);

    engine.logout().await.unwrap();
    assert_eq!(engine.view(), ActiveView::Home);
}

#[tokio::test]
async fn test_session_is_restored_until_logout() {
    let (temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    drop(engine);

    let engine = reopen(&temp_dir).await;
    assert_eq!(engine.current_user().map(|u| u.name), Some("ada".to_string()));
    engine.logout().await.unwrap();
    drop(engine);

    let engine = reopen(&temp_dir).await;
    assert!(engine.current_user().is_none());
}

#[tokio::test]
async fn test_artifact_is_merged_into_playbook_copy() {
    let (_temp_dir, engine) = create_test_engine().await;
    engine.login(&credentials("ada@example.com")).await.unwrap();
    let target = idea("Shared");
    engine.state().ideas = vec![target.clone()];
    engine
        .save_to_playbook(&IdeaRef {
            idea_id: target.id.clone(),
        })
        .await
        .unwrap();

    let touched = engine
        .state()
        .attach_artifact(&target.id, &|i: &mut Idea| i.blueprint = Some(blueprint()));
    assert!(touched);
    assert!(engine.ideas()[0].blueprint.is_some());
    assert!(engine.playbook()[0].idea.blueprint.is_some());
}
