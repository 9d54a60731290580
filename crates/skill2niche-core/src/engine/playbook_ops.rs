//! Playbook operations.

use log::info;

use super::{ActiveView, Engine};
use crate::{
    display::PlaybookBoard,
    error::{EngineError, Result},
    models::PlaybookEntry,
    params::{DeleteEntry, EntryRef, IdeaRef, UpdateNotes, UpdateStatus},
};

impl Engine {
    /// Copies an idea from the working set into the playbook.
    ///
    /// New entries go to the front in the `Idea` column. The view switches to
    /// the playbook.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::IdeaNotFound` if the idea is not in the working set
    /// Returns `EngineError::AlreadyInPlaybook` if an entry already holds it
    pub async fn save_to_playbook(&self, params: &IdeaRef) -> Result<PlaybookEntry> {
        let entry = {
            let mut state = self.state();
            state.ensure_logged_in()?;

            let idea = state
                .ideas
                .iter()
                .find(|i| i.id == params.idea_id)
                .cloned()
                .ok_or_else(|| EngineError::IdeaNotFound {
                    id: params.idea_id.clone(),
                })?;

            if state.playbook.iter().any(|e| e.idea.id == idea.id) {
                return Err(EngineError::AlreadyInPlaybook { idea_id: idea.id });
            }

            let entry = PlaybookEntry::new(idea);
            state.playbook.insert(0, entry.clone());
            state.view = ActiveView::Playbook;
            state.viewing = None;
            entry
        };

        info!("Saved idea {} as playbook entry {}", entry.idea.id, entry.id);
        self.persist_playbook().await?;
        Ok(entry)
    }

    /// Moves an entry to another column.
    pub async fn update_status(&self, params: &UpdateStatus) -> Result<PlaybookEntry> {
        self.update_entry(&params.id, |entry| entry.status = params.status)
            .await
    }

    /// Replaces an entry's notes.
    pub async fn update_notes(&self, params: &UpdateNotes) -> Result<PlaybookEntry> {
        self.update_entry(&params.id, |entry| entry.notes = params.notes.clone())
            .await
    }

    /// Removes an entry. Nothing happens unless `confirmed` is set.
    ///
    /// Returns the removed entry, or `None` if no entry had that id.
    pub async fn delete_entry(&self, params: &DeleteEntry) -> Result<Option<PlaybookEntry>> {
        if !params.confirmed {
            return Err(EngineError::invalid_input("confirmed")
                .with_reason("Deletion must be confirmed"));
        }

        let removed = {
            let mut state = self.state();
            state.ensure_logged_in()?;
            let Some(pos) = state.playbook.iter().position(|e| e.id == params.id) else {
                return Ok(None);
            };
            state.playbook.remove(pos)
        };

        info!("Deleted playbook entry {}", removed.id);
        self.persist_playbook().await?;
        Ok(Some(removed))
    }

    pub fn get_entry(&self, params: &EntryRef) -> Result<PlaybookEntry> {
        self.state()
            .playbook
            .iter()
            .find(|e| e.id == params.id)
            .cloned()
            .ok_or_else(|| EngineError::EntryNotFound {
                id: params.id.clone(),
            })
    }

    /// All entries, newest first.
    pub fn playbook(&self) -> Vec<PlaybookEntry> {
        self.state().playbook.clone()
    }

    /// Entries grouped into status columns.
    pub fn playbook_board(&self) -> PlaybookBoard {
        PlaybookBoard::new(self.playbook())
    }

    async fn update_entry<F>(&self, id: &str, apply: F) -> Result<PlaybookEntry>
    where
        F: FnOnce(&mut PlaybookEntry),
    {
        let entry = {
            let mut state = self.state();
            state.ensure_logged_in()?;
            let entry = state
                .playbook
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| EngineError::EntryNotFound { id: id.to_string() })?;
            apply(entry);
            entry.clone()
        };

        self.persist_playbook().await?;
        Ok(entry)
    }
}
