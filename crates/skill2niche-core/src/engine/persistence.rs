//! Explicit write-back of the persisted parts of the state.
//!
//! Each helper takes the write lock, snapshots the value under the state
//! lock, then writes it on a blocking thread with a fresh store connection.
//! The write lock is held until the write lands, so a later snapshot is never
//! overwritten by an earlier one. Nothing is written while logged out.

use log::debug;
use tokio::task;

use super::Engine;
use crate::{
    error::{EngineError, Result},
    models::WorkingSession,
    store::{StorageKey, Store},
};

impl Engine {
    /// Runs `f` against a freshly opened store on the blocking pool.
    pub(crate) async fn with_store<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Store) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let store = Store::new(&db_path)?;
            f(&store)
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    pub(crate) async fn persist_profile(&self) -> Result<()> {
        let _write = self.write_lock.lock().await;
        let (user_id, profile) = {
            let state = self.state();
            let Some(user) = state.user() else {
                return Ok(());
            };
            (user.id.clone(), state.profile.clone())
        };

        debug!("Persisting profile for {user_id}");
        self.with_store(move |store| store.save(StorageKey::Profile(&user_id), &profile))
            .await
    }

    pub(crate) async fn persist_playbook(&self) -> Result<()> {
        let _write = self.write_lock.lock().await;
        let (user_id, playbook) = {
            let state = self.state();
            let Some(user) = state.user() else {
                return Ok(());
            };
            (user.id.clone(), state.playbook.clone())
        };

        debug!("Persisting {} playbook entries for {user_id}", playbook.len());
        self.with_store(move |store| store.save(StorageKey::Playbook(&user_id), &playbook))
            .await
    }

    pub(crate) async fn persist_session(&self) -> Result<()> {
        let _write = self.write_lock.lock().await;
        let (user_id, session) = {
            let state = self.state();
            let Some(user) = state.user() else {
                return Ok(());
            };
            let session = WorkingSession {
                selected_niches: state.selected_niches.clone(),
                ideas: state.ideas.clone(),
            };
            (user.id.clone(), session)
        };

        self.with_store(move |store| store.save(StorageKey::Session(&user_id), &session))
            .await
    }
}
