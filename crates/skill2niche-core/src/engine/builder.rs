//! Builder for creating and configuring Engine instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::task;

use super::Engine;
use crate::{
    error::{EngineError, Result},
    generation::{GeminiClient, GeminiConfig, Generator},
    store::Store,
};

/// Builder for creating and configuring Engine instances.
#[derive(Debug, Clone, Default)]
pub struct EngineBuilder {
    database_path: Option<PathBuf>,
    gemini: GeminiConfig,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom store file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/skill2niche/skill2niche.db` or
    /// `~/.local/share/skill2niche/skill2niche.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the generative-AI API key. Generation fails while it is empty.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.gemini.api_key = api_key.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.gemini.model = model.into();
        self
    }

    /// Overrides the API base URL (up to and excluding `/models`).
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini.base_url = base_url.into();
        self
    }

    /// Bounds every generation request. Unset means no client-side timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.gemini.timeout = timeout;
        self
    }

    /// Builds the configured engine and restores the last session, if any.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::FileSystem` if the store path is invalid
    /// Returns `EngineError::Database` if store initialization fails
    /// Returns `EngineError::Generation` if the HTTP client cannot be built
    pub async fn build(self) -> Result<Engine> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| EngineError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _store = Store::new(&db_path_clone)?;
            Ok::<(), EngineError>(())
        })
        .await
        .map_err(|e| EngineError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let generator = Generator::new(GeminiClient::new(self.gemini)?);
        let engine = Engine::new(db_path, generator);
        engine.restore_session().await?;
        Ok(engine)
    }

    /// Returns the default store path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("skill2niche")
            .place_data_file("skill2niche.db")
            .map_err(|e| EngineError::XdgDirectory(e.to_string()))
    }
}
