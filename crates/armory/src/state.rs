//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers see only the repository traits, never the
//! filesystem paths behind them.

use std::sync::Arc;

use armory_core::storage::{MediaRepository, Result, SquadRepository};

use crate::config::Config;
use crate::storage::{FsMediaStore, FsSquadRegistry};

/// Shared application state.
///
/// This is cloned for each request handler. Stores hold no in-process
/// caches; every request reads the authoritative filesystem state.
#[derive(Clone)]
pub struct AppState {
    /// Image directory store.
    pub media_repo: Arc<dyn MediaRepository>,
    /// Squad registry store.
    pub squad_repo: Arc<dyn SquadRepository>,
}

impl AppState {
    /// Creates a new AppState with the given repositories.
    pub fn new(
        media_repo: Arc<dyn MediaRepository>,
        squad_repo: Arc<dyn SquadRepository>,
    ) -> Self {
        Self {
            media_repo,
            squad_repo,
        }
    }

    /// Opens the filesystem stores named by the configuration.
    ///
    /// Creates the image directory and the registry's parent directory if
    /// they do not exist yet.
    pub fn from_config(config: &Config) -> Result<Self> {
        let media = FsMediaStore::new(&config.images_dir)?;
        let squads = FsSquadRegistry::new(&config.registry_path)?;

        tracing::info!(
            images = %media.root().display(),
            registry = %squads.path().display(),
            "Stores opened"
        );

        Ok(Self::new(Arc::new(media), Arc::new(squads)))
    }
}
