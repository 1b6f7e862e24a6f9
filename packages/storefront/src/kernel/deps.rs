//! Engine dependencies (using traits for testability)
//!
//! Central dependency container handed to domain actions. All external
//! services sit behind trait abstractions so tests can swap in the
//! in-memory implementations.

use std::sync::Arc;

use anyhow::Result;
use supabase::{SupabaseClient, SupabaseOptions};

use crate::config::Config;

use super::directory::SupabaseDirectory;
use super::local_store::FileLocalStore;
use super::traits::{BaseDirectory, BaseLocalStore};

#[derive(Clone)]
pub struct EngineDeps {
    directory: Arc<dyn BaseDirectory>,
    local_store: Arc<dyn BaseLocalStore>,
}

impl EngineDeps {
    pub fn new(directory: Arc<dyn BaseDirectory>, local_store: Arc<dyn BaseLocalStore>) -> Self {
        Self {
            directory,
            local_store,
        }
    }

    /// Production wiring from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = SupabaseClient::new(SupabaseOptions {
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        })?;
        Ok(Self {
            directory: Arc::new(SupabaseDirectory::new(client)),
            local_store: Arc::new(FileLocalStore::new(config.local_store_path.clone())),
        })
    }

    pub fn directory(&self) -> &dyn BaseDirectory {
        self.directory.as_ref()
    }

    pub fn local_store(&self) -> Arc<dyn BaseLocalStore> {
        Arc::clone(&self.local_store)
    }
}
