use std::sync::Arc;

use crate::error::Result;
use crate::store::{DocumentStore, MemoryStore, PgDocumentStore};

/// Handle to the document store, cloneable and cheap to pass as shared
/// application state.
#[derive(Clone)]
pub struct Database {
    store: Arc<dyn DocumentStore>,
}

impl Database {
    /// Connect to the PostgreSQL-backed store.
    pub async fn new(database_url: &str) -> Result<Self> {
        let store = PgDocumentStore::connect(database_url).await?;
        Ok(Self {
            store: Arc::new(store),
        })
    }

    /// In-memory store for tests and local development.
    pub fn in_memory() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
        }
    }

    pub async fn run_migrations(&self) -> Result<()> {
        self.store.migrate().await
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }
}
