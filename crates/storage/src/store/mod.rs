use serde_json::Value;

use crate::error::Result;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgDocumentStore;

/// A raw document as held by the store: an opaque id plus schemaless fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Value,
}

/// Equality filter on a single top-level field.
#[derive(Debug, Clone)]
pub struct FieldFilter {
    pub field: String,
    pub value: Value,
}

impl FieldFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrderBy {
    pub field: String,
    pub ascending: bool,
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }
}

/// Schemaless collection store addressed by collection name and document id.
///
/// No multi-document transactions: every multi-step sequence built on top of
/// this trait (uniqueness check then write, resolve then write) is two
/// independent round trips with a race window between them.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Create a document with store-generated id, returning the id.
    async fn create(&self, collection: &str, fields: Value) -> Result<String>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    async fn list(
        &self,
        collection: &str,
        filter: Option<&FieldFilter>,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Document>>;

    /// Merge partial fields into an existing document.
    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<()>;

    async fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// Prepare backing storage. No-op for backends without migrations.
    async fn migrate(&self) -> Result<()> {
        Ok(())
    }
}
