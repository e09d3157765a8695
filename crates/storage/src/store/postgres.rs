use serde_json::{Map, Value, json};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::error::{Result, StorageError};

use super::{Document, DocumentStore, FieldFilter, OrderBy};

/// Document store on PostgreSQL: one `documents` table keyed by
/// (collection, id) with the schemaless fields in a JSONB column.
///
/// No per-field unique indexes and no transactions are used; uniqueness is
/// enforced by the repository's query-before-write pre-check, which is not
/// atomic. Concurrent submissions with the same unique value can both pass
/// the check. This is a documented limitation of the storage model.
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl DocumentStore for PgDocumentStore {
    async fn create(&self, collection: &str, fields: Value) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        sqlx::query("INSERT INTO documents (collection, id, fields) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(&id)
            .bind(&fields)
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query("SELECT fields FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Document {
            id: id.to_string(),
            fields: row.get("fields"),
        }))
    }

    async fn list(
        &self,
        collection: &str,
        filter: Option<&FieldFilter>,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Document>> {
        // Field names come from entity configuration, never from request
        // input, so interpolating them into the ORDER BY clause is safe.
        let mut sql = String::from("SELECT id, fields FROM documents WHERE collection = $1");
        if filter.is_some() {
            sql.push_str(" AND fields @> $2");
        }
        if let Some(order) = order {
            sql.push_str(&format!(
                " ORDER BY fields->'{}' {}",
                order.field,
                if order.ascending { "ASC" } else { "DESC" }
            ));
        }

        let mut query = sqlx::query(&sql).bind(collection);
        if let Some(filter) = filter {
            let mut containment = Map::new();
            containment.insert(filter.field.clone(), filter.value.clone());
            query = query.bind(json!(containment));
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|row| Document {
                id: row.get("id"),
                fields: row.get("fields"),
            })
            .collect())
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<()> {
        let result = sqlx::query(
            "UPDATE documents SET fields = fields || $3 WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .bind(&fields)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
