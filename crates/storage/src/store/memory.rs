use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use crate::error::{Result, StorageError};

use super::{Document, DocumentStore, FieldFilter, OrderBy};

/// In-memory store with the same visible semantics as the Postgres backend.
/// Backs the test suite and local development without a database.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(fields: &Value, filter: &FieldFilter) -> bool {
    fields.get(&filter.field) == Some(&filter.value)
}

fn order_key<'a>(fields: &'a Value, field: &str) -> Option<&'a Value> {
    fields.get(field)
}

fn compare(a: Option<&Value>, b: Option<&Value>) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Number(x), Value::Number(y)) => x
                .as_f64()
                .partial_cmp(&y.as_f64())
                .unwrap_or(Ordering::Equal),
            (Value::String(x), Value::String(y)) => x.cmp(y),
            _ => a.to_string().cmp(&b.to_string()),
        },
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn create(&self, collection: &str, fields: Value) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let mut collections = self.collections.write().expect("store lock poisoned");
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        Ok(id)
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().expect("store lock poisoned");
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|fields| Document {
                id: id.to_string(),
                fields: fields.clone(),
            }))
    }

    async fn list(
        &self,
        collection: &str,
        filter: Option<&FieldFilter>,
        order: Option<&OrderBy>,
    ) -> Result<Vec<Document>> {
        let collections = self.collections.read().expect("store lock poisoned");
        let mut documents: Vec<Document> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|(_, fields)| filter.is_none_or(|f| matches(fields, f)))
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = order {
            documents.sort_by(|a, b| {
                let ord = compare(
                    order_key(&a.fields, &order.field),
                    order_key(&b.fields, &order.field),
                );
                if order.ascending { ord } else { ord.reverse() }
            });
        }

        Ok(documents)
    }

    async fn update(&self, collection: &str, id: &str, fields: Value) -> Result<()> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or(StorageError::NotFound)?;

        if let (Value::Object(current), Value::Object(incoming)) = (existing, &fields) {
            for (key, value) in incoming {
                current.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut collections = self.collections.write().expect("store lock poisoned");
        let removed = collections
            .get_mut(collection)
            .and_then(|docs| docs.remove(id));
        if removed.is_none() {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MemoryStore::new();
        let id = store
            .create("teams", json!({"name": "Alpha"}))
            .await
            .unwrap();

        let doc = store.get("teams", &id).await.unwrap().unwrap();
        assert_eq!(doc.fields["name"], "Alpha");
    }

    #[tokio::test]
    async fn list_applies_equality_filter() {
        let store = MemoryStore::new();
        store
            .create("skaters", json!({"name": "Jane", "team_id": "t1"}))
            .await
            .unwrap();
        store
            .create("skaters", json!({"name": "Bob", "team_id": "t2"}))
            .await
            .unwrap();

        let filter = FieldFilter::eq("team_id", "t1");
        let docs = store.list("skaters", Some(&filter), None).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].fields["name"], "Jane");
    }

    #[tokio::test]
    async fn list_orders_by_field() {
        let store = MemoryStore::new();
        store
            .create("categories", json!({"name": "B", "ordering": 2}))
            .await
            .unwrap();
        store
            .create("categories", json!({"name": "A", "ordering": 1}))
            .await
            .unwrap();

        let order = OrderBy::asc("ordering");
        let docs = store.list("categories", None, Some(&order)).await.unwrap();
        assert_eq!(docs[0].fields["name"], "A");
        assert_eq!(docs[1].fields["name"], "B");
    }

    #[tokio::test]
    async fn update_merges_partial_fields() {
        let store = MemoryStore::new();
        let id = store
            .create("teams", json!({"name": "Alpha", "city": "Recife"}))
            .await
            .unwrap();

        store
            .update("teams", &id, json!({"city": "Olinda"}))
            .await
            .unwrap();

        let doc = store.get("teams", &id).await.unwrap().unwrap();
        assert_eq!(doc.fields["name"], "Alpha");
        assert_eq!(doc.fields["city"], "Olinda");
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete("teams", "nope").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }
}
