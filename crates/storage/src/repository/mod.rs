use std::marker::PhantomData;

use serde_json::Value;

use crate::entity::{DeleteStrategy, Entity, Stored, UniqueField};
use crate::error::{Result, StorageError};
use crate::store::{Document, DocumentStore, FieldFilter, OrderBy};

/// Generic repository over the document store, parameterized by entity
/// schema. Uniqueness pre-checks, active-flag filtering and delete
/// dispatch live here exactly once; per-entity differences are data in
/// the entity's `EntityConfig`.
pub struct Repository<'a, T: Entity> {
    store: &'a dyn DocumentStore,
    _entity: PhantomData<T>,
}

impl<'a, T: Entity> Repository<'a, T> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Create a record. When the entity has a unique field, a
    /// query-before-write pre-check rejects collisions before anything is
    /// written. The check-then-write sequence is not atomic: two
    /// concurrent submissions with the same value can both pass. That race
    /// is a documented limitation of the storage model.
    pub async fn create(&self, record: &T) -> Result<Stored<T>> {
        let fields = serde_json::to_value(record)?;
        if let Some(unique) = T::config().unique_field {
            self.check_unique(&fields, &unique, None).await?;
        }

        let id = self.store.create(T::config().collection, fields).await?;
        Ok(Stored {
            id,
            record: record.clone(),
        })
    }

    /// All records, for administration tables.
    pub async fn list_all(&self) -> Result<Vec<Stored<T>>> {
        let docs = self
            .store
            .list(T::config().collection, None, self.order().as_ref())
            .await?;
        docs.into_iter().map(decode).collect()
    }

    /// Records feeding selection lists: soft-deleted/disabled ones are
    /// filtered out. Entities without an active flag list everything.
    pub async fn list_active(&self) -> Result<Vec<Stored<T>>> {
        let config = T::config();
        let filter = config.active_flag.map(|flag| FieldFilter {
            field: flag.field().to_string(),
            value: flag.active_value(),
        });
        let docs = self
            .store
            .list(config.collection, filter.as_ref(), self.order().as_ref())
            .await?;
        docs.into_iter().map(decode).collect()
    }

    /// Fetch by id regardless of active flag, so historical references
    /// (e.g. entries pointing at a deactivated modality) stay resolvable.
    pub async fn get(&self, id: &str) -> Result<Stored<T>> {
        let doc = self
            .store
            .get(T::config().collection, id)
            .await?
            .ok_or(StorageError::NotFound)?;
        decode(doc)
    }

    /// Replace a record. The uniqueness pre-check runs only when the
    /// unique field's value actually changed, and excludes the record's
    /// own id, so saving a record untouched never collides with itself.
    pub async fn update(&self, id: &str, record: &T) -> Result<Stored<T>> {
        let config = T::config();
        let existing = self
            .store
            .get(config.collection, id)
            .await?
            .ok_or(StorageError::NotFound)?;

        let fields = serde_json::to_value(record)?;
        if let Some(unique) = config.unique_field {
            let changed = existing.fields.get(unique.field) != fields.get(unique.field);
            if changed {
                self.check_unique(&fields, &unique, Some(id)).await?;
            }
        }

        self.store.update(config.collection, id, fields).await?;
        Ok(Stored {
            id: id.to_string(),
            record: record.clone(),
        })
    }

    /// Single delete operation; whether it removes the document or flips
    /// the active flag is entity configuration, not a call-site decision.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let config = T::config();
        match config.delete {
            DeleteStrategy::Remove => self.store.delete(config.collection, id).await,
            DeleteStrategy::Deactivate => {
                let Some(flag) = config.active_flag else {
                    return Err(StorageError::Validation(format!(
                        "{} is configured for deactivation but has no active flag",
                        config.display_name
                    )));
                };
                let fields = serde_json::json!({ flag.field(): flag.inactive_value() });
                self.store.update(config.collection, id, fields).await
            }
        }
    }

    async fn check_unique(
        &self,
        fields: &Value,
        unique: &UniqueField,
        exclude_id: Option<&str>,
    ) -> Result<()> {
        let Some(value) = fields.get(unique.field) else {
            return Ok(());
        };

        let config = T::config();
        let filter = FieldFilter {
            field: unique.field.to_string(),
            value: value.clone(),
        };
        let candidates = self.store.list(config.collection, Some(&filter), None).await?;

        let collision = candidates.iter().any(|doc| {
            exclude_id != Some(doc.id.as_str())
                && config
                    .active_flag
                    .is_none_or(|flag| flag.is_active(&doc.fields))
        });

        if collision {
            return Err(StorageError::Duplicate {
                field: unique.label,
                value: display_value(value),
            });
        }
        Ok(())
    }

    fn order(&self) -> Option<OrderBy> {
        T::config().order_by.map(OrderBy::asc)
    }
}

fn decode<T: Entity>(doc: Document) -> Result<Stored<T>> {
    Ok(Stored {
        id: doc.id,
        record: serde_json::from_value(doc.fields)?,
    })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Judge, JudgeLevel, JudgeStatus, Modality, Team};
    use crate::store::MemoryStore;
    use chrono::Utc;

    fn team(name: &str) -> Team {
        Team {
            name: name.to_string(),
            code: "AAA".to_string(),
            responsible: "Ana".to_string(),
            email: "ana@fed.org".to_string(),
            phone: "81999990000".to_string(),
            city: "Recife".to_string(),
            state: "PE".to_string(),
            notes: None,
            created_at: Utc::now(),
            created_by: "system".to_string(),
            updated_at: None,
            updated_by: None,
        }
    }

    fn category(code: &str) -> Category {
        Category {
            name: "Intermediário".to_string(),
            code: code.to_string(),
            description: None,
            ordering: 1,
            active: true,
            created_at: Utc::now(),
            created_by: "system".to_string(),
            updated_at: None,
            updated_by: None,
        }
    }

    fn modality(code: &str, active: bool) -> Modality {
        Modality {
            name: "Livre Individual".to_string(),
            style_code: "LI".to_string(),
            sub_style_code: "A".to_string(),
            code: code.to_string(),
            category_id: "cat-1".to_string(),
            category_name: "Intermediário".to_string(),
            min_age: 9,
            max_age: 12,
            min_duration: "02:00".to_string(),
            max_duration: "02:30".to_string(),
            active,
            created_at: Utc::now(),
            created_by: "system".to_string(),
            updated_at: None,
            updated_by: None,
        }
    }

    fn judge(name: &str) -> Judge {
        Judge {
            full_name: name.to_string(),
            license_number: "J-001".to_string(),
            level: JudgeLevel::National,
            city: "Recife".to_string(),
            state: "PE".to_string(),
            email: "judge@fed.org".to_string(),
            phone: "81999990000".to_string(),
            specialties: vec![],
            status: JudgeStatus::Active,
            created_at: Utc::now(),
            created_by: "system".to_string(),
            updated_at: None,
            updated_by: None,
        }
    }

    #[tokio::test]
    async fn duplicate_code_rejected_before_write() {
        let store = MemoryStore::new();
        let repo = Repository::<Category>::new(&store);

        repo.create(&category("INT")).await.unwrap();
        let err = repo.create(&category("INT")).await.unwrap_err();

        assert!(matches!(err, StorageError::Duplicate { field: "code", .. }));
        // No second document was written.
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_without_code_change_never_collides_with_itself() {
        let store = MemoryStore::new();
        let repo = Repository::<Category>::new(&store);

        let stored = repo.create(&category("INT")).await.unwrap();
        let mut edited = stored.record.clone();
        edited.name = "Intermediário B".to_string();

        repo.update(&stored.id, &edited).await.unwrap();
        let fetched = repo.get(&stored.id).await.unwrap();
        assert_eq!(fetched.record.name, "Intermediário B");
    }

    #[tokio::test]
    async fn update_changing_code_to_taken_value_rejected() {
        let store = MemoryStore::new();
        let repo = Repository::<Category>::new(&store);

        repo.create(&category("INT")).await.unwrap();
        let second = repo.create(&category("JUV")).await.unwrap();

        let mut edited = second.record.clone();
        edited.code = "INT".to_string();
        let err = repo.update(&second.id, &edited).await.unwrap_err();
        assert!(matches!(err, StorageError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn duplicate_check_ignores_deactivated_records() {
        let store = MemoryStore::new();
        let repo = Repository::<Modality>::new(&store);

        let stored = repo.create(&modality("CAT-LI-A", true)).await.unwrap();
        repo.delete(&stored.id).await.unwrap();

        // Code held only by a soft-deleted record is free again.
        repo.create(&modality("CAT-LI-A", true)).await.unwrap();
    }

    #[tokio::test]
    async fn delete_dispatch_deactivates_judges() {
        let store = MemoryStore::new();
        let repo = Repository::<Judge>::new(&store);

        let stored = repo.create(&judge("Maria Souza")).await.unwrap();
        repo.delete(&stored.id).await.unwrap();

        // Gone from the dropdown-feeding view...
        assert!(repo.list_active().await.unwrap().is_empty());
        // ...but still retrievable by id for historical display.
        let fetched = repo.get(&stored.id).await.unwrap();
        assert_eq!(fetched.record.status, JudgeStatus::Inactive);
    }

    #[tokio::test]
    async fn delete_dispatch_removes_categories() {
        let store = MemoryStore::new();
        let repo = Repository::<Category>::new(&store);

        let stored = repo.create(&category("INT")).await.unwrap();
        repo.delete(&stored.id).await.unwrap();

        assert!(matches!(
            repo.get(&stored.id).await.unwrap_err(),
            StorageError::NotFound
        ));
    }

    #[tokio::test]
    async fn entities_without_a_flag_have_no_active_view() {
        let store = MemoryStore::new();
        let repo = Repository::<Team>::new(&store);

        repo.create(&team("Alpha")).await.unwrap();
        repo.create(&team("Beta")).await.unwrap();

        // No flag to filter on: both listings see every record.
        assert_eq!(repo.list_active().await.unwrap().len(), 2);
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_active_filters_bool_flag() {
        let store = MemoryStore::new();
        let repo = Repository::<Modality>::new(&store);

        repo.create(&modality("CAT-LI-A", true)).await.unwrap();
        repo.create(&modality("CAT-LI-B", false)).await.unwrap();

        assert_eq!(repo.list_active().await.unwrap().len(), 1);
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }
}
