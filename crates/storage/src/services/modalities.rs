//! Modality writes. The category reference is stored by id
//! (authoritative); the category name is a display copy resolved at write
//! time through the same denormalization rules entries use.

use chrono::Utc;

use crate::dto::modality::{CreateModalityRequest, UpdateModalityRequest};
use crate::entity::Stored;
use crate::error::Result;
use crate::models::{Category, Modality};
use crate::repository::Repository;
use crate::services::denormalize::resolve_required;
use crate::store::DocumentStore;

pub async fn create_modality(
    store: &dyn DocumentStore,
    req: CreateModalityRequest,
    actor: &str,
) -> Result<Stored<Modality>> {
    let categories = Repository::<Category>::new(store).list_active().await?;
    let category = resolve_required(&req.category_id, &categories, "category")?;

    let modality = Modality {
        name: req.name,
        style_code: req.style_code,
        sub_style_code: req.sub_style_code,
        code: req.code,
        category_id: req.category_id,
        category_name: category.name.clone(),
        min_age: req.min_age,
        max_age: req.max_age,
        min_duration: req.min_duration,
        max_duration: req.max_duration,
        active: true,
        created_at: Utc::now(),
        created_by: actor.to_string(),
        updated_at: None,
        updated_by: None,
    };
    Repository::<Modality>::new(store).create(&modality).await
}

pub async fn update_modality(
    store: &dyn DocumentStore,
    id: &str,
    req: UpdateModalityRequest,
    actor: &str,
) -> Result<Stored<Modality>> {
    let repo = Repository::<Modality>::new(store);
    let existing = repo.get(id).await?;

    let mut record = existing.record;
    if let Some(name) = req.name {
        record.name = name;
    }
    if let Some(style_code) = req.style_code {
        record.style_code = style_code;
    }
    if let Some(sub_style_code) = req.sub_style_code {
        record.sub_style_code = sub_style_code;
    }
    if let Some(code) = req.code {
        record.code = code;
    }
    if let Some(category_id) = req.category_id {
        record.category_id = category_id;
    }
    if let Some(min_age) = req.min_age {
        record.min_age = min_age;
    }
    if let Some(max_age) = req.max_age {
        record.max_age = max_age;
    }
    if let Some(min_duration) = req.min_duration {
        record.min_duration = min_duration;
    }
    if let Some(max_duration) = req.max_duration {
        record.max_duration = max_duration;
    }
    if let Some(active) = req.active {
        record.active = active;
    }

    // The display copy is refreshed against the current category list on
    // every edit, whether or not the reference moved.
    let categories = Repository::<Category>::new(store).list_active().await?;
    let category = resolve_required(&record.category_id, &categories, "category")?;
    record.category_name = category.name.clone();

    record.updated_at = Some(Utc::now());
    record.updated_by = Some(actor.to_string());
    repo.update(id, &record).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::store::MemoryStore;

    async fn seed_category(store: &MemoryStore, name: &str, code: &str) -> String {
        let category = Category {
            name: name.to_string(),
            code: code.to_string(),
            description: None,
            ordering: 1,
            active: true,
            created_at: Utc::now(),
            created_by: "system".to_string(),
            updated_at: None,
            updated_by: None,
        };
        Repository::<Category>::new(store)
            .create(&category)
            .await
            .unwrap()
            .id
    }

    fn request(category_id: &str) -> CreateModalityRequest {
        CreateModalityRequest {
            name: "Livre Individual".to_string(),
            style_code: "LI".to_string(),
            sub_style_code: "A".to_string(),
            code: "INT-LI-A".to_string(),
            category_id: category_id.to_string(),
            min_age: 9,
            max_age: 12,
            min_duration: "02:00".to_string(),
            max_duration: "02:30".to_string(),
        }
    }

    #[tokio::test]
    async fn create_embeds_category_name_as_of_write_time() {
        let store = MemoryStore::new();
        let category_id = seed_category(&store, "Intermediário", "INT").await;

        let stored = create_modality(&store, request(&category_id), "system")
            .await
            .unwrap();
        assert_eq!(stored.record.category_id, category_id);
        assert_eq!(stored.record.category_name, "Intermediário");
    }

    #[tokio::test]
    async fn create_with_unknown_category_aborts() {
        let store = MemoryStore::new();
        let err = create_modality(&store, request("missing"), "system")
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::MissingReference("category")));
    }

    #[tokio::test]
    async fn update_refreshes_the_display_copy() {
        let store = MemoryStore::new();
        let first = seed_category(&store, "Intermediário", "INT").await;
        let second = seed_category(&store, "Juvenil", "JUV").await;

        let stored = create_modality(&store, request(&first), "system")
            .await
            .unwrap();

        let update = UpdateModalityRequest {
            category_id: Some(second),
            ..Default::default()
        };
        let updated = update_modality(&store, &stored.id, update, "ana@fed.org")
            .await
            .unwrap();
        assert_eq!(updated.record.category_name, "Juvenil");
        assert_eq!(updated.record.updated_by.as_deref(), Some("ana@fed.org"));
    }
}
