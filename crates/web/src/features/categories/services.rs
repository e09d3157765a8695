use storage::{
    Database, Repository, Stored,
    dto::category::{CreateCategoryRequest, UpdateCategoryRequest},
    error::Result,
    models::Category,
};

pub async fn list_categories(db: &Database, active_only: bool) -> Result<Vec<Stored<Category>>> {
    let repo = Repository::<Category>::new(db.store());
    if active_only {
        repo.list_active().await
    } else {
        repo.list_all().await
    }
}

pub async fn get_category(db: &Database, id: &str) -> Result<Stored<Category>> {
    Repository::<Category>::new(db.store()).get(id).await
}

pub async fn create_category(
    db: &Database,
    request: CreateCategoryRequest,
    actor: &str,
) -> Result<Stored<Category>> {
    let repo = Repository::<Category>::new(db.store());
    repo.create(&request.into_model(actor)).await
}

pub async fn update_category(
    db: &Database,
    id: &str,
    request: UpdateCategoryRequest,
    actor: &str,
) -> Result<Stored<Category>> {
    let repo = Repository::<Category>::new(db.store());
    let existing = repo.get(id).await?;
    repo.update(id, &request.apply(existing.record, actor)).await
}

/// Categories carry an active flag for listings, but deletion is a real
/// remove. Modalities and entries that referenced one keep their stored
/// display copy.
pub async fn delete_category(db: &Database, id: &str) -> Result<()> {
    Repository::<Category>::new(db.store()).delete(id).await
}
