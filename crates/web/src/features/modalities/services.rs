use storage::{
    Database, Repository, Stored,
    dto::modality::{CreateModalityRequest, UpdateModalityRequest},
    error::Result,
    models::Modality,
    services::modalities,
};

pub async fn list_modalities(db: &Database, active_only: bool) -> Result<Vec<Stored<Modality>>> {
    let repo = Repository::<Modality>::new(db.store());
    if active_only {
        repo.list_active().await
    } else {
        repo.list_all().await
    }
}

pub async fn get_modality(db: &Database, id: &str) -> Result<Stored<Modality>> {
    Repository::<Modality>::new(db.store()).get(id).await
}

pub async fn create_modality(
    db: &Database,
    request: CreateModalityRequest,
    actor: &str,
) -> Result<Stored<Modality>> {
    modalities::create_modality(db.store(), request, actor).await
}

pub async fn update_modality(
    db: &Database,
    id: &str,
    request: UpdateModalityRequest,
    actor: &str,
) -> Result<Stored<Modality>> {
    modalities::update_modality(db.store(), id, request, actor).await
}

pub async fn delete_modality(db: &Database, id: &str) -> Result<()> {
    Repository::<Modality>::new(db.store()).delete(id).await
}
