use storage::{
    Database, Repository, Stored,
    dto::skater::{CreateSkaterRequest, UpdateSkaterRequest},
    error::Result,
    files::FileStorage,
    models::Skater,
    services::skaters::{self, DocumentKind},
};

pub async fn list_skaters(db: &Database) -> Result<Vec<Stored<Skater>>> {
    Repository::<Skater>::new(db.store()).list_all().await
}

pub async fn get_skater(db: &Database, id: &str) -> Result<Stored<Skater>> {
    Repository::<Skater>::new(db.store()).get(id).await
}

pub async fn create_skater(
    db: &Database,
    request: CreateSkaterRequest,
    actor: &str,
) -> Result<Stored<Skater>> {
    skaters::create_skater(db.store(), request, actor).await
}

pub async fn update_skater(
    db: &Database,
    id: &str,
    request: UpdateSkaterRequest,
    actor: &str,
) -> Result<Stored<Skater>> {
    skaters::update_skater(db.store(), id, request, actor).await
}

pub async fn delete_skater(db: &Database, id: &str) -> Result<()> {
    Repository::<Skater>::new(db.store()).delete(id).await
}

pub async fn upload_document(
    db: &Database,
    files: &dyn FileStorage,
    id: &str,
    kind: DocumentKind,
    filename: &str,
    bytes: &[u8],
    actor: &str,
) -> Result<String> {
    skaters::attach_document(db.store(), files, id, kind, filename, bytes, actor).await
}
