use storage::{
    Database, Repository, Stored,
    dto::judge::{CreateJudgeRequest, UpdateJudgeRequest},
    error::Result,
    models::Judge,
};

pub async fn list_judges(db: &Database, active_only: bool) -> Result<Vec<Stored<Judge>>> {
    let repo = Repository::<Judge>::new(db.store());
    if active_only {
        repo.list_active().await
    } else {
        repo.list_all().await
    }
}

pub async fn get_judge(db: &Database, id: &str) -> Result<Stored<Judge>> {
    Repository::<Judge>::new(db.store()).get(id).await
}

pub async fn create_judge(
    db: &Database,
    request: CreateJudgeRequest,
    actor: &str,
) -> Result<Stored<Judge>> {
    let repo = Repository::<Judge>::new(db.store());
    repo.create(&request.into_model(actor)).await
}

pub async fn update_judge(
    db: &Database,
    id: &str,
    request: UpdateJudgeRequest,
    actor: &str,
) -> Result<Stored<Judge>> {
    let repo = Repository::<Judge>::new(db.store());
    let existing = repo.get(id).await?;
    repo.update(id, &request.apply(existing.record, actor)).await
}

/// Judges are never removed; deletion flips the status to inactive and the
/// record stays reachable by id.
pub async fn delete_judge(db: &Database, id: &str) -> Result<()> {
    Repository::<Judge>::new(db.store()).delete(id).await
}
