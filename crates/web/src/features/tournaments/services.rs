use storage::{
    Database, Repository, Stored,
    dto::tournament::{CreateTournamentRequest, UpdateTournamentRequest},
    error::Result,
    models::Tournament,
};

pub async fn list_tournaments(db: &Database) -> Result<Vec<Stored<Tournament>>> {
    Repository::<Tournament>::new(db.store()).list_all().await
}

pub async fn get_tournament(db: &Database, id: &str) -> Result<Stored<Tournament>> {
    Repository::<Tournament>::new(db.store()).get(id).await
}

pub async fn create_tournament(
    db: &Database,
    request: CreateTournamentRequest,
    actor: &str,
) -> Result<Stored<Tournament>> {
    let repo = Repository::<Tournament>::new(db.store());
    repo.create(&request.into_model(actor)).await
}

pub async fn update_tournament(
    db: &Database,
    id: &str,
    request: UpdateTournamentRequest,
    actor: &str,
) -> Result<Stored<Tournament>> {
    let repo = Repository::<Tournament>::new(db.store());
    let existing = repo.get(id).await?;
    repo.update(id, &request.apply(existing.record, actor)).await
}

pub async fn delete_tournament(db: &Database, id: &str) -> Result<()> {
    Repository::<Tournament>::new(db.store()).delete(id).await
}
