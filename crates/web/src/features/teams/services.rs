use storage::{
    Database, Repository, Stored,
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    error::Result,
    models::Team,
};

pub async fn list_teams(db: &Database) -> Result<Vec<Stored<Team>>> {
    Repository::<Team>::new(db.store()).list_all().await
}

pub async fn get_team(db: &Database, id: &str) -> Result<Stored<Team>> {
    Repository::<Team>::new(db.store()).get(id).await
}

pub async fn create_team(
    db: &Database,
    request: CreateTeamRequest,
    actor: &str,
) -> Result<Stored<Team>> {
    let repo = Repository::<Team>::new(db.store());
    repo.create(&request.into_model(actor)).await
}

pub async fn update_team(
    db: &Database,
    id: &str,
    request: UpdateTeamRequest,
    actor: &str,
) -> Result<Stored<Team>> {
    let repo = Repository::<Team>::new(db.store());
    let existing = repo.get(id).await?;
    repo.update(id, &request.apply(existing.record, actor)).await
}

pub async fn delete_team(db: &Database, id: &str) -> Result<()> {
    Repository::<Team>::new(db.store()).delete(id).await
}
