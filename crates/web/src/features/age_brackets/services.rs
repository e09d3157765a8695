use storage::{
    Database, Repository, Stored,
    dto::age_bracket::{CreateAgeBracketRequest, UpdateAgeBracketRequest},
    error::Result,
    models::AgeBracket,
};

pub async fn list_age_brackets(db: &Database) -> Result<Vec<Stored<AgeBracket>>> {
    Repository::<AgeBracket>::new(db.store()).list_all().await
}

pub async fn get_age_bracket(db: &Database, id: &str) -> Result<Stored<AgeBracket>> {
    Repository::<AgeBracket>::new(db.store()).get(id).await
}

pub async fn create_age_bracket(
    db: &Database,
    request: CreateAgeBracketRequest,
    actor: &str,
) -> Result<Stored<AgeBracket>> {
    let repo = Repository::<AgeBracket>::new(db.store());
    repo.create(&request.into_model(actor)).await
}

pub async fn update_age_bracket(
    db: &Database,
    id: &str,
    request: UpdateAgeBracketRequest,
    actor: &str,
) -> Result<Stored<AgeBracket>> {
    let repo = Repository::<AgeBracket>::new(db.store());
    let existing = repo.get(id).await?;
    repo.update(id, &request.apply(existing.record, actor)).await
}

pub async fn delete_age_bracket(db: &Database, id: &str) -> Result<()> {
    Repository::<AgeBracket>::new(db.store()).delete(id).await
}
