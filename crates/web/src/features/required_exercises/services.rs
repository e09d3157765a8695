use storage::{
    Database, Repository, Stored,
    dto::required_exercise::{CreateRequiredExerciseRequest, UpdateRequiredExerciseRequest},
    error::Result,
    models::RequiredExercise,
};

pub async fn list_required_exercises(db: &Database) -> Result<Vec<Stored<RequiredExercise>>> {
    Repository::<RequiredExercise>::new(db.store()).list_all().await
}

pub async fn get_required_exercise(db: &Database, id: &str) -> Result<Stored<RequiredExercise>> {
    Repository::<RequiredExercise>::new(db.store()).get(id).await
}

pub async fn create_required_exercise(
    db: &Database,
    request: CreateRequiredExerciseRequest,
    actor: &str,
) -> Result<Stored<RequiredExercise>> {
    let repo = Repository::<RequiredExercise>::new(db.store());
    repo.create(&request.into_model(actor)).await
}

pub async fn update_required_exercise(
    db: &Database,
    id: &str,
    request: UpdateRequiredExerciseRequest,
    actor: &str,
) -> Result<Stored<RequiredExercise>> {
    let repo = Repository::<RequiredExercise>::new(db.store());
    let existing = repo.get(id).await?;
    repo.update(id, &request.apply(existing.record, actor)).await
}

pub async fn delete_required_exercise(db: &Database, id: &str) -> Result<()> {
    Repository::<RequiredExercise>::new(db.store()).delete(id).await
}
