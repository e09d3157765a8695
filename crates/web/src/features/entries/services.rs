use storage::{
    Database, Repository, Stored,
    error::Result,
    models::Entry,
    services::entries::{self, EntryParents, EntrySelection, SelectionOptions, SelectionState},
};

pub async fn list_entries(db: &Database) -> Result<Vec<Stored<Entry>>> {
    Repository::<Entry>::new(db.store()).list_all().await
}

pub async fn get_entry(db: &Database, id: &str) -> Result<Stored<Entry>> {
    Repository::<Entry>::new(db.store()).get(id).await
}

pub async fn create_entry(
    db: &Database,
    selection: EntrySelection,
    actor: &str,
) -> Result<Stored<Entry>> {
    entries::create_entry(db.store(), &selection, actor).await
}

pub async fn update_entry(
    db: &Database,
    id: &str,
    selection: EntrySelection,
    actor: &str,
) -> Result<Stored<Entry>> {
    entries::update_entry(db.store(), id, &selection, actor).await
}

pub async fn delete_entry(db: &Database, id: &str) -> Result<()> {
    Repository::<Entry>::new(db.store()).delete(id).await
}

pub async fn entry_options(db: &Database, state: &SelectionState) -> Result<SelectionOptions> {
    let parents = EntryParents::load(db.store()).await?;
    Ok(entries::selection_options(&parents, state))
}
