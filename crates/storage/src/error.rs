use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File storage error: {0}")]
    FileStorage(#[from] std::io::Error),

    #[error("Not found")]
    NotFound,

    #[error("{field} '{value}' is already in use")]
    Duplicate { field: &'static str, value: String },

    #[error("Referenced {0} not found")]
    MissingReference(&'static str),

    #[error("{0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Errors the caller can fix by correcting the submitted data.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StorageError::Duplicate { .. }
                | StorageError::MissingReference(_)
                | StorageError::Validation(_)
        )
    }
}
