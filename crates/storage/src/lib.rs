pub mod database;
pub mod dto;
pub mod entity;
pub mod error;
pub mod files;
pub mod models;
pub mod repository;
pub mod services;
pub mod store;

pub use database::Database;
pub use entity::{Entity, Stored};
pub use error::{Result, StorageError};
pub use repository::Repository;
