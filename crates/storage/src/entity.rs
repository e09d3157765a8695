use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Per-entity configuration: everything that differs between the entity
/// types is data here, so the repository logic exists exactly once.
#[derive(Debug, Clone, Copy)]
pub struct EntityConfig {
    pub collection: &'static str,
    /// Human-readable name for error messages ("category", "skater", ...).
    pub display_name: &'static str,
    /// Field whose value must be unique among records that are not
    /// soft-deleted. Checked by query-before-write.
    pub unique_field: Option<UniqueField>,
    /// Flag separating active records from soft-deleted/disabled ones.
    /// Entities without a flag treat every stored record as active.
    pub active_flag: Option<ActiveFlag>,
    pub delete: DeleteStrategy,
    /// Default ordering for listings.
    pub order_by: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct UniqueField {
    pub field: &'static str,
    /// Label used in the user-facing collision message.
    pub label: &'static str,
}

/// The two active-flag representations that coexist in the data model:
/// a plain boolean and an active/inactive status string.
#[derive(Debug, Clone, Copy)]
pub enum ActiveFlag {
    Bool {
        field: &'static str,
    },
    Status {
        field: &'static str,
        active: &'static str,
        inactive: &'static str,
    },
}

impl ActiveFlag {
    pub fn field(&self) -> &'static str {
        match self {
            ActiveFlag::Bool { field } | ActiveFlag::Status { field, .. } => field,
        }
    }

    pub fn active_value(&self) -> Value {
        match self {
            ActiveFlag::Bool { .. } => Value::Bool(true),
            ActiveFlag::Status { active, .. } => json!(active),
        }
    }

    pub fn inactive_value(&self) -> Value {
        match self {
            ActiveFlag::Bool { .. } => Value::Bool(false),
            ActiveFlag::Status { inactive, .. } => json!(inactive),
        }
    }

    pub fn is_active(&self, fields: &Value) -> bool {
        fields.get(self.field()) == Some(&self.active_value())
    }
}

/// What a delete request does to the document. A property of the entity
/// type, never a call-site decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStrategy {
    /// Remove the document from the store.
    Remove,
    /// Flip the entity's active flag; the record stays retrievable by id.
    Deactivate,
}

/// A domain entity persisted as a schemaless document.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn config() -> &'static EntityConfig;
}

/// An entity together with its store-assigned document id.
#[derive(Debug, Clone)]
pub struct Stored<T> {
    pub id: String,
    pub record: T,
}
