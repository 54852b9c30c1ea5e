use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The persisted task record. The id is assigned by the store on creation
/// and is immutable thereafter; deletion is soft (a `deleted_at` tombstone).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub content: String,
    pub status: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Input for creating a todo. `content` must be non-empty; that is enforced
/// once, at the service boundary, not re-checked on read paths.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    pub content: String,
    #[serde(default)]
    pub status: bool,
}
