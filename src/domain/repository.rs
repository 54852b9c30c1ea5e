use async_trait::async_trait;

use super::todo::{NewTodo, Todo};
use crate::error::Error;

/// Storage capability for todos. The service depends only on this trait, so
/// the backing store can be swapped without touching business logic.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    async fn init(&self) -> Result<(), Error>;
    /// Inserts a new record and returns it with the generated id/timestamps.
    async fn create(&self, input: NewTodo) -> Result<Todo, Error>;
    /// Returns the matching non-deleted record, or `Error::NotFound`.
    async fn get_by_id(&self, id: i64) -> Result<Todo, Error>;
    /// Returns all non-deleted records in store-default order.
    async fn get_all(&self) -> Result<Vec<Todo>, Error>;
    /// Full-record write by identity. No existence check is performed.
    async fn update(&self, todo: &Todo) -> Result<(), Error>;
    /// Soft-deletes by identity. Succeeds even when the id does not exist.
    async fn delete(&self, id: i64) -> Result<(), Error>;
    /// Inserts a todo and writes its audit entry inside one transaction;
    /// a failure in either step rolls back both.
    async fn create_with_audit(&self, input: NewTodo) -> Result<Todo, Error>;
}
