use async_trait::async_trait;

use crate::domain::repository::TodoRepository;
use crate::domain::todo::{NewTodo, Todo};
use crate::error::Error;

#[async_trait]
pub trait TodoService: Send + Sync + 'static {
    async fn create(&self, input: NewTodo) -> Result<Todo, Error>;
    async fn get_by_id(&self, id: i64) -> Result<Todo, Error>;
    async fn get_all(&self) -> Result<Vec<Todo>, Error>;
    async fn create_with_audit(&self, input: NewTodo) -> Result<Todo, Error>;
}

#[derive(Clone)]
pub struct TodoServiceImpl<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoServiceImpl<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn validate_content(input: &NewTodo) -> Result<(), Error> {
        if input.content.is_empty() {
            return Err(Error::validation("todo content must not be empty"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R: TodoRepository> TodoService for TodoServiceImpl<R> {
    async fn create(&self, input: NewTodo) -> Result<Todo, Error> {
        Self::validate_content(&input)?;
        self.repo.create(input).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, Error> {
        if id == 0 {
            return Err(Error::validation("id must not be zero"));
        }
        self.repo.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<Todo>, Error> {
        self.repo.get_all().await
    }

    async fn create_with_audit(&self, input: NewTodo) -> Result<Todo, Error> {
        Self::validate_content(&input)?;
        self.repo.create_with_audit(input).await
    }
}
