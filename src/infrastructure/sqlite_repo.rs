use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite, SqliteConnection};

use crate::domain::{
    repository::TodoRepository,
    todo::{NewTodo, Todo},
};
use crate::error::Error;

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: Arc<Pool<Sqlite>>,
}

impl SqliteTodoRepository {
    pub async fn connect(database_url: &str) -> Result<Self, Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool: Arc::new(pool) })
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn init(&self) -> Result<(), Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS todos (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT NOT NULL,
                status INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                deleted_at TEXT
            )",
        )
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn create(&self, input: NewTodo) -> Result<Todo, Error> {
        let mut conn = self.pool.acquire().await?;
        insert_todo(&mut conn, input).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, Error> {
        let row = sqlx::query(
            "SELECT id, content, status, created_at, updated_at, deleted_at
             FROM todos WHERE id = ?1 AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&*self.pool)
        .await?;
        row.map(row_to_todo).ok_or(Error::NotFound(id))
    }

    async fn get_all(&self) -> Result<Vec<Todo>, Error> {
        let rows = sqlx::query(
            "SELECT id, content, status, created_at, updated_at, deleted_at
             FROM todos WHERE deleted_at IS NULL",
        )
        .fetch_all(&*self.pool)
        .await?;
        Ok(rows.into_iter().map(row_to_todo).collect())
    }

    async fn update(&self, todo: &Todo) -> Result<(), Error> {
        sqlx::query("UPDATE todos SET content = ?2, status = ?3, updated_at = ?4 WHERE id = ?1")
            .bind(todo.id)
            .bind(&todo.content)
            .bind(todo.status)
            .bind(Utc::now())
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), Error> {
        // Soft delete: the row stays, read paths skip it
        sqlx::query("UPDATE todos SET deleted_at = ?2 WHERE id = ?1 AND deleted_at IS NULL")
            .bind(id)
            .bind(Utc::now())
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    async fn create_with_audit(&self, input: NewTodo) -> Result<Todo, Error> {
        let mut tx = self.pool.begin().await?;
        let todo = insert_todo(&mut tx, input).await?;
        // Shares the transaction: an error here drops `tx` uncommitted and
        // the insert above is rolled back.
        record_audit(&mut tx, &todo).await?;
        tx.commit().await?;
        Ok(todo)
    }
}

async fn insert_todo(conn: &mut SqliteConnection, input: NewTodo) -> Result<Todo, Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO todos (content, status, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(&input.content)
    .bind(input.status)
    .bind(now)
    .bind(now)
    .execute(&mut *conn)
    .await?;
    Ok(Todo {
        id: result.last_insert_rowid(),
        content: input.content,
        status: input.status,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    })
}

async fn record_audit(_conn: &mut SqliteConnection, _todo: &Todo) -> Result<(), Error> {
    // Audit trail is not wired up yet; the entry would be written on the
    // same transaction as the insert.
    Ok(())
}

fn row_to_todo(row: SqliteRow) -> Todo {
    Todo {
        id: row.get("id"),
        content: row.get("content"),
        status: row.get("status"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
        updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
        deleted_at: row.get::<Option<DateTime<Utc>>, _>("deleted_at"),
    }
}
