use crate::db::models::{Todo, TodoList};
use crate::db::schema::SQLITE_INIT;
use crate::error::TallyError;
use sqlx::SqlitePool;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{
    Sqlite, SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

/// Open (creating if missing) the SQLite database and apply the schema.
pub async fn connect(database_url: &str) -> Result<SqlitePool, TallyError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5))
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;

    apply_schema(&pool).await?;

    info!("database initialized");
    Ok(pool)
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), TallyError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

/// Per-request persistence gateway over lists and todos.
///
/// Holds one pooled connection for the lifetime of a request; dropping the
/// store returns the connection to the pool whatever the handler outcome.
/// Every operation is one or two parameterized statements and logs the
/// statement text together with its parameter values.
pub struct TodoStore {
    conn: PoolConnection<Sqlite>,
}

impl TodoStore {
    pub async fn acquire(pool: &SqlitePool) -> Result<Self, TallyError> {
        Ok(Self {
            conn: pool.acquire().await?,
        })
    }

    /// Fetch one list with its todos, `None` if the id does not exist.
    pub async fn find_list(&mut self, id: i64) -> Result<Option<TodoList>, TallyError> {
        const SQL: &str = "SELECT id, name FROM lists WHERE id = ?";
        debug!(sql = SQL, id, "query");

        let list = sqlx::query_as::<_, TodoList>(SQL)
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;

        match list {
            Some(mut list) => {
                list.todos = self.todos_for_list(list.id).await?;
                Ok(Some(list))
            }
            None => Ok(None),
        }
    }

    /// All lists ordered by id, todos populated per list.
    pub async fn all_lists(&mut self) -> Result<Vec<TodoList>, TallyError> {
        const SQL: &str = "SELECT id, name FROM lists ORDER BY id";
        debug!(sql = SQL, "query");

        let mut lists = sqlx::query_as::<_, TodoList>(SQL)
            .fetch_all(&mut *self.conn)
            .await?;

        for list in &mut lists {
            list.todos = self.todos_for_list(list.id).await?;
        }
        Ok(lists)
    }

    /// Insert a new list and return its id. Uniqueness is not enforced
    /// here; callers validate against `all_lists` first.
    pub async fn create_list(&mut self, name: &str) -> Result<i64, TallyError> {
        const SQL: &str = "INSERT INTO lists (name) VALUES (?) RETURNING id";
        debug!(sql = SQL, name, "query");

        let id: i64 = sqlx::query_scalar(SQL)
            .bind(name)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(id)
    }

    /// Delete a list and its todos: dependent todos first, then the list
    /// row. The two statements are not wrapped in a transaction.
    pub async fn delete_list(&mut self, id: i64) -> Result<(), TallyError> {
        const SQL_TODOS: &str = "DELETE FROM todo WHERE list_id = ?";
        debug!(sql = SQL_TODOS, id, "query");
        sqlx::query(SQL_TODOS)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        const SQL_LIST: &str = "DELETE FROM lists WHERE id = ?";
        debug!(sql = SQL_LIST, id, "query");
        sqlx::query(SQL_LIST)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    pub async fn rename_list(&mut self, id: i64, name: &str) -> Result<(), TallyError> {
        const SQL: &str = "UPDATE lists SET name = ? WHERE id = ?";
        debug!(sql = SQL, name, id, "query");

        sqlx::query(SQL)
            .bind(name)
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    /// Insert a todo under a list, initially incomplete, returning its id.
    pub async fn create_todo(&mut self, list_id: i64, name: &str) -> Result<i64, TallyError> {
        const SQL: &str = "INSERT INTO todo (list_id, name, completed) VALUES (?, ?, false) RETURNING id";
        debug!(sql = SQL, list_id, name, "query");

        let id: i64 = sqlx::query_scalar(SQL)
            .bind(list_id)
            .bind(name)
            .fetch_one(&mut *self.conn)
            .await?;
        Ok(id)
    }

    /// Delete a todo by id, scoped to its list so a stale or hostile form
    /// cannot delete a sibling list's todo.
    pub async fn delete_todo(&mut self, list_id: i64, todo_id: i64) -> Result<(), TallyError> {
        const SQL: &str = "DELETE FROM todo WHERE id = ? AND list_id = ?";
        debug!(sql = SQL, todo_id, list_id, "query");

        sqlx::query(SQL)
            .bind(todo_id)
            .bind(list_id)
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    pub async fn set_todo_status(
        &mut self,
        list_id: i64,
        todo_id: i64,
        completed: bool,
    ) -> Result<(), TallyError> {
        const SQL: &str = "UPDATE todo SET completed = ? WHERE list_id = ? AND id = ?";
        debug!(sql = SQL, completed, list_id, todo_id, "query");

        sqlx::query(SQL)
            .bind(completed)
            .bind(list_id)
            .bind(todo_id)
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    /// Bulk-complete every todo under a list.
    pub async fn mark_all_complete(&mut self, list_id: i64) -> Result<(), TallyError> {
        const SQL: &str = "UPDATE todo SET completed = true WHERE list_id = ?";
        debug!(sql = SQL, list_id, "query");

        sqlx::query(SQL)
            .bind(list_id)
            .execute(&mut *self.conn)
            .await?;
        Ok(())
    }

    /// Todos belonging to one list, ordered by id.
    pub async fn todos_for_list(&mut self, list_id: i64) -> Result<Vec<Todo>, TallyError> {
        const SQL: &str =
            "SELECT id, list_id, name, completed FROM todo WHERE list_id = ? ORDER BY id";
        debug!(sql = SQL, list_id, "query");

        let todos = sqlx::query_as::<_, Todo>(SQL)
            .bind(list_id)
            .fetch_all(&mut *self.conn)
            .await?;
        Ok(todos)
    }
}
