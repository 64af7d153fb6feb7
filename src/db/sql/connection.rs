//! Pooled database handle shared by every request.

use sqlx::any::{AnyArguments, AnyPoolOptions, AnyQueryResult, AnyRow, install_default_drivers};
use sqlx::query::Query;
use sqlx::{Any, AnyPool, Connection, Execute, Transaction};
use tracing::{debug, info};

use super::album::SqlAlbumRepository;
use super::helpers::{connection_error, database_error};
use crate::db::{Database, DbResult};

const SQLITE_SCHEMA: &str = include_str!("../../../data/sql/sqlite/album.sql");

/// Outcome of a write statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    pub rows_affected: u64,
    /// Id generated by an insert, when the backend reports one.
    pub last_insert_id: Option<i64>,
}

impl From<AnyQueryResult> for ExecResult {
    fn from(result: AnyQueryResult) -> Self {
        Self {
            rows_affected: result.rows_affected(),
            last_insert_id: result.last_insert_id(),
        }
    }
}

/// Database handle backed by a sqlx `AnyPool`.
///
/// Opened once at startup and shared by reference. The pool handles
/// concurrent access; this type adds no locking of its own.
pub struct SqlDatabase {
    pool: AnyPool,
}

impl SqlDatabase {
    /// Open a pool for the given URL (`mysql://…` or `sqlite:…`) and verify
    /// the backend answers a ping.
    pub async fn connect(url: &str) -> DbResult<Self> {
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .connect(url)
            .await
            .map_err(connection_error)?;
        let db = Self { pool };
        db.ping().await?;

        let backend = url.split(':').next().unwrap_or_default();
        info!(backend, "Connected to database");
        Ok(db)
    }

    /// Create an in-memory SQLite database with the album table in place.
    ///
    /// Limited to a single connection that never expires, since every new
    /// SQLite memory connection would start from an empty database.
    pub async fn in_memory() -> DbResult<Self> {
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .map_err(connection_error)?;

        sqlx::query(SQLITE_SCHEMA)
            .execute(&pool)
            .await
            .map_err(database_error)?;

        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Run a read and return every row.
    pub async fn query<'q>(
        &self,
        query: Query<'q, Any, AnyArguments<'q>>,
    ) -> DbResult<Vec<AnyRow>> {
        query.fetch_all(&self.pool).await.map_err(database_error)
    }

    /// Run a point read. `None` means no row matched.
    pub async fn query_one<'q>(
        &self,
        query: Query<'q, Any, AnyArguments<'q>>,
    ) -> DbResult<Option<AnyRow>> {
        query.fetch_optional(&self.pool).await.map_err(database_error)
    }

    /// Run a write.
    ///
    /// Inserts always report their generated id. Backends whose driver does
    /// not hand it back (SQLite) are asked with `last_insert_rowid()` on the
    /// connection that ran the insert.
    pub async fn exec<'q>(
        &self,
        query: Query<'q, Any, AnyArguments<'q>>,
    ) -> DbResult<ExecResult> {
        let is_insert = is_insert(query.sql());
        let mut conn = self.pool.acquire().await.map_err(connection_error)?;

        let result = query.execute(&mut *conn).await.map_err(database_error)?;
        let mut exec = ExecResult::from(result);

        if is_insert && exec.last_insert_id.is_none() {
            let id: i64 = sqlx::query_scalar("SELECT last_insert_rowid()")
                .fetch_one(&mut *conn)
                .await
                .map_err(database_error)?;
            exec.last_insert_id = Some(id);
        }

        debug!(
            rows_affected = exec.rows_affected,
            last_insert_id = ?exec.last_insert_id,
            "Statement executed"
        );
        Ok(exec)
    }

    /// Start a transaction on a pooled connection.
    pub async fn begin(&self) -> DbResult<Transaction<'static, Any>> {
        self.pool.begin().await.map_err(database_error)
    }
}

fn is_insert(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("insert"))
}

impl Database for SqlDatabase {
    type Albums<'a> = SqlAlbumRepository<'a>;

    async fn ping(&self) -> DbResult<()> {
        let mut conn = self.pool.acquire().await.map_err(connection_error)?;
        conn.ping().await.map_err(connection_error)
    }

    fn albums(&self) -> Self::Albums<'_> {
        SqlAlbumRepository { db: self }
    }
}
