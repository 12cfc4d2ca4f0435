use crate::core::errors::StorageError;
use crate::core::models::nurse::{NewNurse, Nurse, NurseUpdate, next_update_timestamp};
use crate::infrastructure::storage::NurseStorage;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tokio::sync::OnceCell;
use tracing::{debug, info};

const CREATE_NURSES_TABLE: &str = "CREATE TABLE IF NOT EXISTS nurses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(255) NOT NULL,
    license_number VARCHAR(50) NOT NULL,
    dob DATE NOT NULL,
    age INTEGER NOT NULL CHECK (age > 0),
    created_at DATETIME NOT NULL,
    updated_at DATETIME NOT NULL
)";

const SELECT_COLUMNS: &str = "SELECT id, name, license_number, dob, age, created_at, updated_at FROM nurses";

/// SQLite-backed store.
///
/// Nothing touches the database at construction. The pool is opened and the
/// `nurses` table created on the first operation; every later operation reuses
/// that pool. A failed initialisation is retried on the next call.
pub struct SqlStorage {
    database_url: String,
    pool: OnceCell<SqlitePool>,
}

impl SqlStorage {
    pub fn new(database_url: impl Into<String>) -> Self {
        SqlStorage {
            database_url: database_url.into(),
            pool: OnceCell::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.initialized()
    }

    async fn pool(&self) -> Result<&SqlitePool, StorageError> {
        self.pool.get_or_try_init(|| open_pool(&self.database_url)).await
    }
}

async fn open_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    // each connection to an in-memory database sees its own empty database
    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(|e| StorageError::Unavailable(e.to_string()))?;
    sqlx::query(CREATE_NURSES_TABLE).execute(&pool).await?;
    info!("Nurse store initialized");
    Ok(pool)
}

#[async_trait]
impl NurseStorage for SqlStorage {
    async fn list(&self) -> Result<Vec<Nurse>, StorageError> {
        let pool = self.pool().await?;
        let nurses = sqlx::query_as::<_, Nurse>(&format!("{} ORDER BY created_at DESC, id DESC", SELECT_COLUMNS))
            .fetch_all(pool)
            .await?;
        Ok(nurses)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Nurse>, StorageError> {
        let pool = self.pool().await?;
        let nurse = sqlx::query_as::<_, Nurse>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(nurse)
    }

    async fn create(&self, nurse: NewNurse) -> Result<Nurse, StorageError> {
        let pool = self.pool().await?;
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO nurses (name, license_number, dob, age, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&nurse.name)
        .bind(&nurse.license_number)
        .bind(nurse.dob)
        .bind(nurse.age)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Inserted nurse row {}", id);
        Ok(Nurse {
            id,
            name: nurse.name,
            license_number: nurse.license_number,
            dob: nurse.dob,
            age: nurse.age,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update(&self, id: i64, changes: NurseUpdate) -> Result<Option<Nurse>, StorageError> {
        let pool = self.pool().await?;
        let mut tx = pool.begin().await?;

        let current = sqlx::query_as::<_, Nurse>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(mut nurse) = current else {
            return Ok(None);
        };

        changes.apply_to(&mut nurse);
        nurse.updated_at = next_update_timestamp(nurse.updated_at);

        sqlx::query("UPDATE nurses SET name = ?, license_number = ?, dob = ?, age = ?, updated_at = ? WHERE id = ?")
            .bind(&nurse.name)
            .bind(&nurse.license_number)
            .bind(nurse.dob)
            .bind(nurse.age)
            .bind(nurse.updated_at)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Some(nurse))
    }

    async fn delete(&self, id: i64) -> Result<bool, StorageError> {
        let pool = self.pool().await?;
        let result = sqlx::query("DELETE FROM nurses WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
