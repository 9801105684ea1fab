use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::ConversationLogEntry;
use crate::Result;

/// Append-only conversation log backed by SQLite
#[derive(Debug, Clone)]
pub struct ConversationLog {
    pool: SqlitePool,
}

impl ConversationLog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url`, creating the database file if needed
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        Self::open(url, max_connections, true).await
    }

    /// Open a pool for an existing database; a missing file is an error
    pub async fn open_existing(url: &str, max_connections: u32) -> Result<Self> {
        Self::open(url, max_connections, false).await
    }

    async fn open(url: &str, max_connections: u32, create: bool) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(create);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create a new conversation log from configuration
    pub async fn from_config(config: &crate::config::AppConfig) -> Result<Self> {
        Self::connect(config.database_url(), config.max_connections()).await
    }

    /// Get a reference to the database pool for raw queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the conversations table if it does not exist
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS conversations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_message TEXT NOT NULL,
                bot_response TEXT NOT NULL,
                timestamp DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Conversation log schema ready");
        Ok(())
    }

    /// Whether the conversations table has been created
    pub async fn has_schema(&self) -> Result<bool> {
        let (tables,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'conversations'",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(tables > 0)
    }

    /// Append one exchange
    pub async fn log(&self, user_message: &str, bot_response: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO conversations (user_message, bot_response, timestamp)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_message)
        .bind(bot_response)
        .bind(chrono::Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Most recent exchanges, newest first
    pub async fn recent(&self, limit: u32) -> Result<Vec<ConversationLogEntry>> {
        let entries = sqlx::query_as::<_, ConversationLogEntry>(
            r#"
            SELECT id, user_message, bot_response, timestamp
            FROM conversations
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Total number of recorded exchanges
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM conversations")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
