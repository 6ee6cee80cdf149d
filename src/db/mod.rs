use anyhow::Result;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};

use crate::models::{BlockRecord, TransactionRecord};

/// Append-only store over a single exclusively-owned SQLite connection.
/// One run stages all inserts inside one transaction; nothing is durable
/// until `commit_run`.
pub struct Database {
    conn: SqliteConnection,
}

impl Database {
    pub async fn connect(db_path: &str) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);

        let conn = SqliteConnection::connect_with(&options).await?;

        Ok(Self { conn })
    }

    /// Idempotent schema bootstrap, safe to run on every invocation.
    pub async fn init_schema(&mut self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS blocks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                block_number TEXT,
                hash TEXT,
                timestamp DATETIME
            )",
        )
        .execute(&mut self.conn)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                hash TEXT,
                block_hash TEXT,
                block_number TEXT,
                sender TEXT NULL,
                receiver TEXT NULL,
                value REAL
            )",
        )
        .execute(&mut self.conn)
        .await?;

        Ok(())
    }

    pub async fn begin_run(&mut self) -> Result<()> {
        sqlx::query("BEGIN").execute(&mut self.conn).await?;
        Ok(())
    }

    pub async fn commit_run(&mut self) -> Result<()> {
        sqlx::query("COMMIT").execute(&mut self.conn).await?;
        Ok(())
    }

    pub async fn insert_block(&mut self, block: &BlockRecord) -> Result<()> {
        sqlx::query("INSERT INTO blocks (block_number, hash, timestamp) VALUES (?, ?, ?)")
            .bind(&block.number)
            .bind(&block.hash)
            .bind(block.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
            .execute(&mut self.conn)
            .await?;

        Ok(())
    }

    pub async fn insert_transaction(&mut self, tx: &TransactionRecord) -> Result<()> {
        sqlx::query(
            "INSERT INTO transactions (hash, block_hash, block_number, sender, receiver, value)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&tx.hash)
        .bind(&tx.block_hash)
        .bind(&tx.block_number)
        .bind(tx.sender.as_deref())
        .bind(tx.receiver.as_deref())
        .bind(tx.value)
        .execute(&mut self.conn)
        .await?;

        Ok(())
    }
}
