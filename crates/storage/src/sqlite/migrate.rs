use chrono::Utc;
use sqlx::SqlitePool;

use super::SqliteInitError;

/// Schema versions, applied in ascending order.
const MIGRATIONS: &[(i64, &str)] = &[
    (
        1,
        r"
            CREATE TABLE IF NOT EXISTS kv_entries (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
        ",
    ),
    (
        2,
        r"
            CREATE INDEX IF NOT EXISTS idx_kv_entries_updated_at
                ON kv_entries (updated_at);
        ",
    ),
];

/// Highest schema version this build knows about.
pub const LATEST_VERSION: i64 = 2;

/// Applies every version not yet recorded in `schema_migrations`, each in
/// its own transaction.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    sqlx::query(
        r"
            CREATE TABLE IF NOT EXISTS schema_migrations (
                version INTEGER PRIMARY KEY,
                applied_at TEXT NOT NULL
            );
        ",
    )
    .execute(pool)
    .await?;

    let current = applied_version(pool).await?;
    for &(version, statement) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        let mut tx = pool.begin().await?;
        sqlx::query(statement).execute(&mut *tx).await?;
        sqlx::query(
            r"
                INSERT INTO schema_migrations (version, applied_at)
                VALUES (?1, ?2)
                ON CONFLICT(version) DO NOTHING
            ",
        )
        .bind(version)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::info!(version, "applied session store migration");
    }

    Ok(())
}

/// Newest applied version, 0 on a fresh database.
pub async fn applied_version(pool: &SqlitePool) -> Result<i64, SqliteInitError> {
    let version: Option<i64> = sqlx::query_scalar("SELECT MAX(version) FROM schema_migrations")
        .fetch_one(pool)
        .await?;
    Ok(version.unwrap_or(0))
}
