//! Database access layer: pool construction, migrations, seed data,
//! plus the model and repository modules.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL such as `sqlite:milestones.db`.
///
/// The database file is created on first use. Foreign-key enforcement is
/// enabled on every connection, and a busy timeout lets handlers on different
/// workers share the single database file. Statement logging flows through
/// `tracing` at debug level.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Run all pending migrations. Re-running against an up-to-date database
/// is a no-op.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Insert the sample groups and milestones on first startup.
///
/// Guarded by an emptiness check so restarting against a persistent file does
/// not duplicate rows. All inserts run in one transaction; milestones are
/// inserted in listing order so their ids run 1 through 3.
pub async fn seed(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let (groups,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM milestone_groups")
        .fetch_one(&mut *tx)
        .await?;
    if groups > 0 {
        tracing::debug!("sample data already present, skipping seed");
        return Ok(());
    }

    let (g1,): (i64,) =
        sqlx::query_as("INSERT INTO milestone_groups (title, description) VALUES (?, ?) RETURNING id")
            .bind("Group 1")
            .bind("Description 1")
            .fetch_one(&mut *tx)
            .await?;

    let (g2,): (i64,) =
        sqlx::query_as("INSERT INTO milestone_groups (title, description) VALUES (?, ?) RETURNING id")
            .bind("Group 2")
            .bind("Description 2")
            .fetch_one(&mut *tx)
            .await?;

    let samples = [
        (g1, "1", "image1.jpg", "text1", 1i64),
        (g1, "2", "image2.jpg", "text2", 2),
        (g2, "2", "image2.jpg", "text2", 2),
    ];

    for (group_id, title, image, text, priority) in samples {
        sqlx::query(
            "INSERT INTO milestones (group_id, title, image, text, priority) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(group_id)
        .bind(title)
        .bind(image)
        .bind(text)
        .bind(priority)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!("Sample groups and milestones inserted");
    Ok(())
}
