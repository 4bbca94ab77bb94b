//! Repository for the `milestones` table.

use milestones_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::milestone::{CreateMilestone, Milestone};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, group_id, title, image, text, priority";

/// Provides CRUD operations for milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Insert a new milestone, returning the created row.
    ///
    /// Fails with a foreign-key violation if `group_id` references no
    /// existing group.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMilestone,
    ) -> Result<Milestone, sqlx::Error> {
        let query = format!(
            "INSERT INTO milestones (group_id, title, image, text, priority) \
             VALUES (?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(input.group_id)
            .bind(&input.title)
            .bind(&input.image)
            .bind(&input.text)
            .bind(input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a milestone by its internal ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones WHERE id = ?");
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all milestones in storage order (no ORDER BY).
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones");
        sqlx::query_as::<_, Milestone>(&query).fetch_all(pool).await
    }

    /// Assign a new title to a milestone, returning the stored row as the
    /// storage engine sees it after the update.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_title(
        pool: &SqlitePool,
        id: DbId,
        new_title: &str,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!("UPDATE milestones SET title = ? WHERE id = ? RETURNING {COLUMNS}");
        sqlx::query_as::<_, Milestone>(&query)
            .bind(new_title)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
