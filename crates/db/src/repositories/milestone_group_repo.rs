//! Repository for the `milestone_groups` table.

use std::collections::HashMap;

use milestones_core::types::DbId;
use sqlx::SqlitePool;

use crate::models::milestone::Milestone;
use crate::models::milestone_group::{CreateMilestoneGroup, GroupWithMilestones, MilestoneGroup};
use crate::repositories::MilestoneRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description";

/// Provides CRUD operations for milestone groups.
pub struct MilestoneGroupRepo;

impl MilestoneGroupRepo {
    /// Insert a new group, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMilestoneGroup,
    ) -> Result<MilestoneGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO milestone_groups (title, description) \
             VALUES (?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MilestoneGroup>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all groups in storage order (no ORDER BY).
    pub async fn list(pool: &SqlitePool) -> Result<Vec<MilestoneGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestone_groups");
        sqlx::query_as::<_, MilestoneGroup>(&query)
            .fetch_all(pool)
            .await
    }

    /// List all groups with their milestones attached.
    ///
    /// One explicit foreign-key pass: fetch groups, fetch milestones, bucket
    /// milestones by `group_id` in memory. Milestones with no group are
    /// dropped here; they remain reachable through the flat milestone list.
    pub async fn list_with_milestones(
        pool: &SqlitePool,
    ) -> Result<Vec<GroupWithMilestones>, sqlx::Error> {
        let groups = Self::list(pool).await?;
        let milestones = MilestoneRepo::list(pool).await?;

        let mut by_group: HashMap<DbId, Vec<Milestone>> = HashMap::new();
        for milestone in milestones {
            if let Some(group_id) = milestone.group_id {
                by_group.entry(group_id).or_default().push(milestone);
            }
        }

        Ok(groups
            .into_iter()
            .map(|group| {
                let milestones = by_group.remove(&group.id).unwrap_or_default();
                GroupWithMilestones { group, milestones }
            })
            .collect())
    }
}
