//! Milestone group entity model and DTOs.

use milestones_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::milestone::Milestone;

/// A row from the `milestone_groups` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MilestoneGroup {
    pub id: DbId,
    pub title: String,
    pub description: String,
}

/// DTO for creating a new group.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMilestoneGroup {
    pub title: String,
    pub description: String,
}

/// A group together with the milestones that reference it.
///
/// Built by an explicit foreign-key lookup in the repository layer, not by
/// lazy relationship loading.
#[derive(Debug, Clone, Serialize)]
pub struct GroupWithMilestones {
    #[serde(flatten)]
    pub group: MilestoneGroup,
    pub milestones: Vec<Milestone>,
}
