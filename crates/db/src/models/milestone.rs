//! Milestone entity model and DTOs.

use milestones_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `milestones` table.
///
/// Serializes to the public shape returned by the HTTP layer, generated
/// id included.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub group_id: Option<DbId>,
    pub title: String,
    pub image: String,
    pub text: String,
    pub priority: Option<i64>,
}

/// DTO for creating a new milestone.
///
/// `group_id` is optional at the type level but expected to be set.
/// `priority` is caller-assigned; no ordering constraint is enforced.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMilestone {
    pub group_id: Option<DbId>,
    pub title: String,
    pub image: String,
    pub text: String,
    pub priority: Option<i64>,
}
