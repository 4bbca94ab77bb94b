//! Route definitions for milestones.

use axum::routing::get;
use axum::Router;

use crate::handlers::milestones;
use crate::state::AppState;

/// Routes mounted at the application root.
///
/// ```text
/// GET  /milestones/ -> list
/// POST /milestones/ -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/milestones/",
        get(milestones::list).post(milestones::create),
    )
}
