//! HTTP route definitions, one module per resource.

pub mod health;
pub mod milestones;
