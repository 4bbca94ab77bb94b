//! Request handlers backing the route definitions.

pub mod milestones;
