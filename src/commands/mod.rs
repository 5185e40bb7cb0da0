//! CLI commands for trains

pub mod count;
pub mod dispatch;
pub mod distance;
pub mod format;
pub mod graph;
pub mod routes;
pub mod shortest;
