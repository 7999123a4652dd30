// Daily logs: submission, lookup, heatmap projection and per-day workflow state.

pub mod handlers;
pub mod heatmap;
pub mod upsert;
pub mod validation;
pub mod workflow;
