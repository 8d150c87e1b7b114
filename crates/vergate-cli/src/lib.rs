//! Host adapter for `vergate-semver`: configuration, message rendering and reports.

pub mod config;
pub mod message;
pub mod report;
