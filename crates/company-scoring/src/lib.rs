//! Weighted lead scoring and smart filtering for a multi-tenant company CRM.

pub mod config;
pub mod directory;
pub mod error;
pub mod export;
pub mod scoring;
pub mod telemetry;
