//! Error types for the planner generator

use thiserror::Error;

/// Errors that can occur while building or serving a planner
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Malformed time of day: {0}")]
    MalformedTime(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Planner generation failed: {0}")]
    GenerationFault(String),
}
