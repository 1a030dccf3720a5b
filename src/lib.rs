//! Wellday Planner - Daily planner generator for workplace wellbeing
//!
//! Turns a work schedule into a structured daily plan through a
//! deterministic pipeline: break scheduling → wellbeing reminders →
//! plan assembly (date, echoed tasks, unique planner id).
//!
//! ## Modules
//!
//! - **Planner**: Generate plans from a `PlannerRequest` (Rust or JSON API)
//! - **Templates**: The fixed catalog of presentational planner templates
//! - **Validation**: Report request problems the generator would absorb

pub mod breaks;
pub mod config;
pub mod error;
pub mod planner;
pub mod templates;
pub mod types;
pub mod validation;
pub mod wellbeing;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use config::PlannerConfig;
pub use error::PlannerError;
pub use planner::{
    generate_planner, generate_planner_json, list_templates_json, validate_request_json,
    PlannerGenerator,
};
pub use templates::{find_template, list_templates};
pub use types::{
    BreakKind, BreakTime, PlannerRequest, PlannerResponse, PlannerTemplate, WellbeingPrompts,
    WellbeingReminder, WellbeingTopic,
};
pub use validation::{validate_request, RequestIssue, ValidationReport};

/// Crate version embedded in CLI and FFI reports
pub const PLANNER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name reported by the CLI doctor
pub const PRODUCER_NAME: &str = "wellday-planner";
