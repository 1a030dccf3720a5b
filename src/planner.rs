//! Planner generation
//!
//! This module provides the public API of the crate. Generation runs in
//! three steps:
//! 1. Break scheduling from `work_start` (with fallback)
//! 2. Wellbeing reminders from the enabled prompts
//! 3. Assembly with the current date and a fresh planner id
//!
//! Nothing is stored between calls.

use crate::breaks::schedule_breaks;
use crate::config::{PlannerConfig, DEFAULT_DATE_FORMAT};
use crate::error::PlannerError;
use crate::templates::list_templates;
use crate::types::{PlannerRequest, PlannerResponse};
use crate::validation::{validate_request, ValidationReport};
use crate::wellbeing::build_reminders;
use chrono::{Local, NaiveDate};
use log::{info, warn};
use std::fmt::Write;
use uuid::Uuid;

/// Generate a plan with the default configuration (stateless, one-shot).
pub fn generate_planner(request: &PlannerRequest) -> PlannerResponse {
    PlannerGenerator::new().generate(request)
}

/// Generate a plan from request JSON and return response JSON.
///
/// # Example
/// ```ignore
/// let response_json = generate_planner_json(request_json)?;
/// ```
pub fn generate_planner_json(request_json: String) -> Result<String, PlannerError> {
    let request: PlannerRequest = serde_json::from_str(&request_json)?;
    let response = generate_planner(&request);
    serde_json::to_string(&response).map_err(|e| PlannerError::GenerationFault(e.to_string()))
}

/// The template catalog as a JSON array
pub fn list_templates_json() -> Result<String, PlannerError> {
    Ok(serde_json::to_string(&list_templates())?)
}

/// Validate request JSON and return a JSON [`ValidationReport`]
pub fn validate_request_json(request_json: String) -> Result<String, PlannerError> {
    let request: PlannerRequest = serde_json::from_str(&request_json)?;
    let report = ValidationReport::from_issues(validate_request(&request));
    Ok(serde_json::to_string(&report)?)
}

/// Planner generator holding an immutable configuration.
///
/// Safe to share between threads; every call builds its own response.
#[derive(Debug, Clone, Default)]
pub struct PlannerGenerator {
    config: PlannerConfig,
}

impl PlannerGenerator {
    /// Create a generator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with a custom configuration
    pub fn with_config(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Generate a plan dated today (local time)
    pub fn generate(&self, request: &PlannerRequest) -> PlannerResponse {
        self.generate_on(request, Local::now().date_naive())
    }

    /// Generate a plan for an explicit calendar date
    pub fn generate_on(&self, request: &PlannerRequest, date: NaiveDate) -> PlannerResponse {
        let breaks = schedule_breaks(&self.config, &request.work_start, request.break_duration);
        let wellbeing = build_reminders(&request.wellbeing_prompts);

        let planner = PlannerResponse {
            date: self.format_date(date),
            work_hours: format!("{} - {}", request.work_start, request.work_end),
            tasks: request.tasks.clone(),
            breaks,
            wellbeing,
            planner_id: Uuid::new_v4().to_string(),
        };

        info!("Generated planner with ID: {}", planner.planner_id);
        planner
    }

    /// Generate and serialize to JSON
    pub fn generate_json(&self, request: &PlannerRequest) -> Result<String, PlannerError> {
        let planner = self.generate(request);
        serde_json::to_string(&planner).map_err(|e| PlannerError::GenerationFault(e.to_string()))
    }

    fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.config.date_format)).is_ok() {
            return out;
        }

        warn!(
            "Date format {:?} failed, using default",
            self.config.date_format
        );
        date.format(DEFAULT_DATE_FORMAT).to_string()
    }
}
