//! Request checks
//!
//! The generator accepts any well-typed request and absorbs bad time input by
//! falling back to default breaks. This module reports what it would absorb,
//! so callers that prefer strictness can reject the request up front.

use crate::breaks::ClockTime;
use crate::templates::find_template;
use crate::types::PlannerRequest;
use serde::{Deserialize, Serialize};

/// A problem found in a planner request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestIssue {
    pub field: String,
    pub message: String,
}

impl RequestIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Summary of a validation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub issues: Vec<RequestIssue>,
}

impl ValidationReport {
    pub fn from_issues(issues: Vec<RequestIssue>) -> Self {
        Self {
            valid: issues.is_empty(),
            issues,
        }
    }
}

/// Collect every issue in a request. An empty result means the generator will
/// use the request exactly as given.
pub fn validate_request(request: &PlannerRequest) -> Vec<RequestIssue> {
    let mut issues = Vec::new();

    if let Err(e) = ClockTime::parse(&request.work_start) {
        issues.push(RequestIssue::new(
            "work_start",
            format!("{}; fallback breaks will be used", e),
        ));
    }

    // work_end is only echoed, but a bad value still ends up in the plan
    if let Err(e) = ClockTime::parse(&request.work_end) {
        issues.push(RequestIssue::new("work_end", e.to_string()));
    }

    if request.break_duration < 0 {
        issues.push(RequestIssue::new(
            "break_duration",
            format!("negative duration: {}", request.break_duration),
        ));
    }

    if find_template(request.template_id()).is_none() {
        issues.push(RequestIssue::new(
            "template",
            format!("unknown template: {}", request.template_id()),
        ));
    }

    issues
}
