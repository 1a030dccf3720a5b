//! Core types for the planner generator
//!
//! This module defines the request a caller submits, the pieces the generator
//! computes (breaks, wellbeing reminders), the assembled response and the
//! presentational template descriptors.

use serde::{Deserialize, Serialize};

/// Template used when the request does not name one
pub const DEFAULT_TEMPLATE: &str = "professional";

/// Wellbeing topic a reminder can be generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WellbeingTopic {
    Hydration,
    Stretch,
    Outdoor,
}

impl WellbeingTopic {
    /// All topics in reminder order
    pub const ALL: [WellbeingTopic; 3] = [
        WellbeingTopic::Hydration,
        WellbeingTopic::Stretch,
        WellbeingTopic::Outdoor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WellbeingTopic::Hydration => "hydration",
            WellbeingTopic::Stretch => "stretch",
            WellbeingTopic::Outdoor => "outdoor",
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

/// Which wellbeing prompts the caller wants in the plan.
///
/// Every flag defaults to enabled, both when the object is omitted and when
/// a single flag is missing from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellbeingPrompts {
    #[serde(default = "enabled_by_default")]
    pub hydration: bool,
    #[serde(default = "enabled_by_default")]
    pub stretch: bool,
    #[serde(default = "enabled_by_default")]
    pub outdoor: bool,
}

impl Default for WellbeingPrompts {
    fn default() -> Self {
        Self {
            hydration: true,
            stretch: true,
            outdoor: true,
        }
    }
}

impl WellbeingPrompts {
    /// Everything switched off
    pub fn none() -> Self {
        Self {
            hydration: false,
            stretch: false,
            outdoor: false,
        }
    }

    pub fn is_enabled(&self, topic: WellbeingTopic) -> bool {
        match topic {
            WellbeingTopic::Hydration => self.hydration,
            WellbeingTopic::Stretch => self.stretch,
            WellbeingTopic::Outdoor => self.outdoor,
        }
    }

    /// Number of enabled prompts (0 to 3)
    pub fn enabled_count(&self) -> usize {
        WellbeingTopic::ALL
            .iter()
            .filter(|topic| self.is_enabled(**topic))
            .count()
    }
}

/// Caller-supplied work schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerRequest {
    /// Start of the workday, `HH:MM`
    pub work_start: String,
    /// End of the workday, `HH:MM` (echoed, never interpreted)
    pub work_end: String,
    /// Task labels, passed through verbatim
    pub tasks: Vec<String>,
    /// Length of each break in minutes
    pub break_duration: i64,
    #[serde(default)]
    pub wellbeing_prompts: WellbeingPrompts,
    /// Presentation template id; does not affect generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl PlannerRequest {
    /// Create a request with all prompts enabled and the default template
    pub fn new(
        work_start: impl Into<String>,
        work_end: impl Into<String>,
        tasks: Vec<String>,
        break_duration: i64,
    ) -> Self {
        Self {
            work_start: work_start.into(),
            work_end: work_end.into(),
            tasks,
            break_duration,
            wellbeing_prompts: WellbeingPrompts::default(),
            template: None,
        }
    }

    pub fn with_prompts(mut self, prompts: WellbeingPrompts) -> Self {
        self.wellbeing_prompts = prompts;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Template id, falling back to [`DEFAULT_TEMPLATE`]
    pub fn template_id(&self) -> &str {
        self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE)
    }
}

/// Break category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    #[serde(rename = "Morning Break")]
    Morning,
    #[serde(rename = "Afternoon Break")]
    Afternoon,
}

impl BreakKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreakKind::Morning => "Morning Break",
            BreakKind::Afternoon => "Afternoon Break",
        }
    }
}

/// A scheduled pause in the workday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakTime {
    /// Start time, `HH:MM`
    pub time: String,
    /// Duration in minutes
    pub duration: i64,
    #[serde(rename = "type")]
    pub kind: BreakKind,
}

/// A fixed-time wellbeing nudge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellbeingReminder {
    pub time: String,
    pub prompt: String,
    pub icon: String,
    pub enabled: bool,
}

/// A generated daily plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerResponse {
    /// Long human-readable date, e.g. "Monday, January 15, 2024"
    pub date: String,
    /// `"<work_start> - <work_end>"`
    pub work_hours: String,
    pub tasks: Vec<String>,
    pub breaks: Vec<BreakTime>,
    pub wellbeing: Vec<WellbeingReminder>,
    /// UUID v4, unique per generated plan
    pub planner_id: String,
}

/// Presentational template descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Accent gradient classes
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let json = r#"{
            "work_start": "09:00",
            "work_end": "17:00",
            "tasks": [],
            "break_duration": 15
        }"#;

        let request: PlannerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.wellbeing_prompts, WellbeingPrompts::default());
        assert_eq!(request.template_id(), "professional");
    }

    #[test]
    fn test_partial_prompts_default_to_enabled() {
        let json = r#"{
            "work_start": "09:00",
            "work_end": "17:00",
            "tasks": ["Write report"],
            "break_duration": 10,
            "wellbeing_prompts": { "stretch": false },
            "template": "minimal"
        }"#;

        let request: PlannerRequest = serde_json::from_str(json).unwrap();
        assert!(request.wellbeing_prompts.hydration);
        assert!(!request.wellbeing_prompts.stretch);
        assert!(request.wellbeing_prompts.outdoor);
        assert_eq!(request.wellbeing_prompts.enabled_count(), 2);
        assert_eq!(request.template_id(), "minimal");
    }

    #[test]
    fn test_null_template_falls_back() {
        let json = r#"{
            "work_start": "09:00",
            "work_end": "17:00",
            "tasks": [],
            "break_duration": 15,
            "template": null
        }"#;

        let request: PlannerRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.template_id(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_break_kind_serializes_as_label() {
        let b = BreakTime {
            time: "10:30".to_string(),
            duration: 15,
            kind: BreakKind::Morning,
        };

        let value = serde_json::to_value(&b).unwrap();
        assert_eq!(value["type"], "Morning Break");
        assert_eq!(value["time"], "10:30");
        assert_eq!(value["duration"], 15);
    }

    #[test]
    fn test_missing_break_duration_rejected() {
        let json = r#"{"work_start": "09:00", "work_end": "17:00", "tasks": []}"#;
        assert!(serde_json::from_str::<PlannerRequest>(json).is_err());
    }
}
