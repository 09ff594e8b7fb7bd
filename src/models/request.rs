use serde::{Deserialize, Serialize};

use super::enums::{MeetingType, UrgencyLevel};

/// Raw request-form fields as read from the page, before validation.
///
/// Empty strings mean the field was left blank; budgets are absent rather
/// than zero when not entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub urgency: String,
    pub meeting: String,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub location: String,
    pub notes: String,
}

/// Validated consultation request, serialized snake_case as the request
/// API expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub lawyer_id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub urgency_level: UrgencyLevel,
    pub preferred_meeting_type: Option<MeetingType>,
    pub budget_min: Option<f64>,
    pub budget_max: Option<f64>,
    pub location: Option<String>,
    pub additional_notes: Option<String>,
}
