//! Consultation-request flow: gate, validate, submit.
//!
//! The send-request action behind each listing card. The flow is linear —
//! client gate, form validation, one POST — with no retry and no partial
//! state; every exit is a typed value the shell can surface.

use crate::api_client::{ApiClientError, LegalBoardApi};
use crate::config;
use crate::models::{ConsultationForm, ConsultationRequest, MeetingType, UrgencyLevel};
use crate::session::{self, SessionContext};

/// Categories offered by the request form.
pub const REQUEST_CATEGORIES: &[&str] = &[
    "Property Law",
    "Family Law",
    "Corporate Law",
    "Contract and Agreement Law",
    "Consumer Protection Law",
    "Labour and Employment Law",
    "IPR Law",
    "Criminal Defense",
    "Real Estate",
    "Intellectual Property",
];

// Field bounds enforced before a request leaves the page.
const TITLE_MAX: usize = 200;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 2000;
const LOCATION_MAX: usize = 200;
const NOTES_MAX: usize = 1000;

/// Form-level validation failures, worded for direct display.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Case title is required")]
    TitleMissing,
    #[error("Case title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Description must be at least 10 characters")]
    DescriptionTooShort,
    #[error("Description too long (max 2000 characters)")]
    DescriptionTooLong,
    #[error("Select a category")]
    CategoryMissing,
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Invalid urgency level: {0}")]
    InvalidUrgency(String),
    #[error("Invalid meeting preference: {0}")]
    InvalidMeeting(String),
    #[error("Budget values must not be negative")]
    NegativeBudget,
    #[error("Minimum budget exceeds maximum")]
    BudgetRangeInverted,
    #[error("Location too long (max 200 characters)")]
    LocationTooLong,
    #[error("Additional notes too long (max 1000 characters)")]
    NotesTooLong,
}

/// Validate raw form fields into a submission payload for one lawyer.
///
/// Text fields are trimmed; empty optional fields become `None`; an empty
/// urgency falls back to the form's pre-selected medium.
pub fn validate_form(
    lawyer_id: u32,
    form: &ConsultationForm,
) -> Result<ConsultationRequest, ValidationError> {
    let title = form.title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleMissing);
    }
    if title.len() > TITLE_MAX {
        return Err(ValidationError::TitleTooLong);
    }

    let description = form.description.trim();
    if description.len() < DESCRIPTION_MIN {
        return Err(ValidationError::DescriptionTooShort);
    }
    if description.len() > DESCRIPTION_MAX {
        return Err(ValidationError::DescriptionTooLong);
    }

    let category = form.category.trim();
    if category.is_empty() {
        return Err(ValidationError::CategoryMissing);
    }
    if !REQUEST_CATEGORIES.contains(&category) {
        return Err(ValidationError::UnknownCategory(category.to_string()));
    }

    let urgency = form.urgency.trim();
    let urgency_level = if urgency.is_empty() {
        UrgencyLevel::default()
    } else {
        urgency
            .parse::<UrgencyLevel>()
            .map_err(|_| ValidationError::InvalidUrgency(urgency.to_string()))?
    };

    let meeting = form.meeting.trim();
    let preferred_meeting_type = if meeting.is_empty() {
        None
    } else {
        Some(
            meeting
                .parse::<MeetingType>()
                .map_err(|_| ValidationError::InvalidMeeting(meeting.to_string()))?,
        )
    };

    if form.budget_min.is_some_and(|v| v < 0.0) || form.budget_max.is_some_and(|v| v < 0.0) {
        return Err(ValidationError::NegativeBudget);
    }
    if let (Some(min), Some(max)) = (form.budget_min, form.budget_max) {
        if min > max {
            return Err(ValidationError::BudgetRangeInverted);
        }
    }

    let location = form.location.trim();
    if location.len() > LOCATION_MAX {
        return Err(ValidationError::LocationTooLong);
    }
    let notes = form.notes.trim();
    if notes.len() > NOTES_MAX {
        return Err(ValidationError::NotesTooLong);
    }

    Ok(ConsultationRequest {
        lawyer_id: lawyer_id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        urgency_level,
        preferred_meeting_type,
        budget_min: form.budget_min,
        budget_max: form.budget_max,
        location: (!location.is_empty()).then(|| location.to_string()),
        additional_notes: (!notes.is_empty()).then(|| notes.to_string()),
    })
}

/// Terminal user-facing outcome of an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success { message: String },
    Info { message: String },
    Error { message: String },
}

/// Outcome of the full send-request flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowOutcome {
    /// Gate refused: the shell should redirect to login.
    LoginRequired { redirect: String },
    /// Flow ran to completion; surface the notification.
    Done(Notification),
}

/// Send a consultation request to one lawyer.
///
/// Client gate first (nothing is mutated before it), then validation,
/// then the single submission call. API rejection surfaces the server's
/// detail string; transport failures surface a generic retry message.
pub fn send_request_flow(
    session: &SessionContext,
    lawyer_id: u32,
    form: &ConsultationForm,
    api: &dyn LegalBoardApi,
) -> FlowOutcome {
    let gate = session::require_client(session);
    if !gate.allowed {
        tracing::debug!(lawyer_id, reason = ?gate.reason, "Request flow gated");
        return FlowOutcome::LoginRequired {
            redirect: gate
                .redirect
                .unwrap_or_else(|| config::CLIENT_LOGIN_PAGE.to_string()),
        };
    }
    let Some(token) = session.token() else {
        // Unreachable past the gate, but stay total.
        return FlowOutcome::LoginRequired {
            redirect: config::CLIENT_LOGIN_PAGE.to_string(),
        };
    };

    let request = match validate_form(lawyer_id, form) {
        Ok(request) => request,
        Err(e) => {
            return FlowOutcome::Done(Notification::Error {
                message: e.to_string(),
            })
        }
    };

    match api.submit_request(token, &request) {
        Ok(receipt) => {
            tracing::info!(lawyer_id, receipt_id = ?receipt.id, "Consultation request submitted");
            FlowOutcome::Done(Notification::Success {
                message: "Request sent successfully! The lawyer will be notified.".to_string(),
            })
        }
        Err(ApiClientError::Rejected { status, detail }) => {
            tracing::warn!(lawyer_id, status, "Consultation request rejected");
            FlowOutcome::Done(Notification::Error {
                message: format!("Error: {detail}"),
            })
        }
        Err(e) => {
            tracing::warn!(lawyer_id, error = %e, "Consultation request failed to send");
            FlowOutcome::Done(Notification::Error {
                message: "Error sending request. Please try again.".to_string(),
            })
        }
    }
}

/// Placeholder profile action until a profile page exists.
pub fn view_profile(lawyer_id: u32) -> Notification {
    Notification::Info {
        message: format!(
            "View profile for lawyer ID: {lawyer_id} - This would open a detailed profile page"
        ),
    }
}
