pub mod enums;
pub mod filters;
pub mod lawyer;
pub mod request;

pub use enums::{MeetingType, RequestStatus, UrgencyLevel, UserRole};
pub use filters::LawyerFilter;
pub use lawyer::{Education, Lawyer};
pub use request::{ConsultationForm, ConsultationRequest};

/// Errors from model-level parsing.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid value '{value}' for {field}")]
    InvalidEnum { field: String, value: String },
}
