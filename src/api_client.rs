//! HTTP client for the external directory APIs.
//!
//! Two outbound calls, both bearer-token POSTs: consultation-request
//! submission (status surfaced to the user) and logout (best-effort).
//! Flows depend on the `LegalBoardApi` trait so tests run against the
//! mock instead of the network.

use serde::Deserialize;

use crate::config;
use crate::models::{ConsultationRequest, RequestStatus};

/// Default request timeout. The page this replaces had none; a dead API
/// must not hang the submission flow forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from the outbound API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("Cannot reach {0}")]
    Connection(String),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("HTTP transport error: {0}")]
    Transport(String),
    #[error("Request rejected ({status}): {detail}")]
    Rejected { status: u16, detail: String },
    #[error("Failed to parse API response: {0}")]
    ResponseParsing(String),
}

/// Receipt for an accepted request. The page only needs to know the
/// submission landed, so every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitReceipt {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
}

/// Error body shape of the request API ({"detail": "..."}).
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Seam over the external directory APIs.
pub trait LegalBoardApi {
    /// POST a consultation request on behalf of the token's owner.
    fn submit_request(
        &self,
        token: &str,
        request: &ConsultationRequest,
    ) -> Result<SubmitReceipt, ApiClientError>;

    /// POST a logout for the token. Callers treat failure as non-fatal.
    fn logout(&self, token: &str) -> Result<(), ApiClientError>;
}

/// Blocking HTTP implementation of [`LegalBoardApi`].
pub struct HttpLegalBoardApi {
    requests_url: String,
    logout_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpLegalBoardApi {
    /// Create a client against explicit endpoint URLs.
    pub fn new(requests_url: &str, logout_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            requests_url: requests_url.to_string(),
            logout_url: logout_url.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Client against the configured endpoints with the default timeout.
    pub fn default_endpoints() -> Self {
        Self::new(
            &config::requests_endpoint(),
            &config::logout_endpoint(),
            DEFAULT_TIMEOUT_SECS,
        )
    }

    fn map_send_error(&self, endpoint: &str, e: reqwest::Error) -> ApiClientError {
        if e.is_connect() {
            ApiClientError::Connection(endpoint.to_string())
        } else if e.is_timeout() {
            ApiClientError::Timeout(self.timeout_secs)
        } else {
            ApiClientError::Transport(e.to_string())
        }
    }
}

impl LegalBoardApi for HttpLegalBoardApi {
    fn submit_request(
        &self,
        token: &str,
        request: &ConsultationRequest,
    ) -> Result<SubmitReceipt, ApiClientError> {
        let response = self
            .client
            .post(&self.requests_url)
            .bearer_auth(token)
            .json(request)
            .send()
            .map_err(|e| self.map_send_error(&self.requests_url, e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|body| body.detail)
                .unwrap_or_else(|| "Failed to send request".to_string());
            return Err(ApiClientError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        // Success bodies only need to exist; parse what we recognize.
        let value: serde_json::Value = response
            .json()
            .map_err(|e| ApiClientError::ResponseParsing(e.to_string()))?;
        Ok(serde_json::from_value(value).unwrap_or_default())
    }

    fn logout(&self, token: &str) -> Result<(), ApiClientError> {
        let response = self
            .client
            .post(&self.logout_url)
            .bearer_auth(token)
            .send()
            .map_err(|e| self.map_send_error(&self.logout_url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiClientError::Rejected {
                status: status.as_u16(),
                detail: "Logout failed".to_string(),
            });
        }
        Ok(())
    }
}

/// Mock API for tests — records calls, returns a configurable result.
pub struct MockLegalBoardApi {
    reject_with: Option<(u16, String)>,
    connection_down: bool,
    logout_fails: bool,
    submitted: std::cell::RefCell<Vec<ConsultationRequest>>,
    logout_tokens: std::cell::RefCell<Vec<String>>,
}

impl MockLegalBoardApi {
    /// Mock that accepts everything.
    pub fn accepting() -> Self {
        Self {
            reject_with: None,
            connection_down: false,
            logout_fails: false,
            submitted: std::cell::RefCell::new(Vec::new()),
            logout_tokens: std::cell::RefCell::new(Vec::new()),
        }
    }

    /// Mock whose submissions are rejected with the given status and detail.
    pub fn rejecting(status: u16, detail: &str) -> Self {
        Self {
            reject_with: Some((status, detail.to_string())),
            ..Self::accepting()
        }
    }

    /// Mock that behaves as if the API host is down.
    pub fn unreachable() -> Self {
        Self {
            connection_down: true,
            ..Self::accepting()
        }
    }

    pub fn with_failing_logout(mut self) -> Self {
        self.logout_fails = true;
        self
    }

    /// Requests that reached the mock.
    pub fn submitted(&self) -> Vec<ConsultationRequest> {
        self.submitted.borrow().clone()
    }

    /// Tokens logout was called with.
    pub fn logout_tokens(&self) -> Vec<String> {
        self.logout_tokens.borrow().clone()
    }
}

impl LegalBoardApi for MockLegalBoardApi {
    fn submit_request(
        &self,
        _token: &str,
        request: &ConsultationRequest,
    ) -> Result<SubmitReceipt, ApiClientError> {
        if self.connection_down {
            return Err(ApiClientError::Connection("mock://requests".to_string()));
        }
        if let Some((status, detail)) = &self.reject_with {
            return Err(ApiClientError::Rejected {
                status: *status,
                detail: detail.clone(),
            });
        }
        self.submitted.borrow_mut().push(request.clone());
        Ok(SubmitReceipt {
            id: Some("mock-request".to_string()),
            status: Some(RequestStatus::Pending),
        })
    }

    fn logout(&self, token: &str) -> Result<(), ApiClientError> {
        self.logout_tokens.borrow_mut().push(token.to_string());
        if self.connection_down {
            return Err(ApiClientError::Connection("mock://logout".to_string()));
        }
        if self.logout_fails {
            return Err(ApiClientError::Rejected {
                status: 500,
                detail: "Logout failed".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrgencyLevel;

    fn sample_request() -> ConsultationRequest {
        ConsultationRequest {
            lawyer_id: "1".to_string(),
            title: "Property dispute".to_string(),
            description: "Boundary disagreement with a neighbor.".to_string(),
            category: "Property Law".to_string(),
            urgency_level: UrgencyLevel::Medium,
            preferred_meeting_type: None,
            budget_min: None,
            budget_max: None,
            location: None,
            additional_notes: None,
        }
    }

    #[test]
    fn receipt_parses_leniently() {
        let receipt: SubmitReceipt =
            serde_json::from_value(serde_json::json!({"id": "abc", "status": "pending"})).unwrap();
        assert_eq!(receipt.id.as_deref(), Some("abc"));
        assert_eq!(receipt.status, Some(RequestStatus::Pending));

        // Unknown shape still counts as a receipt.
        let receipt: SubmitReceipt =
            serde_json::from_value(serde_json::json!({"ok": true})).unwrap_or_default();
        assert!(receipt.id.is_none());
        assert!(receipt.status.is_none());
    }

    #[test]
    fn mock_records_accepted_submission() {
        let api = MockLegalBoardApi::accepting();
        let receipt = api.submit_request("token", &sample_request()).unwrap();
        assert!(receipt.id.is_some());
        assert_eq!(api.submitted().len(), 1);
        assert_eq!(api.submitted()[0].category, "Property Law");
    }

    #[test]
    fn mock_rejection_carries_status_and_detail() {
        let api = MockLegalBoardApi::rejecting(422, "description too short");
        let err = api.submit_request("token", &sample_request()).unwrap_err();
        match err {
            ApiClientError::Rejected { status, detail } => {
                assert_eq!(status, 422);
                assert_eq!(detail, "description too short");
            }
            other => panic!("Expected Rejected, got: {other}"),
        }
        assert!(api.submitted().is_empty());
    }

    #[test]
    fn mock_unreachable_maps_to_connection_error() {
        let api = MockLegalBoardApi::unreachable();
        let err = api.submit_request("token", &sample_request()).unwrap_err();
        assert!(matches!(err, ApiClientError::Connection(_)));
    }

    #[test]
    fn mock_logout_records_token_even_on_failure() {
        let api = MockLegalBoardApi::accepting().with_failing_logout();
        let result = api.logout("tok-123");
        assert!(result.is_err());
        assert_eq!(api.logout_tokens(), vec!["tok-123".to_string()]);
    }

    #[test]
    fn http_client_builds_against_configured_endpoints() {
        let api = HttpLegalBoardApi::default_endpoints();
        assert_eq!(api.requests_url, "http://localhost:8001/api/requests/");
        assert_eq!(api.logout_url, "http://localhost:8000/api/auth/logout");
        assert_eq!(api.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
