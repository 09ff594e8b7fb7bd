//! Session context and page gating.
//!
//! The login flags the page used to read ambiently, reified as an explicit
//! value threaded into every gated operation. Gates never side-effect:
//! they return an [`GateDecision`] the shell acts on (follow the redirect,
//! remember the resume page, or proceed).

use crate::api_client::LegalBoardApi;
use crate::config;
use crate::models::UserRole;

/// Client-side session state: a token and the role it was issued for.
///
/// Written by the external login flow; this core only reads and clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    token: Option<String>,
    role: Option<UserRole>,
}

impl SessionContext {
    /// A session with no credentials.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A logged-in session.
    pub fn logged_in(token: impl Into<String>, role: UserRole) -> Self {
        Self {
            token: Some(token.into()),
            role: Some(role),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Drop all credentials.
    pub fn clear(&mut self) {
        self.token = None;
        self.role = None;
    }
}

/// Why a gate allowed or refused an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateReason {
    LoggedIn,
    NotLoggedIn,
    WrongRole,
}

/// Result of a gating check.
///
/// `redirect` is where the shell should send the user when refused;
/// `resume` is the page to return to after a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct GateDecision {
    pub allowed: bool,
    pub redirect: Option<String>,
    pub resume: Option<String>,
    pub reason: GateReason,
}

impl GateDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            redirect: None,
            resume: None,
            reason: GateReason::LoggedIn,
        }
    }

    fn deny(reason: GateReason, resume: Option<String>) -> Self {
        Self {
            allowed: false,
            redirect: Some(config::CLIENT_LOGIN_PAGE.to_string()),
            resume,
            reason,
        }
    }
}

/// Gate a protected page behind login, remembering the intended target.
pub fn require_login(session: &SessionContext, target: &str) -> GateDecision {
    if session.is_logged_in() {
        GateDecision::allow()
    } else {
        tracing::debug!(page = target, "Login required");
        GateDecision::deny(GateReason::NotLoggedIn, Some(target.to_string()))
    }
}

/// Gate the request flow: must hold a client-role token.
pub fn require_client(session: &SessionContext) -> GateDecision {
    if !session.is_logged_in() {
        return GateDecision::deny(GateReason::NotLoggedIn, None);
    }
    if session.role() != Some(UserRole::Client) {
        tracing::debug!(role = ?session.role(), "Client role required");
        return GateDecision::deny(GateReason::WrongRole, None);
    }
    GateDecision::allow()
}

/// End the session: best-effort logout call, then clear the context.
///
/// The API failure is logged and never surfaced; the context is cleared
/// either way. Returns the page to land on afterwards.
pub fn logout(session: &mut SessionContext, api: &dyn LegalBoardApi) -> &'static str {
    if let Some(token) = session.token() {
        if let Err(e) = api.logout(token) {
            tracing::warn!(error = %e, "Logout API call failed");
        }
    }
    session.clear();
    config::HOME_PAGE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::MockLegalBoardApi;

    fn client_session() -> SessionContext {
        SessionContext::logged_in("tok-client", UserRole::Client)
    }

    // ── require_login ────────────────────────────────────

    #[test]
    fn logged_in_session_passes_login_gate() {
        let decision = require_login(&client_session(), "lawyers.html");
        assert!(decision.allowed);
        assert!(decision.redirect.is_none());
        assert!(decision.resume.is_none());
        assert_eq!(decision.reason, GateReason::LoggedIn);
    }

    #[test]
    fn anonymous_session_is_redirected_with_resume_target() {
        let decision = require_login(&SessionContext::anonymous(), "terms.html");
        assert!(!decision.allowed);
        assert_eq!(decision.redirect.as_deref(), Some("client-login.html"));
        assert_eq!(decision.resume.as_deref(), Some("terms.html"));
        assert_eq!(decision.reason, GateReason::NotLoggedIn);
    }

    #[test]
    fn any_role_passes_plain_login_gate() {
        let lawyer = SessionContext::logged_in("tok-lawyer", UserRole::Lawyer);
        assert!(require_login(&lawyer, "lawyers.html").allowed);
    }

    // ── require_client ───────────────────────────────────

    #[test]
    fn client_passes_client_gate() {
        assert!(require_client(&client_session()).allowed);
    }

    #[test]
    fn anonymous_fails_client_gate() {
        let decision = require_client(&SessionContext::anonymous());
        assert!(!decision.allowed);
        assert_eq!(decision.reason, GateReason::NotLoggedIn);
        assert_eq!(decision.redirect.as_deref(), Some("client-login.html"));
    }

    #[test]
    fn lawyer_fails_client_gate_with_wrong_role() {
        let lawyer = SessionContext::logged_in("tok-lawyer", UserRole::Lawyer);
        let decision = require_client(&lawyer);
        assert!(!decision.allowed);
        assert_eq!(decision.reason, GateReason::WrongRole);
    }

    #[test]
    fn token_without_role_fails_client_gate() {
        let mut stripped = SessionContext::logged_in("tok", UserRole::Client);
        stripped.role = None;
        let decision = require_client(&stripped);
        assert!(!decision.allowed);
        assert_eq!(decision.reason, GateReason::WrongRole);
    }

    // ── logout ───────────────────────────────────────────

    #[test]
    fn logout_calls_api_with_token_then_clears() {
        let api = MockLegalBoardApi::accepting();
        let mut session = client_session();

        let landing = logout(&mut session, &api);

        assert_eq!(landing, "index.html");
        assert!(!session.is_logged_in());
        assert!(session.role().is_none());
        assert_eq!(api.logout_tokens(), vec!["tok-client".to_string()]);
    }

    #[test]
    fn logout_clears_session_even_when_api_fails() {
        let api = MockLegalBoardApi::accepting().with_failing_logout();
        let mut session = client_session();

        let landing = logout(&mut session, &api);

        assert_eq!(landing, "index.html");
        assert!(!session.is_logged_in());
        assert_eq!(api.logout_tokens().len(), 1, "Call was still attempted");
    }

    #[test]
    fn anonymous_logout_skips_the_api_call() {
        let api = MockLegalBoardApi::accepting();
        let mut session = SessionContext::anonymous();

        logout(&mut session, &api);

        assert!(api.logout_tokens().is_empty());
    }
}
