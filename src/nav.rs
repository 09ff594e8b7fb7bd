//! Navigation planning for the page shell.
//!
//! Derives header state from the session, gates clicks on protected
//! links, and plans the home-page category search. Everything here is a
//! pure decision value; the shell performs the actual navigation.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::models::UserRole;
use crate::session::{self, GateDecision, SessionContext};

/// What the header's account link should show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationView {
    pub account_label: String,
    pub account_target: String,
    pub show_logout: bool,
}

/// Header state for the current session: dashboard link per role, logout
/// action only when logged in.
pub fn navigation_view(session: &SessionContext) -> NavigationView {
    if !session.is_logged_in() {
        return NavigationView {
            account_label: "Login".to_string(),
            account_target: config::CLIENT_LOGIN_PAGE.to_string(),
            show_logout: false,
        };
    }

    match session.role() {
        Some(UserRole::Lawyer) => NavigationView {
            account_label: "Lawyer Dashboard".to_string(),
            account_target: config::LAWYER_DASHBOARD_PAGE.to_string(),
            show_logout: true,
        },
        // A token without a role is treated as a client session; the
        // client flow is the default entry point.
        _ => NavigationView {
            account_label: "Client Dashboard".to_string(),
            account_target: config::CLIENT_DASHBOARD_PAGE.to_string(),
            show_logout: true,
        },
    }
}

/// Gate a click on a login-protected link.
pub fn protected_link(session: &SessionContext, target: &str) -> GateDecision {
    session::require_login(session, target)
}

/// Outcome of the home-page category search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Not logged in — go to login first, resume at the listing.
    LoginRequired(GateDecision),
    /// No category chosen; the form should show a selection error.
    MissingCategory,
    /// Navigate to the listing with the category pre-selected.
    Listing { url: String },
}

/// Plan the home-page search: gated, category required, then a redirect
/// to the listing page with the category in the query string.
pub fn plan_search(session: &SessionContext, category: &str) -> SearchOutcome {
    let gate = session::require_login(session, config::LISTING_PAGE);
    if !gate.allowed {
        return SearchOutcome::LoginRequired(gate);
    }

    let category = category.trim();
    if category.is_empty() {
        return SearchOutcome::MissingCategory;
    }

    tracing::debug!(category, "Searching listing by category");
    SearchOutcome::Listing {
        url: config::listing_url(category),
    }
}
