/// Application-level constants
pub const APP_NAME: &str = "LexList";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base URL of the request-submission API.
pub const REQUEST_API_BASE: &str = "http://localhost:8001";
/// Base URL of the auth API (logout).
pub const AUTH_API_BASE: &str = "http://localhost:8000";

pub const REQUESTS_PATH: &str = "/api/requests/";
pub const LOGOUT_PATH: &str = "/api/auth/logout";

// Page locations that gating and navigation decisions point at.
pub const HOME_PAGE: &str = "index.html";
pub const LISTING_PAGE: &str = "lawyers.html";
pub const CLIENT_LOGIN_PAGE: &str = "client-login.html";
pub const CLIENT_DASHBOARD_PAGE: &str = "client-dashboard.html";
pub const LAWYER_DASHBOARD_PAGE: &str = "lawyer-dashboard.html";

/// Full URL of the request-submission endpoint.
pub fn requests_endpoint() -> String {
    format!("{REQUEST_API_BASE}{REQUESTS_PATH}")
}

/// Full URL of the logout endpoint.
pub fn logout_endpoint() -> String {
    format!("{AUTH_API_BASE}{LOGOUT_PATH}")
}

/// Listing page location with a category pre-selected, query-encoded.
pub fn listing_url(category: &str) -> String {
    let query: String = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("category", category)
        .finish();
    format!("{LISTING_PAGE}?{query}")
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> &'static str {
    "info"
}
