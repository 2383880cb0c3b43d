//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

use std::time::Duration;

pub const PANIC_ON_RARE_ERR: bool = true;

pub mod client {
    use super::*;

    /// Applied by the transport to every request sent through the gateway
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Single logical key the session record is stored under in both scopes
    pub const SESSION_STORAGE_KEY: &str = "baholash_auth";

    /// Maximum number of guard redirects followed for one navigation
    pub const MAX_NAVIGATION_REDIRECTS: usize = 5;
}

/// User facing messages the gateway substitutes for failures
pub mod message {
    pub const MESSAGE_TIMEOUT: &str =
        "The server is not responding. Check that the backend is running.";
    pub const MESSAGE_NO_CONNECTION: &str =
        "No connection to the server. Start the backend and refresh the page.";
    pub const MESSAGE_SESSION_EXPIRED: &str = "Session expired. Please sign in again.";
    pub const MESSAGE_NOT_AUTHENTICATED: &str = "Not authenticated. Please sign in.";
    pub const MESSAGE_ACCESS_DENIED: &str = "Access denied. Insufficient permissions.";
    pub const MESSAGE_SERVER_ERROR: &str = "Server error. Please try again later.";
}

/// Client side routes referenced outside of the route table
pub mod route {
    pub const ROUTE_LOGIN: &str = "/login";
    pub const ROUTE_ADMIN_HOME: &str = "/admin";
    pub const ROUTE_CLIENT_HOME: &str = "/client";
    pub const ROUTE_COMPANY_HOME: &str = "/company";
    /// Query parameter carrying the path to return to after login
    pub const ROUTE_REDIRECT_PARAM: &str = "redirect";
}

pub mod path {
    mod path_spec;
    pub use path_spec::{ApiPath, PathSpec};

    pub const PATH_API_PREFIX: &str = "/api";

    pub const PATH_AUTH_LOGIN: PathSpec = PathSpec::post("/api/auth/login");

    pub const PATH_CONTACT: PathSpec = PathSpec::post("/api/contact");
    pub const PATH_ADMIN_CONTACT_REQUESTS: PathSpec = PathSpec::get("/api/admin/contact-requests");
    pub const PATH_ADMIN_CONTACT_REQUESTS_DELETE_ALL: PathSpec =
        PathSpec::delete("/api/admin/contact-requests");
    pub const PATH_ADMIN_CONTACT_REQUEST_DELETE: PathSpec =
        PathSpec::delete("/api/admin/contact-requests/{id}");

    pub const PATH_EVALUATION_REQUESTS: PathSpec = PathSpec::get("/api/evaluation-requests");
    pub const PATH_EVALUATION_REQUEST_CREATE: PathSpec = PathSpec::post("/api/evaluation-requests");
    pub const PATH_EVALUATION_REQUEST_CREATE_WITH_DOCUMENT: PathSpec =
        PathSpec::post("/api/evaluation-requests/with-document");
    pub const PATH_EVALUATION_REQUESTS_MY: PathSpec = PathSpec::get("/api/evaluation-requests/my");
    pub const PATH_EVALUATION_REQUESTS_EXPORT: PathSpec =
        PathSpec::get("/api/evaluation-requests/export");
    pub const PATH_EVALUATION_REQUEST_STATUSES: PathSpec =
        PathSpec::get("/api/evaluation-requests/statuses");
    pub const PATH_EVALUATION_REQUEST: PathSpec = PathSpec::get("/api/evaluation-requests/{id}");
    pub const PATH_EVALUATION_REQUEST_UPDATE: PathSpec =
        PathSpec::put("/api/evaluation-requests/{id}");
    pub const PATH_EVALUATION_REQUEST_DELETE: PathSpec =
        PathSpec::delete("/api/evaluation-requests/{id}");
    pub const PATH_EVALUATION_REQUEST_DOCUMENTS: PathSpec =
        PathSpec::post("/api/evaluation-requests/{id}/documents");
    pub const PATH_EVALUATION_REQUEST_REPORT: PathSpec =
        PathSpec::post("/api/evaluation-requests/{id}/report");
    pub const PATH_EVALUATION_REQUEST_REPORT_DELETE: PathSpec =
        PathSpec::delete("/api/evaluation-requests/{id}/report");
    pub const PATH_EVALUATION_REQUEST_REPORT_DOWNLOAD: PathSpec =
        PathSpec::get("/api/evaluation-requests/{id}/report/download");
    pub const PATH_EVALUATION_REQUEST_REPORT_QR: PathSpec =
        PathSpec::get("/api/evaluation-requests/{id}/report-qr");
    pub const PATH_EVALUATION_REQUEST_CONFIRM_COMPLETION: PathSpec =
        PathSpec::post("/api/evaluation-requests/{id}/confirm-completion");
    pub const PATH_EVALUATION_REQUEST_EXPORT_WORD: PathSpec =
        PathSpec::get("/api/evaluation-requests/{id}/export-word");
    pub const PATH_EVALUATION_DOCUMENT_DOWNLOAD: PathSpec =
        PathSpec::get("/api/evaluation-requests/documents/{id}/download");

    pub const PATH_USERS: PathSpec = PathSpec::get("/api/users");
    pub const PATH_USER_CREATE: PathSpec = PathSpec::post("/api/users");
    pub const PATH_USER_UPDATE: PathSpec = PathSpec::put("/api/users/{id}");
    pub const PATH_USER_DELETE: PathSpec = PathSpec::delete("/api/users/{id}");

    /// Resource families that only exist for an authenticated session. A 401 or
    /// 403 from any path under one of these means the session is no longer
    /// valid. A prefix ending in `/` does not cover the bare collection path
    pub const PROTECTED_PATH_PREFIXES: &[&str] = &[
        "/api/evaluation-requests/",
        "/api/users",
        "/api/admin/contact-requests",
    ];

    /// Returns true if `path` belongs to one of the [`PROTECTED_PATH_PREFIXES`]
    ///
    /// Prefixes only match on whole path segments and any query string is
    /// ignored, so `/api/users/7?x=1` is protected but `/api/users-public` is
    /// not. `/api/evaluation-requests` itself (create and list all) is not
    pub fn is_protected_endpoint(path: &str) -> bool {
        let path = path.split_once('?').map_or(path, |(path, _query)| path);
        PROTECTED_PATH_PREFIXES.iter().any(|prefix| {
            path.strip_prefix(prefix).is_some_and(|rest| {
                prefix.ends_with('/') || rest.is_empty() || rest.starts_with('/')
            })
        })
    }
}
