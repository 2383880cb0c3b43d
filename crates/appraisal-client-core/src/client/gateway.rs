//! Inbound stage of the request pipeline

use appraisal_shared::{
    const_config::{
        message::{MESSAGE_ACCESS_DENIED, MESSAGE_NOT_AUTHENTICATED, MESSAGE_SERVER_ERROR},
        path::is_protected_endpoint,
    },
    errors::{GatewayError, TransportFailure},
};
use reqwest::StatusCode;
use tracing::{info, instrument, warn};

use crate::routing::login_location;

use super::Client;

/// How a non-success response is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// 401 or 403 from an endpoint that needs a session. The stored session is
    /// dropped and the login view shown
    SessionInvalidated,
    /// 401 from anywhere else
    NotAuthenticated,
    /// 403 from anywhere else
    AccessDenied,
    ServerError,
    Other,
}

pub fn classify_status(status: StatusCode, path: &str) -> FailureClass {
    let is_auth_failure = status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN;
    if is_auth_failure && is_protected_endpoint(path) {
        return FailureClass::SessionInvalidated;
    }
    match status {
        StatusCode::UNAUTHORIZED => FailureClass::NotAuthenticated,
        StatusCode::FORBIDDEN => FailureClass::AccessDenied,
        status if status.is_server_error() => FailureClass::ServerError,
        _ => FailureClass::Other,
    }
}

/// `None` means the error is not one the user can act on and is passed on as
/// is
fn classify_transport(err: &reqwest::Error) -> Option<TransportFailure> {
    if err.is_timeout() {
        Some(TransportFailure::Timeout)
    } else if err.is_request() {
        Some(TransportFailure::NoConnection)
    } else {
        None
    }
}

impl Client {
    /// Success passes through untouched. Every failure is turned into a
    /// [`GatewayError`] after any side effect it calls for has been applied
    pub(super) async fn inbound(
        &self,
        path: &str,
        response: reqwest::Result<reqwest::Response>,
    ) -> Result<reqwest::Response, GatewayError> {
        let response = match response {
            Ok(response) => response,
            Err(err) => return Err(self.on_transport_failure(err)),
        };
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(?e, "failed to read body of failed response");
                String::new()
            }
        };
        Err(self.on_status_failure(path, status, body))
    }

    fn on_transport_failure(&self, err: reqwest::Error) -> GatewayError {
        match classify_transport(&err) {
            Some(failure) => {
                info!(?failure, ?err, "request did not reach the server");
                GatewayError::Transport {
                    failure,
                    source: err,
                }
            }
            None => GatewayError::Request(err),
        }
    }

    /// Runs synchronously so the store is already empty when the caller sees
    /// the error
    #[instrument(skip(self, body))]
    pub(super) fn on_status_failure(
        &self,
        path: &str,
        status: StatusCode,
        body: String,
    ) -> GatewayError {
        let message = match classify_status(status, path) {
            FailureClass::SessionInvalidated => {
                self.invalidate_session();
                return GatewayError::SessionExpired { status };
            }
            FailureClass::NotAuthenticated => MESSAGE_NOT_AUTHENTICATED.to_string(),
            FailureClass::AccessDenied => MESSAGE_ACCESS_DENIED.to_string(),
            FailureClass::ServerError if body.is_empty() => MESSAGE_SERVER_ERROR.to_string(),
            FailureClass::Other if body.is_empty() => {
                format!("request failed with status code: {status} and no body")
            }
            FailureClass::ServerError | FailureClass::Other => body.clone(),
        };
        GatewayError::Status {
            status,
            message,
            body,
        }
    }

    fn invalidate_session(&self) {
        let current_path = self.navigator.current_path();
        let location = login_location(Some(&current_path));
        warn!(current_path, location, "server rejected the session");
        self.session_store.clear();
        self.navigator.navigate(&location);
    }
}
