use appraisal_shared::{
    const_config::message::{MESSAGE_NO_CONNECTION, MESSAGE_SERVER_ERROR, MESSAGE_TIMEOUT},
    errors::{GatewayError, TransportFailure},
    req_args::api::{PageArgs, UserListFilter},
    session::Session,
    uac::RoleId,
};
use serde_json::{json, Value};

use std::time::Duration;

use crate::helpers::{
    no_cb, spawn_app, spawn_app_with_timeout, spawn_app_without_server, SLOW_RESPONSE_DELAY,
};

#[tokio::test]
async fn bearer_token_is_attached_when_logged_in() {
    // Arrange
    let app = spawn_app().await;
    app.store_session("abc", RoleId::CompanyEmployee);

    // Act
    let actual: Value = app
        .core_client
        .evaluation_request(5, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(actual, json!({ "authorization": "Bearer abc" }));
}

#[tokio::test]
async fn no_authorization_header_without_session() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let actual = app
        .core_client
        .evaluation_request(5, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(actual, json!({ "authorization": null }));
}

#[tokio::test]
async fn cleared_session_is_not_sent() {
    // Arrange
    let app = spawn_app().await;
    app.store_session("abc", RoleId::CompanyEmployee);
    app.core_client.logout();

    // Act
    let actual = app
        .core_client
        .evaluation_request(5, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(actual["authorization"], Value::Null);
}

#[tokio::test]
async fn server_error_without_body_gets_fallback_message() {
    // Arrange
    let app = spawn_app().await;
    let session = app.store_session("abc", RoleId::CompanyEmployee);

    // Act
    let actual = app
        .core_client
        .evaluation_request_statuses(no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(actual.to_string(), MESSAGE_SERVER_ERROR);
    assert_eq!(app.session_store().read(), session);
}

#[tokio::test]
async fn server_error_message_from_backend_is_kept() {
    // Arrange
    let app = spawn_app().await;
    let session = app.store_session("abc", RoleId::Admin);
    let filter = UserListFilter {
        paging: PageArgs { page: 1, size: 5 },
        ..Default::default()
    };

    // Act
    let actual = app
        .core_client
        .list_users(&filter, no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(actual.to_string(), "database unavailable");
    match actual.downcast_ref::<GatewayError>().unwrap() {
        GatewayError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(body, "database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(app.session_store().read(), session);
}

#[tokio::test]
async fn unreachable_backend_reports_no_connection() {
    // Arrange
    let app = spawn_app_without_server();
    let session = app.store_session("abc", RoleId::ClientEmployee);

    // Act
    let actual = app
        .core_client
        .evaluation_request_statuses(no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(actual.to_string(), MESSAGE_NO_CONNECTION);
    assert!(matches!(
        actual.downcast_ref::<GatewayError>().unwrap(),
        GatewayError::Transport {
            failure: TransportFailure::NoConnection,
            ..
        }
    ));
    assert_ne!(app.session_store().read(), Session::empty());
    assert_eq!(app.session_store().read(), session);
}

#[tokio::test]
async fn slow_backend_reports_timeout() {
    // Arrange
    let timeout = Duration::from_millis(200);
    assert!(timeout < SLOW_RESPONSE_DELAY);
    let app = spawn_app_with_timeout(timeout).await;
    let session = app.store_session("abc", RoleId::Admin);

    // Act
    let actual = app
        .core_client
        .list_contact_requests(PageArgs::default(), no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(actual.to_string(), MESSAGE_TIMEOUT);
    assert_ne!(actual.to_string(), MESSAGE_NO_CONNECTION);
    assert!(matches!(
        actual.downcast_ref::<GatewayError>().unwrap(),
        GatewayError::Transport {
            failure: TransportFailure::Timeout,
            ..
        }
    ));
    assert_eq!(app.session_store().read(), session);
}
