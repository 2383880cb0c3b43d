use appraisal_client_core::routing::NavigationOutcome;
use appraisal_shared::{
    const_config::message::{MESSAGE_ACCESS_DENIED, MESSAGE_SESSION_EXPIRED},
    errors::GatewayError,
    req_args::api::{ContactReqArgs, MyEvaluationRequestsFilter},
    session::Session,
    uac::RoleId,
};

use crate::helpers::{no_cb, spawn_app};

fn contact_args() -> ContactReqArgs {
    ContactReqArgs {
        name: "Guest".into(),
        email: "guest@example.com".into(),
        message: "Hello".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn expired_session_is_cleared_and_login_requested() {
    // Arrange
    let app = spawn_app().await;
    app.store_session("abc", RoleId::ClientEmployee);
    assert!(matches!(
        app.router.push("/client").unwrap(),
        NavigationOutcome::Arrived { route: "client-home", .. }
    ));

    // Act
    let actual = app
        .core_client
        .my_evaluation_requests(&MyEvaluationRequestsFilter::default(), no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(actual.to_string(), MESSAGE_SESSION_EXPIRED);
    assert!(actual
        .downcast_ref::<GatewayError>()
        .unwrap()
        .is_session_expired());
    assert_eq!(app.session_store().read(), Session::empty());
    assert_eq!(app.router.location(), "/login?redirect=%2Fclient");
    assert_eq!(
        app.router.history(),
        vec!["/", "/client", "/login?redirect=%2Fclient"]
    );
}

#[tokio::test]
async fn concurrent_rejections_navigate_to_login_once() {
    // Arrange
    let app = spawn_app().await;
    app.store_session("abc", RoleId::ClientEmployee);
    app.router.push("/client/requests").unwrap();
    let filter = MyEvaluationRequestsFilter::default();

    // Act
    let (first, second, third) = futures::join!(
        app.core_client.my_evaluation_requests(&filter, no_cb),
        app.core_client.my_evaluation_requests(&filter, no_cb),
        app.core_client.my_evaluation_requests(&filter, no_cb),
    );

    // Assert
    for result in [first, second, third] {
        assert_eq!(result.unwrap().unwrap_err().to_string(), MESSAGE_SESSION_EXPIRED);
    }
    assert_eq!(app.session_store().read(), Session::empty());
    assert_eq!(
        app.router.history(),
        vec![
            "/",
            "/client/requests",
            "/login?redirect=%2Fclient%2Frequests"
        ]
    );
}

#[tokio::test]
async fn anonymous_forbidden_on_public_endpoint() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let actual = app
        .core_client
        .submit_contact(contact_args(), no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(actual.to_string(), MESSAGE_ACCESS_DENIED);
    assert_eq!(app.session_store().read(), Session::empty());
    assert_eq!(app.router.history(), vec!["/"]);
}

#[tokio::test]
async fn forbidden_on_public_endpoint_keeps_valid_session() {
    // Arrange
    let app = spawn_app().await;
    let session = app.store_session("abc", RoleId::CompanyEmployee);

    // Act
    let actual = app
        .core_client
        .submit_contact(contact_args(), no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(actual.to_string(), MESSAGE_ACCESS_DENIED);
    assert_eq!(
        actual.downcast_ref::<GatewayError>().unwrap().status(),
        Some(reqwest::StatusCode::FORBIDDEN)
    );
    assert_eq!(app.session_store().read(), session);
}

#[tokio::test]
async fn guard_sees_invalidation() {
    // Arrange
    let app = spawn_app().await;
    app.store_session("abc", RoleId::ClientEmployee);
    app.router.push("/client").unwrap();
    let _ = app
        .core_client
        .my_evaluation_requests(&MyEvaluationRequestsFilter::default(), no_cb)
        .await
        .unwrap();

    // Act
    let actual = app.router.push("/client/requests").unwrap();

    // Assert
    assert!(matches!(
        actual,
        NavigationOutcome::Arrived { route: "login", .. }
    ));
}
