use appraisal_client_core::StorageScope;
use appraisal_shared::{
    const_config::message::MESSAGE_NOT_AUTHENTICATED,
    req_args::{api::MyEvaluationRequestsFilter, LoginReqArgs},
    session::Session,
    uac::RoleId,
};

use crate::helpers::{no_cb, spawn_app, STUB_LOGIN, STUB_PASSWORD, VALID_TOKEN};

fn login_args() -> LoginReqArgs {
    LoginReqArgs::new(STUB_LOGIN, STUB_PASSWORD.to_string().into())
}

#[tokio::test]
async fn login_stores_session() {
    // Arrange
    let app = spawn_app().await;
    assert!(!app.core_client.is_logged_in());

    // Act
    let actual = app
        .core_client
        .login(login_args(), StorageScope::Durable, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(actual.token.as_ref().unwrap().expose_secret(), VALID_TOKEN);
    assert_eq!(actual.role, Some(RoleId::ClientEmployee));
    assert_eq!(actual.full_name.as_deref(), Some("Alice Karimova"));
    assert!(actual.can_edit_evaluation_requests, "missing flag grants");
    assert!(!actual.can_delete_evaluation_requests);
    assert_eq!(app.session_store().read(), actual);
}

#[tokio::test]
async fn login_logout_round_trip() {
    // Arrange
    let app = spawn_app().await;
    app.core_client
        .login(login_args(), StorageScope::Ephemeral, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Act - Use the session
    let page = app
        .core_client
        .my_evaluation_requests(&MyEvaluationRequestsFilter::default(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_elements, 7);
    assert_eq!(page.total_pages, 4);

    // Act - Logout
    app.core_client.logout();

    // Assert
    assert!(!app.core_client.is_logged_in());
    assert_eq!(app.session_store().read(), Session::empty());
}

#[tokio::test]
async fn wrong_password_is_not_authenticated() {
    // Arrange
    let app = spawn_app().await;
    let session = app.store_session("abc", RoleId::Admin);
    let args = login_args().password("wrong".to_string().into());

    // Act
    let actual = app
        .core_client
        .login(args, StorageScope::Durable, no_cb)
        .await
        .unwrap()
        .unwrap_err();

    // Assert
    assert_eq!(actual.to_string(), MESSAGE_NOT_AUTHENTICATED);
    assert_eq!(app.session_store().read(), session);
    assert_eq!(app.router.history(), vec!["/"]);
}
