use appraisal_shared::uac::RoleId;

use crate::helpers::{no_cb, spawn_app};

#[tokio::test]
async fn report_file_name_comes_from_content_disposition() {
    // Arrange
    let app = spawn_app().await;
    app.store_session("abc", RoleId::ClientEmployee);

    // Act
    let actual = app
        .core_client
        .download_report(3, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(actual.file_name, "отчет.pdf");
    assert_eq!(actual.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(actual.bytes, b"%PDF");
}

#[tokio::test]
async fn document_without_file_name_uses_default() {
    // Arrange
    let app = spawn_app().await;
    app.store_session("abc", RoleId::CompanyEmployee);

    // Act
    let actual = app
        .core_client
        .download_document(8, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(actual.file_name, "document");
    assert_eq!(actual.bytes, vec![1, 2, 3]);
}
