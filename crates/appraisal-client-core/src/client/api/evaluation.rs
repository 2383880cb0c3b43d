use appraisal_shared::{
    const_config::path::{
        PATH_EVALUATION_DOCUMENT_DOWNLOAD, PATH_EVALUATION_REQUEST,
        PATH_EVALUATION_REQUESTS, PATH_EVALUATION_REQUESTS_EXPORT, PATH_EVALUATION_REQUESTS_MY,
        PATH_EVALUATION_REQUEST_CONFIRM_COMPLETION, PATH_EVALUATION_REQUEST_CREATE,
        PATH_EVALUATION_REQUEST_CREATE_WITH_DOCUMENT, PATH_EVALUATION_REQUEST_DELETE,
        PATH_EVALUATION_REQUEST_DOCUMENTS, PATH_EVALUATION_REQUEST_EXPORT_WORD,
        PATH_EVALUATION_REQUEST_REPORT, PATH_EVALUATION_REQUEST_REPORT_DELETE,
        PATH_EVALUATION_REQUEST_REPORT_DOWNLOAD, PATH_EVALUATION_REQUEST_REPORT_QR,
        PATH_EVALUATION_REQUEST_STATUSES, PATH_EVALUATION_REQUEST_UPDATE,
    },
    page::Page,
    req_args::api::{
        EvaluationRequestDocuments, EvaluationRequestsFilter, ExportFilter, FileUpload,
        MyEvaluationRequestsFilter,
    },
};
use futures::channel::oneshot;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::{
    client::{download::Download, ready, UiCallBack},
    Client,
};

use super::file_part;

pub type EvaluationRequestId = u64;
pub type DocumentId = u64;

const DEFAULT_REPORT_FILE_NAME: &str = "report";
const DEFAULT_DOCUMENT_FILE_NAME: &str = "document";
const DEFAULT_EXCEL_FILE_NAME: &str = "evaluation-requests.xlsx";
const DEFAULT_WORD_FILE_NAME: &str = "evaluation-request.docx";
const DEFAULT_QR_FILE_NAME: &str = "report-qr.png";

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn create_evaluation_request<F: UiCallBack>(
        &self,
        request: &Value,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Value>> {
        self.send_request_expect_json(
            self.outgoing(PATH_EVALUATION_REQUEST_CREATE, request),
            ui_notify,
        )
    }

    /// Sends `dto` as a json part alongside whichever documents are present
    #[tracing::instrument(skip(ui_notify))]
    pub fn create_evaluation_request_with_documents<F: UiCallBack>(
        &self,
        dto: &Value,
        documents: EvaluationRequestDocuments,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Value>> {
        let form = match documents_form(dto, documents) {
            Ok(form) => form,
            Err(e) => return ready(Err(e), ui_notify),
        };
        self.send_request_expect_json(
            self.outgoing_multipart(PATH_EVALUATION_REQUEST_CREATE_WITH_DOCUMENT, form),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn my_evaluation_requests<F: UiCallBack>(
        &self,
        filter: &MyEvaluationRequestsFilter,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<Value>>> {
        self.send_request_expect_page(
            self.outgoing(PATH_EVALUATION_REQUESTS_MY, filter),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn all_evaluation_requests<F: UiCallBack>(
        &self,
        filter: &EvaluationRequestsFilter,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<Value>>> {
        self.send_request_expect_page(self.outgoing(PATH_EVALUATION_REQUESTS, filter), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn evaluation_request<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Value>> {
        self.send_request_expect_json(
            self.outgoing_empty(PATH_EVALUATION_REQUEST.with_id(id)),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_evaluation_request<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        request: &Value,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Value>> {
        self.send_request_expect_json(
            self.outgoing(PATH_EVALUATION_REQUEST_UPDATE.with_id(id), request),
            ui_notify,
        )
    }

    /// Soft delete on the server
    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_evaluation_request<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            self.outgoing_empty(PATH_EVALUATION_REQUEST_DELETE.with_id(id)),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn upload_document<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        file: FileUpload,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.upload_single_file(PATH_EVALUATION_REQUEST_DOCUMENTS.with_id(id), file, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn upload_report<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        file: FileUpload,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.upload_single_file(PATH_EVALUATION_REQUEST_REPORT.with_id(id), file, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_report<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            self.outgoing_empty(PATH_EVALUATION_REQUEST_REPORT_DELETE.with_id(id)),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn confirm_completion<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            self.outgoing_empty(PATH_EVALUATION_REQUEST_CONFIRM_COMPLETION.with_id(id)),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn evaluation_request_statuses<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Value>> {
        self.send_request_expect_json(
            self.outgoing_empty(PATH_EVALUATION_REQUEST_STATUSES),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn export_evaluation_requests_to_excel<F: UiCallBack>(
        &self,
        filter: &ExportFilter,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Download>> {
        self.send_request_expect_download(
            self.outgoing(PATH_EVALUATION_REQUESTS_EXPORT, filter),
            DEFAULT_EXCEL_FILE_NAME,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn export_evaluation_request_to_word<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Download>> {
        self.send_request_expect_download(
            self.outgoing_empty(PATH_EVALUATION_REQUEST_EXPORT_WORD.with_id(id)),
            DEFAULT_WORD_FILE_NAME,
            ui_notify,
        )
    }

    /// PNG image linking to the published report
    #[tracing::instrument(skip(ui_notify))]
    pub fn report_qr_code<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Download>> {
        self.send_request_expect_download(
            self.outgoing_empty(PATH_EVALUATION_REQUEST_REPORT_QR.with_id(id)),
            DEFAULT_QR_FILE_NAME,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn download_report<F: UiCallBack>(
        &self,
        id: EvaluationRequestId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Download>> {
        self.send_request_expect_download(
            self.outgoing_empty(PATH_EVALUATION_REQUEST_REPORT_DOWNLOAD.with_id(id)),
            DEFAULT_REPORT_FILE_NAME,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn download_document<F: UiCallBack>(
        &self,
        id: DocumentId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Download>> {
        self.send_request_expect_download(
            self.outgoing_empty(PATH_EVALUATION_DOCUMENT_DOWNLOAD.with_id(id)),
            DEFAULT_DOCUMENT_FILE_NAME,
            ui_notify,
        )
    }

    fn upload_single_file<F: UiCallBack>(
        &self,
        api_path: appraisal_shared::const_config::path::ApiPath,
        file: FileUpload,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        let form = match file_part(file) {
            Ok(part) => Form::new().part("file", part),
            Err(e) => return ready(Err(e), ui_notify),
        };
        self.send_request_expect_empty(self.outgoing_multipart(api_path, form), ui_notify)
    }
}

fn documents_form(dto: &Value, documents: EvaluationRequestDocuments) -> anyhow::Result<Form> {
    let dto = Part::text(dto.to_string()).mime_str("application/json")?;
    let mut form = Form::new().part("dto", dto);
    let files = [
        ("cadastralDocument", documents.cadastral),
        ("techPassportDocument", documents.tech_passport),
        ("fixedAssetsDocument", documents.fixed_assets),
    ];
    for (name, upload) in files {
        if let Some(upload) = upload {
            form = form.part(name, file_part(upload)?);
        }
    }
    Ok(form)
}
