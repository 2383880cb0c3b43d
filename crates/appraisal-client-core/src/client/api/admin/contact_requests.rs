use appraisal_shared::{
    const_config::path::{
        PATH_ADMIN_CONTACT_REQUESTS, PATH_ADMIN_CONTACT_REQUESTS_DELETE_ALL,
        PATH_ADMIN_CONTACT_REQUEST_DELETE,
    },
    page::Page,
    req_args::api::PageArgs,
};
use futures::channel::oneshot;
use serde_json::Value;

use crate::{client::UiCallBack, Client};

pub type ContactRequestId = u64;

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_contact_requests<F: UiCallBack>(
        &self,
        paging: PageArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<Value>>> {
        self.send_request_expect_page(
            self.outgoing(PATH_ADMIN_CONTACT_REQUESTS, &paging),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_contact_request<F: UiCallBack>(
        &self,
        id: ContactRequestId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            self.outgoing_empty(PATH_ADMIN_CONTACT_REQUEST_DELETE.with_id(id)),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_all_contact_requests<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            self.outgoing_empty(PATH_ADMIN_CONTACT_REQUESTS_DELETE_ALL),
            ui_notify,
        )
    }
}
