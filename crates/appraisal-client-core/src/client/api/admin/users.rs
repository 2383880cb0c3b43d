use appraisal_shared::{
    const_config::path::{PATH_USERS, PATH_USER_CREATE, PATH_USER_DELETE, PATH_USER_UPDATE},
    page::Page,
    req_args::api::{UserListFilter, UserListQuery},
};
use futures::channel::oneshot;
use serde_json::Value;

use crate::{client::UiCallBack, Client};

pub type UserId = u64;

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn list_users<F: UiCallBack>(
        &self,
        filter: &UserListFilter,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<Value>>> {
        let args = UserListQuery::from(filter);
        self.send_request_expect_page(self.outgoing(PATH_USERS, &args), ui_notify)
    }

    // Skipping the payload as it may carry a password
    #[tracing::instrument(skip(user, ui_notify))]
    pub fn create_user<F: UiCallBack>(
        &self,
        user: &Value,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Value>> {
        self.send_request_expect_json(self.outgoing(PATH_USER_CREATE, user), ui_notify)
    }

    #[tracing::instrument(skip(user, ui_notify))]
    pub fn update_user<F: UiCallBack>(
        &self,
        id: UserId,
        user: &Value,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Value>> {
        self.send_request_expect_json(self.outgoing(PATH_USER_UPDATE.with_id(id), user), ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_user<F: UiCallBack>(
        &self,
        id: UserId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(self.outgoing_empty(PATH_USER_DELETE.with_id(id)), ui_notify)
    }
}
