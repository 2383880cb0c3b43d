use appraisal_shared::{const_config::path::PATH_CONTACT, req_args::api::ContactReqArgs};
use futures::channel::oneshot;

use crate::{client::UiCallBack, Client};

impl Client {
    /// Public form, works without a session
    #[tracing::instrument(skip(ui_notify))]
    pub fn submit_contact<F: UiCallBack>(
        &self,
        args: ContactReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        let args = args.normalized();
        self.send_request_expect_empty(self.outgoing(PATH_CONTACT, &args), ui_notify)
    }
}
