use tracing::info;

use crate::Client;

pub mod admin;
pub mod contact;
pub mod evaluation;

impl Client {
    /// There is no server side session to end, only the stored one is dropped
    #[tracing::instrument]
    pub fn logout(&self) {
        self.session_store.clear();
        info!("logged out");
    }
}

/// Builds a multipart file part, using the declared mime type when there is one
fn file_part(
    upload: appraisal_shared::req_args::api::FileUpload,
) -> anyhow::Result<reqwest::multipart::Part> {
    use anyhow::Context as _;
    let part = reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
    Ok(match upload.mime_type {
        Some(mime_type) => part
            .mime_str(&mime_type)
            .with_context(|| format!("invalid mime type: {mime_type:?}"))?,
        None => part,
    })
}
