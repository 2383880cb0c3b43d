use std::fmt::Debug;

use anyhow::Context as _;
use futures::channel::oneshot;
use reqwest::header::{HeaderName, CONTENT_DISPOSITION, CONTENT_TYPE};

use super::{Client, Outgoing, UiCallBack};

/// A file received from the backend
#[derive(Clone, PartialEq, Eq)]
pub struct Download {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
}

impl Debug for Download {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Download")
            .field("len", &self.bytes.len())
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Extracts the name from a `filename*=UTF-8''<percent encoded>` parameter
pub fn file_name_from_content_disposition(header: &str) -> Option<String> {
    const MARKER: &str = "filename*=UTF-8''";
    let start = header.find(MARKER)? + MARKER.len();
    let encoded = header[start..].split(';').next()?.trim();
    if encoded.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(encoded).ok()?;
    Some(decoded.into_owned())
}

impl Client {
    pub(super) fn send_request_expect_download<F: UiCallBack>(
        &self,
        outgoing: Outgoing,
        default_file_name: &'static str,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Download>> {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let path = outgoing.path.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_download(resp, &client, &path, default_file_name).await;
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(outgoing, on_done);
        rx
    }
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_download(
    response: reqwest::Result<reqwest::Response>,
    client: &Client,
    path: &str,
    default_file_name: &str,
) -> anyhow::Result<Download> {
    let response = client.inbound(path, response).await?;
    let header = |name: HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|x| x.to_str().ok())
            .map(str::to_string)
    };
    let file_name = header(CONTENT_DISPOSITION)
        .and_then(|x| file_name_from_content_disposition(&x))
        .unwrap_or_else(|| default_file_name.to_string());
    let content_type = header(CONTENT_TYPE);
    let bytes = response
        .bytes()
        .await
        .context("failed to read file contents")?
        .to_vec();
    Ok(Download {
        bytes,
        file_name,
        content_type,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::plain("attachment; filename*=UTF-8''report.pdf", Some("report.pdf"))]
    #[case::percent_encoded(
        "attachment; filename*=UTF-8''%D0%BE%D1%82%D1%87%D0%B5%D1%82%201.docx",
        Some("отчет 1.docx")
    )]
    #[case::followed_by_other_params("attachment; filename*=UTF-8''a.pdf; size=10", Some("a.pdf"))]
    #[case::only_plain_filename("attachment; filename=\"a.pdf\"", None)]
    #[case::empty_value("attachment; filename*=UTF-8''", None)]
    #[case::missing("inline", None)]
    fn content_disposition(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            file_name_from_content_disposition(header).as_deref(),
            expected
        );
    }
}
