use anyhow::Context;
use appraisal_shared::{
    const_config::path::{ApiPath, PATH_AUTH_LOGIN},
    page::Page,
    req_args::LoginReqArgs,
    session::Session,
    uac::LoginResponse,
};
use closure_traits::{ChannelCallBack, ChannelCallBackOutput};
use futures::channel::oneshot;
use reqwest::{header::AUTHORIZATION, Method};
use secrecy::ExposeSecret as _;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{
    navigation::Navigator,
    session_store::{SessionStore, StorageScope},
};

pub mod api;
pub mod download;
mod gateway;

pub use gateway::{classify_status, FailureClass};

/// Single egress point for every backend call.
///
/// Each request passes an outbound stage that attaches the stored credential
/// and an inbound stage that classifies failures, clears the session when the
/// server rejects it and asks the [`Navigator`] to show the login view
#[derive(Debug, Clone)]
pub struct Client {
    api_client: reqwest::Client,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    timeout: Duration,
    inner: Arc<Mutex<ClientInner>>,
    session_store: SessionStore,
    navigator: Arc<dyn Navigator>,
}

#[derive(Debug)]
struct ClientInner {
    server_address: String,
}

/// A request that is built but has not been through the outbound stage yet
struct Outgoing {
    path: String,
    request: reqwest::RequestBuilder,
}

impl ClientInner {
    #[tracing::instrument]
    fn new(server_address: String) -> Self {
        Self { server_address }
    }
}

impl Client {
    pub fn new<N: Navigator>(
        server_address: String,
        session_store: SessionStore,
        navigator: N,
    ) -> Self {
        Self::with_timeout(
            server_address,
            session_store,
            navigator,
            appraisal_shared::const_config::client::REQUEST_TIMEOUT,
        )
    }

    /// Requests that take longer than `timeout` fail as
    /// [`TransportFailure::Timeout`](appraisal_shared::errors::TransportFailure)
    #[tracing::instrument(name = "NEW CLIENT-CORE", skip(session_store, navigator))]
    pub fn with_timeout<N: Navigator>(
        server_address: String,
        session_store: SessionStore,
        navigator: N,
        timeout: Duration,
    ) -> Self {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(timeout);
        let api_client = builder.build().expect("Unable to create reqwest client");
        Self {
            api_client,
            timeout,
            inner: Arc::new(Mutex::new(ClientInner::new(server_address))),
            session_store,
            navigator: Arc::new(navigator),
        }
    }

    /// Sends the credentials and on success persists the returned session in
    /// `scope`
    #[tracing::instrument(skip(ui_notify))]
    pub fn login<F: UiCallBack>(
        &self,
        args: LoginReqArgs,
        scope: StorageScope,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Session>> {
        let (tx, rx) = oneshot::channel();
        let args = serde_json::json!({
            "login": args.login,
            "password": args.password.expose_secret(),
        });
        let outgoing = self.outgoing(PATH_AUTH_LOGIN, &args);
        let client = self.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_login(resp, &client, scope).await;
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(outgoing, on_done);
        rx
    }

    /// Reads the stored session fresh, reflecting any invalidation
    pub fn session(&self) -> Session {
        self.session_store.read()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_authenticated()
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    /// GET and DELETE send `args` as the query string, everything else as a
    /// json body
    fn outgoing<P, T>(&self, api_path: P, args: &T) -> Outgoing
    where
        P: Into<ApiPath>,
        T: serde::Serialize + Debug + ?Sized,
    {
        let api_path = api_path.into();
        let is_query_method = api_path.method == Method::GET || api_path.method == Method::DELETE;
        let request = self.request_builder(&api_path);
        let request = if is_query_method {
            request.query(args)
        } else {
            request.json(args)
        };
        Outgoing {
            path: api_path.path,
            request,
        }
    }

    fn outgoing_empty<P: Into<ApiPath>>(&self, api_path: P) -> Outgoing {
        let api_path = api_path.into();
        let request = self.request_builder(&api_path);
        Outgoing {
            path: api_path.path,
            request,
        }
    }

    fn outgoing_multipart<P: Into<ApiPath>>(
        &self,
        api_path: P,
        form: reqwest::multipart::Form,
    ) -> Outgoing {
        let api_path = api_path.into();
        let request = self.request_builder(&api_path).multipart(form);
        Outgoing {
            path: api_path.path,
            request,
        }
    }

    fn request_builder(&self, api_path: &ApiPath) -> reqwest::RequestBuilder {
        self.api_client
            .request(api_path.method.clone(), self.path_to_url(&api_path.path))
    }

    #[tracing::instrument(skip_all, fields(path = outgoing.path))]
    // WARNING: Must skip the request as it may contain sensitive info and
    // "safe" versions would usually already be logged by the caller
    fn initiate_request<F, O>(&self, outgoing: Outgoing, on_done: F)
    where
        F: ChannelCallBack<O>,
        O: ChannelCallBackOutput,
    {
        let request = self.authorize(outgoing.request);
        reqwest_cross::fetch(request, on_done)
    }

    /// Outbound stage. Reads the store at send time so a cleared session is
    /// never sent
    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = match self.session_store.read().token {
            Some(token) => request.header(AUTHORIZATION, token.bearer_header_value()),
            None => request,
        };
        #[cfg(target_arch = "wasm32")]
        let request = request.timeout(self.timeout);
        request
    }

    fn send_request_expect_json<F, U>(
        &self,
        outgoing: Outgoing,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<U>>
    where
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let path = outgoing.path.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_json_body(resp, &client, &path).await;
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(outgoing, on_done);
        rx
    }

    fn send_request_expect_page<F, U>(
        &self,
        outgoing: Outgoing,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Page<U>>>
    where
        F: UiCallBack,
        U: Send + Debug + serde::de::DeserializeOwned + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let path = outgoing.path.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_page(resp, &client, &path).await;
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(outgoing, on_done);
        rx
    }

    fn send_request_expect_empty<F>(
        &self,
        outgoing: Outgoing,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>>
    where
        F: UiCallBack,
    {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let path = outgoing.path.clone();
        let on_done = move |resp: reqwest::Result<reqwest::Response>| async move {
            let msg = process_empty(resp, &client, &path).await;
            tx.send(msg).expect("failed to send oneshot msg");
            ui_notify();
        };
        self.initiate_request(outgoing, on_done);
        rx
    }

    #[tracing::instrument(ret)]
    fn path_to_url(&self, path: &str) -> String {
        format!(
            "{}{path}",
            &self
                .inner
                .lock()
                .expect("failed to unlock client mutex")
                .server_address
        )
    }
}

/// Resolves immediately, used when a request cannot even be built
fn ready<T, F: UiCallBack>(
    result: anyhow::Result<T>,
    ui_notify: F,
) -> oneshot::Receiver<anyhow::Result<T>> {
    let (tx, rx) = oneshot::channel();
    tx.send(result)
        .unwrap_or_else(|_| unreachable!("receiver is held right here"));
    ui_notify();
    rx
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_empty(
    response: reqwest::Result<reqwest::Response>,
    client: &Client,
    path: &str,
) -> anyhow::Result<()> {
    client.inbound(path, response).await?;
    Ok(())
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_json_body<T>(
    response: reqwest::Result<reqwest::Response>,
    client: &Client,
    path: &str,
) -> anyhow::Result<T>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let response = client.inbound(path, response).await?;
    Ok(response
        .json()
        .await
        .context("failed to parse result as json")?)
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_page<T>(
    response: reqwest::Result<reqwest::Response>,
    client: &Client,
    path: &str,
) -> anyhow::Result<Page<T>>
where
    T: Debug + serde::de::DeserializeOwned,
{
    let response = client.inbound(path, response).await?;
    let body = response
        .text()
        .await
        .context("failed to read response body")?;
    if body.trim().is_empty() {
        return Ok(Page::default());
    }
    let value = serde_json::from_str(&body).context("failed to parse result as json")?;
    Page::from_json(value)
}

#[tracing::instrument(ret, err(Debug), skip(client))]
async fn process_login(
    response: reqwest::Result<reqwest::Response>,
    client: &Client,
    scope: StorageScope,
) -> anyhow::Result<Session> {
    let response = client.inbound(PATH_AUTH_LOGIN.path, response).await?;
    let login_response: LoginResponse = response
        .json()
        .await
        .context("failed to parse result as json")?;
    let session = Session::try_from(login_response).context("login response has no role")?;
    client
        .session_store
        .write(&session, scope)
        .context("failed to store session")?;
    Ok(session)
}

pub trait UiCallBack: 'static + Send + FnOnce() {}
impl<T> UiCallBack for T where T: 'static + Send + FnOnce() {}

#[cfg(not(target_arch = "wasm32"))]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + Send + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> + Send {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> + Send {}
}

#[cfg(target_arch = "wasm32")]
pub mod closure_traits {
    pub trait ChannelCallBack<O>:
        'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    impl<T, O> ChannelCallBack<O> for T where
        T: 'static + FnOnce(reqwest::Result<reqwest::Response>) -> O
    {
    }
    pub trait ChannelCallBackOutput: futures::Future<Output = ()> {}
    impl<T> ChannelCallBackOutput for T where T: futures::Future<Output = ()> {}
}
