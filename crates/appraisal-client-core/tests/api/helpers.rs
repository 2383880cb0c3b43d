use std::{net::TcpListener, sync::LazyLock, time::Duration};

use actix_web::{
    http::header::{AUTHORIZATION, CONTENT_DISPOSITION},
    web, App, HttpRequest, HttpResponse, HttpServer,
};
use appraisal_client_core::{
    routing::{RouteTable, Router},
    Client, SessionStore, StorageScope,
};
use appraisal_shared::{
    const_config::client::REQUEST_TIMEOUT,
    session::Session,
    telemetry::{get_subscriber, init_subscriber},
    uac::RoleId,
};
use serde_json::{json, Value};

/// Token the stub backend accepts, anything else is treated as expired
pub const VALID_TOKEN: &str = "fresh-token";
pub const STUB_LOGIN: &str = "alice";
pub const STUB_PASSWORD: &str = "secret";
/// How long the stub takes to answer the contact request list
pub const SLOW_RESPONSE_DELAY: Duration = Duration::from_secs(2);

// Ensure that the `tracing` stack is only initialised once
static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).unwrap();
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).unwrap();
    };
});

pub struct TestApp {
    pub address: String,
    pub core_client: Client,
    pub router: Router,
}

impl TestApp {
    pub fn session_store(&self) -> &SessionStore {
        self.core_client.session_store()
    }

    pub fn store_session(&self, token: &str, role: RoleId) -> Session {
        let session = Session {
            token: Some(token.to_string().try_into().unwrap()),
            role: Some(role),
            ..Default::default()
        };
        self.session_store()
            .write(&session, StorageScope::Durable)
            .unwrap();
        session
    }
}

/// Empty function for use when a call back isn't needed
pub fn no_cb() {}

/// Starts the stub backend on a random port with a client and router wired to
/// it. The router starts at `/`
pub async fn spawn_app() -> TestApp {
    spawn_app_with_timeout(REQUEST_TIMEOUT).await
}

pub async fn spawn_app_with_timeout(timeout: Duration) -> TestApp {
    LazyLock::force(&TRACING);
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let server = HttpServer::new(|| App::new().service(stub_api()))
        .workers(1)
        .listen(listener)
        .expect("failed to listen")
        .run();
    tokio::spawn(server);
    build_test_app(format!("http://127.0.0.1:{port}"), timeout)
}

/// A client pointed at a port nothing listens on
pub fn spawn_app_without_server() -> TestApp {
    LazyLock::force(&TRACING);
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind random port");
        listener.local_addr().unwrap().port()
    };
    build_test_app(format!("http://127.0.0.1:{port}"), REQUEST_TIMEOUT)
}

fn build_test_app(address: String, timeout: Duration) -> TestApp {
    let session_store = SessionStore::in_memory();
    let router = Router::new(RouteTable::default(), session_store.clone(), "/");
    let core_client =
        Client::with_timeout(address.clone(), session_store, router.clone(), timeout);
    TestApp {
        address,
        core_client,
        router,
    }
}

fn stub_api() -> actix_web::Scope {
    // Specific evaluation request paths must come before the `{id}` catch all
    web::scope("/api")
        .route("/auth/login", web::post().to(login))
        .route("/contact", web::post().to(contact))
        .route("/users", web::get().to(users))
        .route("/admin/contact-requests", web::get().to(slow_contact_requests))
        .route("/evaluation-requests/my", web::get().to(my_requests))
        .route("/evaluation-requests/statuses", web::get().to(statuses))
        .route(
            "/evaluation-requests/{id}/report/download",
            web::get().to(report_download),
        )
        .route(
            "/evaluation-requests/documents/{id}/download",
            web::get().to(document_download),
        )
        .route("/evaluation-requests/{id}", web::get().to(echo_authorization))
}

fn authorization(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|x| x.to_str().ok())
        .map(str::to_string)
}

fn has_valid_token(req: &HttpRequest) -> bool {
    authorization(req) == Some(format!("Bearer {VALID_TOKEN}"))
}

async fn login(body: web::Json<Value>) -> HttpResponse {
    let body = body.into_inner();
    if body["login"] == STUB_LOGIN && body["password"] == STUB_PASSWORD {
        HttpResponse::Ok().json(json!({
            "token": VALID_TOKEN,
            "role": "CLIENT_EMPLOYEE",
            "fullName": "Alice Karimova",
            "canDeleteEvaluationRequests": false,
        }))
    } else {
        HttpResponse::Unauthorized().finish()
    }
}

async fn contact() -> HttpResponse {
    HttpResponse::Forbidden().finish()
}

async fn users() -> HttpResponse {
    HttpResponse::InternalServerError().body("database unavailable")
}

async fn slow_contact_requests() -> HttpResponse {
    actix_web::rt::time::sleep(SLOW_RESPONSE_DELAY).await;
    HttpResponse::Ok().json(json!([]))
}

async fn statuses() -> HttpResponse {
    HttpResponse::InternalServerError().finish()
}

async fn my_requests(req: HttpRequest) -> HttpResponse {
    if !has_valid_token(&req) {
        return HttpResponse::Unauthorized().finish();
    }
    HttpResponse::Ok().json(json!({
        "content": [{"id": 1}, {"id": 2}],
        "totalElements": 7,
        "totalPages": 4,
    }))
}

async fn echo_authorization(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok().json(json!({ "authorization": authorization(&req) }))
}

async fn report_download() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((
            CONTENT_DISPOSITION,
            "attachment; filename*=UTF-8''%D0%BE%D1%82%D1%87%D0%B5%D1%82.pdf",
        ))
        .content_type("application/pdf")
        .body(vec![0x25, 0x50, 0x44, 0x46])
}

async fn document_download() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/octet-stream")
        .body(vec![1, 2, 3])
}
