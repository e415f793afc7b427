//! Exercises `HttpBackend` against an in-process stand-in for the Spring backend.

#![cfg(not(target_arch = "wasm32"))]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header},
    routing::get,
};
use reqwest::cookie::Jar;
use serde_json::{Value, json};
use shared::client::{Backend, BackendError, HttpBackend};
use shared::endpoints::Endpoints;
use shared::models::UserResponse;
use shared::view::{Navigator, ViewController, ViewState};
use tokio::net::TcpListener;

const SESSION_COOKIE: &str = "JSESSIONID=valid-session";

fn signed_in(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|cookies| cookies.split(';').any(|c| c.trim() == SESSION_COOKIE))
}

async fn user(headers: HeaderMap) -> Json<UserResponse> {
    if signed_in(&headers) {
        Json(UserResponse {
            authenticated: true,
            name: Some("Ada".into()),
            email: Some("ada@example.com".into()),
            picture: Some("https://example.com/ada.png".into()),
        })
    } else {
        Json(UserResponse::anonymous())
    }
}

async fn hello(headers: HeaderMap) -> Result<Json<Value>, StatusCode> {
    if !signed_in(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "message": "Hello, Ada!",
        "email": "ada@example.com",
    })))
}

async fn echo(headers: HeaderMap, Json(body): Json<Value>) -> Result<Json<Value>, StatusCode> {
    if !signed_in(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(json!({
        "received": body,
        "from": "ada@example.com",
        "status": "ok",
    })))
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_backend() -> SocketAddr {
    serve(
        Router::new()
            .route("/api/user", get(user))
            .route("/api/hello", get(hello).post(echo)),
    )
    .await
}

fn endpoints(addr: SocketAddr) -> Endpoints {
    Endpoints::new(Some(&format!("http://{addr}/")))
}

fn client_with_session(addr: SocketAddr) -> HttpBackend {
    let endpoints = endpoints(addr);
    let jar = Arc::new(Jar::default());
    let origin = url::Url::parse(endpoints.origin().unwrap()).unwrap();
    jar.add_cookie_str(&format!("{SESSION_COOKIE}; Path=/"), &origin);
    HttpBackend::with_cookie_jar(endpoints, jar).unwrap()
}

struct NoNavigation;

impl Navigator for NoNavigation {
    fn navigate(&self, url: &str) {
        panic!("unexpected navigation to {url}");
    }
}

#[tokio::test]
async fn session_without_cookie_is_anonymous() {
    let addr = spawn_backend().await;
    let backend = HttpBackend::new(endpoints(addr)).unwrap();

    let body = backend.fetch_session().await.unwrap();
    assert_eq!(body, UserResponse::anonymous());
}

#[tokio::test]
async fn session_cookie_is_attached() {
    let addr = spawn_backend().await;
    let backend = client_with_session(addr);

    let session = backend.fetch_session().await.unwrap().into_session().unwrap();
    assert_eq!(session.name, "Ada");
    assert_eq!(session.email, "ada@example.com");
}

#[tokio::test]
async fn greeting_without_session_reports_status() {
    let addr = spawn_backend().await;
    let backend = HttpBackend::new(endpoints(addr)).unwrap();

    assert_eq!(
        backend.fetch_greeting().await.unwrap_err(),
        BackendError::Status(401)
    );
    assert_eq!(
        backend.submit_greeting("hi").await.unwrap_err(),
        BackendError::Status(401)
    );
}

#[tokio::test]
async fn greeting_round_trip() {
    let addr = spawn_backend().await;
    let backend = client_with_session(addr);

    let greeting = backend.fetch_greeting().await.unwrap();
    assert_eq!(greeting["message"], "Hello, Ada!");

    let echoed = backend.submit_greeting("hello").await.unwrap();
    assert_eq!(echoed["received"], json!({ "message": "hello" }));
    assert_eq!(echoed["status"], "ok");
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(endpoints(addr)).unwrap();
    let err = backend.fetch_session().await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)), "{err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let addr = serve(Router::new().route("/api/hello", get(|| async { "plain text" }))).await;
    let backend = HttpBackend::new(endpoints(addr)).unwrap();

    let err = backend.fetch_greeting().await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn relative_endpoints_fail_without_a_page_origin() {
    let backend = HttpBackend::new(Endpoints::relative()).unwrap();
    let err = backend.fetch_session().await.unwrap_err();
    assert!(matches!(err, BackendError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn controller_drives_the_real_client() {
    let addr = spawn_backend().await;
    let mut controller = ViewController::new(client_with_session(addr), NoNavigation, endpoints(addr));

    assert_eq!(controller.start().await, ViewState::Authenticated);

    controller.set_draft("from the controller").unwrap();
    controller.send_post_greeting().await.unwrap();
    controller.send_get_greeting().await.unwrap();

    let model = controller.model();
    assert_eq!(model.error(), None);
    assert_eq!(
        model.greeting(shared::models::GreetingKind::Post).unwrap()["received"]["message"],
        "from the controller"
    );
    assert_eq!(
        model.greeting(shared::models::GreetingKind::Get).unwrap()["message"],
        "Hello, Ada!"
    );
}

#[tokio::test]
async fn backend_outage_shows_sign_in() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let backend = HttpBackend::new(endpoints(addr)).unwrap();
    let mut controller = ViewController::new(backend, NoNavigation, endpoints(addr));

    assert_eq!(controller.start().await, ViewState::Anonymous);
    assert_eq!(controller.model().error(), None);
}
