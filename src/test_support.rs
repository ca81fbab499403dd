use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{HeaderMap, Method, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  config::Config,
  email::{EmailError, Mailer, OutboundEmail},
  state::SharedAppState,
};

pub fn test_config() -> Config {
  Config {
    from_email: "relay@example.com".to_string(),
    to_email: "ops@example.com".to_string(),
    smtp_password: "secret".to_string(),
    smtp_host: "localhost".to_string(),
    smtp_port: "1025".to_string(),
    app_port: "8080".to_string(),
  }
}

/// Records every composed message instead of talking to a relay.
#[derive(Default)]
pub struct StubMailer {
  pub sent: Mutex<Vec<OutboundEmail>>,
}

#[async_trait]
impl Mailer for StubMailer {
  async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError> {
    self.sent.lock().unwrap().push(email.clone());
    Ok(())
  }
}

/// Fails every submission with the given cause.
pub struct FailingMailer {
  cause: String,
}

#[async_trait]
impl Mailer for FailingMailer {
  async fn send(&self, _email: &OutboundEmail) -> Result<(), EmailError> {
    Err(EmailError::Delivery(self.cause.clone()))
  }
}

pub fn app_with_stub_mailer() -> (Router, Arc<StubMailer>) {
  let mailer = Arc::new(StubMailer::default());
  let state = SharedAppState::with_mailer(test_config(), mailer.clone());
  (create_app(state), mailer)
}

pub fn app_with_failing_mailer(cause: &str) -> Router {
  let mailer = Arc::new(FailingMailer {
    cause: cause.to_string(),
  });
  let state = SharedAppState::with_mailer(test_config(), mailer);
  create_app(state)
}

pub async fn request(app: Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
    .expect("build request");

  execute(app, request).await
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, HeaderMap, Bytes) {
  let request = Request::builder()
    .method(Method::POST)
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  execute(app, request).await
}

async fn execute(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let headers = response.headers().clone();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, headers, body)
}
