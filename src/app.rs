use axum::{
  http::{header, HeaderValue},
  routing::{any, post},
  Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
  handlers::{hello_handler, preflight_handler, send_email_handler},
  state::SharedAppState,
};

/// The routing table. Every response, success or failure, carries the
/// permissive CORS origin header.
pub fn create_app(state: SharedAppState) -> Router {
  Router::new()
    .route("/send-email", post(send_email_handler).options(preflight_handler))
    .route("/hello", any(hello_handler))
    .layer(SetResponseHeaderLayer::overriding(
      header::ACCESS_CONTROL_ALLOW_ORIGIN,
      HeaderValue::from_static("*"),
    ))
    .with_state(state)
}
