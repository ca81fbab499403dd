use axum::{
  body::Bytes,
  extract::State,
  http::{header, StatusCode},
  response::IntoResponse,
};

use crate::{
  email::{EmailRequest, OutboundEmail},
  error::AppError,
  state::SharedAppState,
};

/// `POST /send-email`: decode the payload, compose the notification and hand
/// it to the transport. One attempt, nothing to roll back on failure.
pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<&'static str, AppError> {
  let request: EmailRequest = serde_json::from_slice(&body)?;

  let email = OutboundEmail::notification(&request, &state.config.from_email, &state.config.to_email);
  state.mailer.send(&email).await?;

  Ok("Email sent successfully")
}

/// `OPTIONS /send-email`: CORS preflight. The allow-origin header is stamped
/// on by the router layer like on every other response.
pub async fn preflight_handler() -> impl IntoResponse {
  (
    StatusCode::OK,
    [
      (header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
      (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
    ],
  )
}

/// `/hello`: liveness check, answers every method.
pub async fn hello_handler() -> &'static str {
  "Hello, World!"
}
