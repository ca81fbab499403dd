use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;

use crate::email::EmailError;

#[derive(Debug)]
pub struct AppError {
  pub status_code: StatusCode,
  pub message: String,
}

impl AppError {
  pub fn new(status_code: StatusCode, message: impl Into<String>) -> Self {
    Self {
      status_code,
      message: message.into(),
    }
  }

  pub fn bad_request(message: impl Into<String>) -> Self {
    Self::new(StatusCode::BAD_REQUEST, message)
  }

  pub fn internal_server_error(message: impl Into<String>) -> Self {
    Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
    let body = Json(json!({
      "error": self.message,
      "status_code": self.status_code.as_u16(),
    }));

    (self.status_code, body).into_response()
  }
}

impl From<serde_json::Error> for AppError {
  fn from(error: serde_json::Error) -> Self {
    tracing::debug!("Rejected request payload: {}", error);
    AppError::bad_request("Invalid request payload")
  }
}

impl From<EmailError> for AppError {
  fn from(error: EmailError) -> Self {
    tracing::error!("Failed to send email: {}", error);
    AppError::internal_server_error("Failed to send email")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn json_errors_map_to_bad_request() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = AppError::from(json_err);
    assert_eq!(err.status_code, StatusCode::BAD_REQUEST);
    assert_eq!(err.message, "Invalid request payload");
  }

  #[test]
  fn email_errors_map_to_opaque_internal_error() {
    let err = AppError::from(EmailError::Delivery("relay closed the connection".to_string()));
    assert_eq!(err.status_code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.message, "Failed to send email");
  }
}
