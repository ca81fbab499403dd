use serde::{Deserialize, Serialize};

/// Inbound payload of `POST /send-email`. Lives for one request only.
///
/// Fields may be empty and absent fields decode as empty strings; nothing is
/// enforced beyond the JSON shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailRequest {
  pub name: String,
  pub instance: String,
  pub subject: String,
  pub message: String,
}

/// Relay settings handed to the SMTP transport.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

/// A composed message, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
  pub from: String,
  pub to: String,
  pub subject: String,
  pub body: String,
}

impl OutboundEmail {
  /// Formats a notification email from an inbound request. Pure, never fails.
  pub fn notification(request: &EmailRequest, from: &str, to: &str) -> Self {
    OutboundEmail {
      from: from.to_string(),
      to: to.to_string(),
      subject: request.subject.clone(),
      body: format!(
        "Name: {}\nInstance: {}\n\n{}",
        request.name, request.instance, request.message
      ),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn notification_body_layout() {
    let request = EmailRequest {
      name: "Alice".to_string(),
      instance: "prod-1".to_string(),
      subject: "Alert".to_string(),
      message: "disk full".to_string(),
    };

    let email = OutboundEmail::notification(&request, "relay@example.com", "ops@example.com");
    assert_eq!(email.from, "relay@example.com");
    assert_eq!(email.to, "ops@example.com");
    assert_eq!(email.subject, "Alert");
    assert_eq!(email.body, "Name: Alice\nInstance: prod-1\n\ndisk full");
  }

  #[test]
  fn notification_accepts_empty_fields() {
    let request = EmailRequest::default();

    let email = OutboundEmail::notification(&request, "", "");
    assert_eq!(email.subject, "");
    assert_eq!(email.body, "Name: \nInstance: \n\n");
  }

  #[test]
  fn request_decodes_with_missing_fields() {
    let request: EmailRequest = serde_json::from_str(r#"{"subject": "Alert"}"#).expect("decode");
    assert_eq!(request.subject, "Alert");
    assert_eq!(request.name, "");
    assert_eq!(request.instance, "");
    assert_eq!(request.message, "");
  }

  #[test]
  fn request_rejects_non_string_fields() {
    let result = serde_json::from_str::<EmailRequest>(r#"{"name": 123}"#);
    assert!(result.is_err());
  }
}
