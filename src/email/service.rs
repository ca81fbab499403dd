use std::error::Error;

use async_trait::async_trait;
use lettre::{
  message::header::ContentType,
  transport::smtp::authentication::{Credentials, Mechanism},
  AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::types::{OutboundEmail, SmtpConfig};

#[derive(Debug)]
pub enum EmailError {
  /// The message itself could not be built (unparseable mailbox or header).
  InvalidMessage(String),
  /// The SMTP exchange failed: connect, authenticate or relay rejection.
  Delivery(String),
}

impl Error for EmailError {}

impl std::fmt::Display for EmailError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      EmailError::InvalidMessage(msg) => write!(f, "Invalid message: {}", msg),
      EmailError::Delivery(msg) => write!(f, "Delivery failed: {}", msg),
    }
  }
}

impl From<lettre::address::AddressError> for EmailError {
  fn from(err: lettre::address::AddressError) -> Self {
    EmailError::InvalidMessage(format!("mailbox: {}", err))
  }
}

impl From<lettre::error::Error> for EmailError {
  fn from(err: lettre::error::Error) -> Self {
    EmailError::InvalidMessage(err.to_string())
  }
}

impl From<lettre::transport::smtp::Error> for EmailError {
  fn from(err: lettre::transport::smtp::Error) -> Self {
    EmailError::Delivery(err.to_string())
  }
}

/// Submission seam. The real implementation talks SMTP; tests substitute it.
#[async_trait]
pub trait Mailer: Send + Sync {
  async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Self {
    EmailService { smtp_config }
  }

  /// PLAIN-authenticated transport for the configured relay. `localhost` and
  /// `mailhog` relays speak cleartext, anything else goes through STARTTLS.
  fn transporter(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
    let creds = Credentials::new(
      self.smtp_config.username.clone(),
      self.smtp_config.password.clone(),
    );

    let transporter = if self.smtp_config.host == "localhost" || self.smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.smtp_config.host)
        .credentials(creds)
        .authentication(vec![Mechanism::Plain])
        .port(self.smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_config.host)?
        .credentials(creds)
        .authentication(vec![Mechanism::Plain])
        .port(self.smtp_config.port)
        .build()
    };

    Ok(transporter)
  }
}

#[async_trait]
impl Mailer for EmailService {
  /// One submission attempt over a fresh connection. No retry, no timeout
  /// beyond the network stack's defaults.
  async fn send(&self, email: &OutboundEmail) -> Result<(), EmailError> {
    let message = Message::builder()
      .from(email.from.parse()?)
      .to(email.to.parse()?)
      .subject(email.subject.clone())
      .header(ContentType::TEXT_PLAIN)
      .body(email.body.clone())?;

    self.transporter()?.send(message).await?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::email::types::EmailRequest;
  use lettre::message::Mailbox;

  fn smtp_config(host: &str, port: u16) -> SmtpConfig {
    SmtpConfig {
      host: host.to_string(),
      port,
      username: "relay@example.com".to_string(),
      password: "secret".to_string(),
    }
  }

  #[test]
  fn transporter_builds_for_local_relay() {
    let service = EmailService::new(smtp_config("localhost", 1025));
    assert!(service.transporter().is_ok());
  }

  #[test]
  fn transporter_builds_for_remote_relay() {
    let service = EmailService::new(smtp_config("smtp.example.com", 587));
    assert!(service.transporter().is_ok());
  }

  #[tokio::test]
  async fn send_rejects_unparseable_mailbox() {
    let service = EmailService::new(smtp_config("localhost", 1025));
    let email = OutboundEmail {
      from: "not a mailbox".to_string(),
      to: "ops@example.com".to_string(),
      subject: "Alert".to_string(),
      body: "body".to_string(),
    };

    let result = service.send(&email).await;
    assert!(matches!(result, Err(EmailError::InvalidMessage(_))));
  }

  #[test]
  fn email_error_display() {
    let err = EmailError::Delivery("connection refused".to_string());
    assert_eq!(err.to_string(), "Delivery failed: connection refused");

    let err = EmailError::InvalidMessage("mailbox: missing domain".to_string());
    assert_eq!(err.to_string(), "Invalid message: mailbox: missing domain");
  }

  #[test]
  fn address_errors_map_to_invalid_message() {
    let err: EmailError = "no-at-sign".parse::<Mailbox>().unwrap_err().into();
    assert!(matches!(err, EmailError::InvalidMessage(_)));
  }

  #[tokio::test]
  #[ignore]
  async fn send_against_live_relay() -> Result<(), EmailError> {
    dotenvy::dotenv().ok();

    let config = crate::config::Config::from_env();
    let service = EmailService::new(config.smtp());

    let request = EmailRequest {
      name: "Test".to_string(),
      instance: "dev".to_string(),
      subject: "Test Subject".to_string(),
      message: "Test Body".to_string(),
    };
    let email = OutboundEmail::notification(&request, &config.from_email, &config.to_email);

    service.send(&email).await
  }
}
