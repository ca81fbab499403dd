use std::env;

use crate::email::SmtpConfig;

/// Process configuration, read once at startup and immutable afterwards.
///
/// Missing variables become empty strings. Nothing is validated here, so a
/// misconfigured value surfaces at its first use: the bind for `APP_PORT`,
/// the first delivery for the SMTP settings.
#[derive(Debug, Clone)]
pub struct Config {
  pub from_email: String,
  pub to_email: String,
  pub smtp_password: String,
  pub smtp_host: String,
  pub smtp_port: String,
  pub app_port: String,
}

impl Config {
  pub fn from_env() -> Self {
    Config {
      from_email: env::var("FROM_EMAIL").unwrap_or_default(),
      to_email: env::var("TO_EMAIL").unwrap_or_default(),
      smtp_password: env::var("PASSWORD_EMAIL").unwrap_or_default(),
      smtp_host: env::var("SMTP_HOST").unwrap_or_default(),
      smtp_port: env::var("SMTP_PORT").unwrap_or_default(),
      app_port: env::var("APP_PORT").unwrap_or_default(),
    }
  }

  pub fn listen_addr(&self) -> String {
    format!("0.0.0.0:{}", self.app_port)
  }

  /// SMTP subset handed to the transport. A port that does not parse becomes
  /// 0, which no relay listens on, so the error shows up on the first send.
  pub fn smtp(&self) -> SmtpConfig {
    SmtpConfig {
      host: self.smtp_host.clone(),
      port: self.smtp_port.parse().unwrap_or(0),
      username: self.from_email.clone(),
      password: self.smtp_password.clone(),
    }
  }
}
