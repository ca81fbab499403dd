//! Outbound email: the inbound payload shape, message composition and the
//! SMTP submission built on lettre.

mod service;
mod types;

pub use service::{EmailError, EmailService, Mailer};
pub use types::{EmailRequest, OutboundEmail, SmtpConfig};
