use std::sync::Arc;

use crate::{
  config::Config,
  email::{EmailService, Mailer},
};

/// Shared, read-only application state. Cloned per request, never locked.
#[derive(Clone)]
pub struct SharedAppState {
  pub config: Arc<Config>,
  pub mailer: Arc<dyn Mailer>,
}

impl SharedAppState {
  pub fn new(config: Config) -> Self {
    let mailer = Arc::new(EmailService::new(config.smtp()));
    SharedAppState {
      config: Arc::new(config),
      mailer,
    }
  }

  /// Same state with a substitute transport. Used by tests.
  pub fn with_mailer(config: Config, mailer: Arc<dyn Mailer>) -> Self {
    SharedAppState {
      config: Arc::new(config),
      mailer,
    }
  }
}
