use tokio::signal;

use dotenvy::dotenv;

use mail_relay_api::app::create_app;
use mail_relay_api::config::Config;
use mail_relay_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt::init();

  let config = Config::from_env();
  let listen_addr = config.listen_addr();

  let app_state = SharedAppState::new(config);
  let app = create_app(app_state);

  let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

  println!("Server running on http://{}", listen_addr);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  println!("Received termination signal, shutting down gracefully...");
}
