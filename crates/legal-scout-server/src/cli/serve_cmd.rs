//! `legal-scout serve`: run the webhook server.

use crate::cli::output::Styled;
use crate::server::{router, AppState};
use anyhow::{Context, Result};
use legal_scout::{Scanner, ScoutConfig};
use tracing::{error, info};

/// Bind `host:port` and serve until Ctrl-C.
pub async fn run(host: &str, port: u16) -> Result<()> {
    let s = Styled::new();

    let config = ScoutConfig::from_env().context("loading configuration")?;
    let strategy = config.strategy;
    let scanner = Scanner::from_config(config).context("building scanner")?;

    let listener = bind(host, port).await?;
    let addr = listener.local_addr()?;

    info!(%addr, %strategy, "starting legal-scout v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "  {} legal-scout v{} listening on http://{addr} ({strategy} strategy)",
        s.ok_sym(),
        env!("CARGO_PKG_VERSION"),
    );

    axum::serve(listener, router(AppState::new(scanner)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    eprintln!("  {} legal-scout stopped.", s.ok_sym());
    Ok(())
}

/// Bind a listener. `host` may be an IP address or a hostname.
pub(crate) async fn bind(host: &str, port: u16) -> Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
pub(crate) async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received shutdown signal"),
        Err(e) => {
            error!("cannot listen for Ctrl-C, serving until killed: {e}");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_bind_accepts_hostnames() {
        let listener = bind("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());

        let listener = bind("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_shutdown_signal_waits() {
        let waited = tokio::time::timeout(Duration::from_millis(50), shutdown_signal()).await;
        assert!(waited.is_err());
    }
}
