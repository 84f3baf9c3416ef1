//! OS signal handling.
//!
//! SIGINT (Ctrl+C) and, on Unix, SIGTERM both trigger graceful shutdown.

use crate::lifecycle::shutdown::Shutdown;

/// Wait for the first termination signal.
pub async fn termination() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Trigger `shutdown` when a termination signal arrives.
pub async fn forward_to(shutdown: Shutdown) {
    termination().await;
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}
