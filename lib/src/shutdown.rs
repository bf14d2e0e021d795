use tokio::signal;
use tracing::{error, info};

pub struct Shutdown;

impl Shutdown {
    /// Resolves on Ctrl+C or SIGTERM, logging `message` once it does.
    pub async fn signal(message: &str) {
        let ctrl_c = async {
            if let Err(error) = signal::ctrl_c().await {
                error!(%error, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut terminate) => {
                    terminate.recv().await;
                },
                Err(error) => {
                    error!(%error, "Failed to install SIGTERM handler");
                    std::future::pending::<()>().await;
                },
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {},
            _ = terminate => {},
        }

        info!("{message}");
    }
}
