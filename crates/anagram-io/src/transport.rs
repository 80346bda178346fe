use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Binds a listener and serves the router until it stops
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn serve(&self, addr: &str, router: Router) -> Result<(), TransportError>;
}

/// Plain TCP listener, shut down gracefully when the token is cancelled
pub struct TcpTransport {
    shutdown: CancellationToken,
}

impl TcpTransport {
    pub fn new(shutdown: CancellationToken) -> Self {
        Self { shutdown }
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn serve(&self, addr: &str, router: Router) -> Result<(), TransportError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| TransportError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        tracing::info!("Listening on http://{}", listener.local_addr()?);

        let shutdown = self.shutdown.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { shutdown.cancelled().await })
            .await?;

        Ok(())
    }
}
