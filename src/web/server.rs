//! Serves the API router on a bound listener.

use std::future::Future;
use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use tokio::net::TcpListener;

use super::router::router;
use crate::config::ServerConfig;
use crate::service::AppServices;

/// The API server: shared services plus the limits from configuration.
pub struct ApiServer {
    services: Arc<AppServices>,
    max_body_bytes: usize,
}

impl ApiServer {
    pub fn new(services: Arc<AppServices>, config: &ServerConfig) -> Self {
        Self {
            services,
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// Routes with request logging attached.
    pub fn app(&self) -> Router {
        router(Arc::clone(&self.services), self.max_body_bytes)
            .layer(middleware::from_fn(log_request))
    }

    /// Serves until `shutdown` resolves, then lets in-flight requests finish.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> std::io::Result<()> {
        let local = listener.local_addr()?;
        tracing::info!("API listening on http://{}", local);

        axum::serve(listener, self.app())
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("shutdown requested, no longer accepting connections");
            })
            .await
    }
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let response = next.run(request).await;
    tracing::debug!(%method, %path, status = response.status().as_u16(), "request");
    response
}

/// Binds the configured address.
pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port)).await
}
