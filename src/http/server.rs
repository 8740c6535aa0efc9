//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the order lookup handler
//! - Wire up middleware (request ID, tracing)
//! - Serve on a pre-bound listener
//! - Drain in-flight requests on shutdown

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::http::orders::{get_order, get_order_missing_id};
use crate::store::StoreClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: StoreClient,
    pub tracer: opentelemetry_sdk::trace::Tracer,
}

/// Build the Axum router with all middleware layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/orders/{id}", get(get_order))
        .route("/v1/orders/", get(get_order_missing_id))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
}

/// HTTP server for the orders API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given application state.
    pub fn new(state: AppState) -> Self {
        Self {
            router: build_router(state),
        }
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
