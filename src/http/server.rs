//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the employee routes
//! - Wire up middleware (request ID, tracing, timeout, metrics)
//! - Build the upstream client and share it through `AppState`
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::FacadeConfig;
use crate::http::handlers;
use crate::http::request::{make_span, UuidRequestId};
use crate::lifecycle::shutdown;
use crate::observability::metrics;
use crate::proxy::{EmployeeService, Operation};
use crate::upstream::{EmployeeApi, HttpEmployeeApi, UpstreamResult};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub employees: EmployeeService,
}

impl AppState {
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self {
            employees: EmployeeService::new(api),
        }
    }
}

/// HTTP server for the employee facade.
pub struct HttpServer {
    router: Router,
    config: FacadeConfig,
}

impl HttpServer {
    /// Create a server talking to the configured upstream over HTTP.
    pub fn new(config: FacadeConfig) -> UpstreamResult<Self> {
        let api = HttpEmployeeApi::new(&config.upstream)?;
        Ok(Self::with_api(config, Arc::new(api)))
    }

    /// Create a server over any [`EmployeeApi`].
    pub fn with_api(config: FacadeConfig, api: Arc<dyn EmployeeApi>) -> Self {
        let router = build_router(&config, AppState::new(api));
        Self { router, config }
    }

    /// Run the server until `shutdown_rx` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.collection_url(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown::wait_for(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The assembled router, for in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the Axum router with all middleware layers.
///
/// A request that outlives `timeouts.request_secs` is answered with 500.
pub fn build_router(config: &FacadeConfig, state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
        .layer(TraceLayer::new_for_http().make_span_with(make_span))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::INTERNAL_SERVER_ERROR,
            Duration::from_secs(config.timeouts.request_secs),
        ));

    Router::new()
        .route("/", get(handlers::list_all).post(handlers::create))
        .route("/search/{term}", get(handlers::search_by_name))
        .route("/highestSalary", get(handlers::highest_salary))
        .route(
            "/topTenHighestEarningEmployeeNames",
            get(handlers::top_earner_names),
        )
        .route(
            "/{id}",
            get(handlers::get_by_id).delete(handlers::delete_by_id),
        )
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
        .layer(layers)
}

async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let operation = request
        .extensions()
        .get::<MatchedPath>()
        .and_then(|path| Operation::for_route(request.method(), path.as_str()))
        .map_or("unmatched", |operation| operation.as_str());

    let response = next.run(request).await;
    metrics::record_request(operation, response.status().as_u16(), start);
    response
}
