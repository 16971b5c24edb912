//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the dispatch handler
//! - Wire up middleware (tracing, body limit, CORS)
//! - Dispatch each request to exactly one terminal handler
//! - Serve on a listener until the shutdown signal fires

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::GatewayConfig;
use crate::proxy::CompileProxy;
use crate::routing::{RouteTarget, Router as RouteTable};
use crate::security;
use crate::static_files::StaticFiles;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
    pub compile: Arc<CompileProxy>,
    pub files: Arc<StaticFiles>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Fails only if the upstream HTTP client cannot be built.
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let state = AppState {
            routes: Arc::new(RouteTable::gateway()),
            compile: Arc::new(CompileProxy::new(&config.upstream)?),
            files: Arc::new(StaticFiles::new(&config.static_files)),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        let router = Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(security::body_limit(&config.limits)),
            );

        security::with_cors(router)
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` receives a value (or its sender is dropped).
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.url,
            static_root = %self.config.static_files.root.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!(address = %addr, "HTTP server stopped");
        Ok(())
    }
}

/// Single entry point: resolve the route, then hand off to one handler.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    match state.routes.resolve(&request) {
        RouteTarget::Preflight => StatusCode::NO_CONTENT.into_response(),
        RouteTarget::Compile => {
            let body = match <Bytes as FromRequest<AppState>>::from_request(request, &state).await {
                Ok(body) => body,
                Err(rejection) => {
                    tracing::warn!(
                        status = rejection.status().as_u16(),
                        reason = %rejection.body_text(),
                        "Compile body rejected"
                    );
                    return rejection.into_response();
                }
            };
            state.compile.forward(body).await.into_response()
        }
        RouteTarget::Static => state.files.serve(request.uri()).await,
    }
}
