use std::future::Future;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use timepage_core::{Clock, FormatCatalog, SystemClock};

use crate::config::Config;
use crate::error::TimepageError;
use crate::handlers::AppState;
use crate::routing;

/// The timepage application.
///
/// ```rust,no_run
/// use timepage::{App, Config};
///
/// # async fn run() -> Result<(), timepage::TimepageError> {
/// App::new(Config::from_env()).run().await
/// # }
/// ```
pub struct App {
    pub config: Config,
    catalog: Arc<FormatCatalog>,
    clock: Arc<dyn Clock>,
}

impl App {
    /// Create an application with the stock format catalog and the wall clock.
    pub fn new(config: Config) -> Self {
        App {
            config,
            catalog: Arc::new(FormatCatalog::default()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Serve a different format catalog.
    pub fn with_catalog(mut self, catalog: FormatCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    /// Read the time from `clock` instead of the wall clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn catalog(&self) -> &FormatCatalog {
        &self.catalog
    }

    /// Build the Axum router.
    pub fn router(&self) -> Router {
        let state = AppState {
            catalog: self.catalog.clone(),
            clock: self.clock.clone(),
        };

        let mut router = routing::build_routes().with_state(state);

        // Request tracing and ids are development-only.
        if self.config.is_dev() {
            use tower_http::LatencyUnit;
            use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse};

            let x_request_id = axum::http::HeaderName::from_static("x-request-id");
            router = router
                .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
                .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(
                            DefaultOnResponse::new()
                                .level(tracing::Level::INFO)
                                .latency_unit(LatencyUnit::Millis),
                        ),
                );
        }

        router
    }

    /// Serve on `listener` until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<(), TimepageError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.router();
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn run(self) -> Result<(), TimepageError> {
        let addr = self.config.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| TimepageError::Bind {
                addr: addr.clone(),
                source,
            })?;

        tracing::info!(
            "timepage running on http://{} (environment: {}, formats: {})",
            addr,
            self.config.environment,
            self.catalog.len()
        );

        self.serve(listener, shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {}", err);
        return;
    }
    tracing::info!("Shutting down timepage...");
}
