mod cors;
pub mod extractors;
mod fallback;
mod health;
mod modules;
pub mod pipeline;

use std::net::SocketAddr;
use std::time::Instant;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use bastion_config::Config;
use bastion_core::Environment;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use extractors::{FormFields, Params, Payload, Segments};
pub use modules::Module;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    environment: Environment,
}

impl Server {
    /// Build the server from configuration and the module mount table
    ///
    /// # Errors
    ///
    /// Returns an error if a module prefix is malformed or mounted twice
    pub fn new(config: Config, modules: Vec<Module>) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));
        let environment = config.environment;

        let status_state = health::StatusState {
            environment,
            started_at: Instant::now(),
        };

        // Root status endpoint
        let mut app = Router::new().route("/", get(health::status_handler).with_state(status_state));

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, get(health::health_handler));
        }

        // Module routers under the API prefix
        if let Some(api) = modules::compose(modules)? {
            let prefix = &config.server.api_prefix;
            app = if prefix.is_empty() { app.merge(api) } else { app.nest(prefix, api) };
        }

        // Terminal handlers; these emit fixed errors without classification
        app = app
            .fallback(fallback::not_found)
            .method_not_allowed_fallback(fallback::method_not_allowed);

        // Apply middleware layers (innermost first)

        // Body size limit for the body-parsing extractors
        app = app.layer(DefaultBodyLimit::max(config.server.body.limit_bytes));

        // Panics become faults
        app = app.layer(CatchPanicLayer::custom(pipeline::panic_fault));

        // Failure channel: every fault below this point is normalized here, once
        app = app.layer(axum::middleware::from_fn_with_state(
            environment,
            pipeline::fault_middleware,
        ));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // CORS
        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
            environment,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Environment mode the server was built for
    #[must_use]
    pub const fn environment(&self) -> Environment {
        self.environment
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, environment = %self.environment, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
