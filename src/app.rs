//! Application struct that encapsulates server assembly and serving logic.

use crate::cli::RunArgs;
use relay_core::config::Config;
use relay_core::env::{ReadEnv, SystemEnv};
use relay_core::lifecycle::signal::SignalHandler;
use relay_core::lifecycle::{self, Lifecycle};
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

pub struct Application {
    config: Config,
    app_router: axum::Router,
    lifecycle: Box<dyn Lifecycle>,
}

impl Application {
    /// Build the application from CLI args and an already-loaded config.
    pub fn build(args: &RunArgs, mut config: Config) -> anyhow::Result<Self> {
        // CLI overrides
        if let Some(ref host) = args.host {
            config.host = host.clone();
        }
        if let Some(port) = args.port {
            config.port = port;
        }

        let env: Arc<dyn ReadEnv + Send + Sync> = Arc::new(SystemEnv);

        // Presence only; the key is read again on every request.
        if relay_core::env::read_secret(&*env, &config.upstream.api_key_env).is_none() {
            tracing::warn!(
                "{} is not set; requests will be answered with a configuration error",
                config.upstream.api_key_env
            );
        }

        let executor = relay_provider::build_executor(&config.upstream)?;
        tracing::info!(
            upstream = executor.identifier(),
            base_url = %config.upstream.base_url,
            route = %config.route_path,
            "Upstream configured"
        );

        let state = relay_server::AppState::from_config(&config, executor, env.clone());
        let app_router = relay_server::build_router(state, &config.route_path);

        let lifecycle = lifecycle::detect_lifecycle(&*env);

        Ok(Self {
            config,
            app_router,
            lifecycle,
        })
    }

    /// Serve HTTP until a shutdown signal arrives, then drain.
    pub async fn serve(self) -> anyhow::Result<()> {
        let Self {
            config,
            app_router,
            lifecycle,
        } = self;

        let (signal_handler, shutdown_rx) = SignalHandler::new();
        tokio::spawn(async move {
            if let Err(e) = signal_handler.run().await {
                tracing::error!("Signal handler failed: {e}; shutdown only by process kill");
                // Keep the sender alive so the server is not shut down.
                std::future::pending::<()>().await;
            }
        });

        let addr = format!("{}:{}", config.host, config.port);
        tracing::info!("Starting HTTP server on {addr}");
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        lifecycle.on_ready();

        let mut graceful_rx = shutdown_rx.clone();
        let shutdown = async move {
            let _ = graceful_rx.wait_for(|v| *v).await;
        };

        let server = axum::serve(listener, app_router)
            .with_graceful_shutdown(shutdown)
            .into_future();
        tokio::pin!(server);

        // In-flight upstream calls get `shutdown-timeout` seconds to finish.
        let drain_timeout = Duration::from_secs(config.shutdown_timeout);
        let mut drain_rx = shutdown_rx;
        let drain_deadline = async move {
            if drain_rx.wait_for(|v| *v).await.is_ok() {
                tokio::time::sleep(drain_timeout).await;
            } else {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            res = &mut server => res?,
            _ = drain_deadline => {
                tracing::warn!("Drain timeout elapsed, dropping open connections");
            }
        }

        lifecycle.on_stopping();
        tracing::info!("Server shut down.");
        Ok(())
    }
}
