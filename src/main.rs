//! Credit Sync service entrypoint.
//!
//! Webhook service keeping user plans and credit balances in sync with
//! Stripe.
//!
//! ## Endpoints
//!
//! - `GET /` - Liveness probe
//! - `POST /webhook` - Stripe webhook handler

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use credit_sync::adapters::{app_router, AppState, PostgresUserStore, StripeClient};
use credit_sync::application::ReconcileWebhookHandler;
use credit_sync::config::AppConfig;
use credit_sync::domain::billing::WebhookVerifier;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load and validate configuration (also loads .env if present)
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!(
        port = config.server.port,
        environment = ?config.server.environment,
        "Starting credit-sync"
    );

    // Create database pool
    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;
    tracing::info!("Database pool created");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Migrations applied");
    }

    // Wire up the reconciliation handler
    let verifier = WebhookVerifier::with_tolerances(
        config.stripe.webhook_secret.clone(),
        config.stripe.max_event_age_secs,
        config.stripe.max_clock_skew_secs,
    );
    let catalog = config.plans.catalog()?;
    tracing::info!(price_ids = catalog.len(), "Plan catalog loaded");

    let provider = StripeClient::new(config.stripe.api_key.clone())
        .with_base_url(config.stripe.api_base_url.clone());
    let store = PostgresUserStore::new(pool)
        .with_case_insensitive_lookup(config.database.case_insensitive_lookup);

    let reconciler =
        ReconcileWebhookHandler::new(verifier, catalog, Arc::new(provider), Arc::new(store));
    let state = AppState {
        reconciler: Arc::new(reconciler),
    };

    // Build middleware stack (order matters - outermost first)
    let middleware = ServiceBuilder::new()
        // Request ID propagation (outermost)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        // Tracing with request details
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Request timeout (innermost - closest to handler)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let app = app_router().layer(middleware).with_state(state);

    let addr = config.server.socket_addr();
    tracing::info!("HTTP server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the configured filter. Production emits JSON lines,
/// everything else gets human-readable output.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
