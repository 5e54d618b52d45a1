//! Hivefy Marketplace
//!
//! Server-rendered front end of the Hivefy modular marketplace: product
//! catalog, bundle comparison and land-and-expand journeys.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;
mod view;

#[cfg(test)]
mod test_utils;


use adapters::{HttpAnalyticsSink, HttpMarketplaceSource, NoopAnalyticsSink, TracingAnalyticsSink};
use app::{BundleService, CatalogService, JourneyService};
use config::{AnalyticsMode, Config};
use domain::ports::{AnalyticsSink, MarketplaceSource};
use error::AnalyticsError;
use view::Shell;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub bundle_service: Arc<BundleService>,
    pub journey_service: Arc<JourneyService>,
    pub shell: Shell,
    pub config: Config,
}

impl AppState {
    pub fn new(
        config: Config,
        source: Arc<dyn MarketplaceSource>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Self {
        Self {
            catalog_service: Arc::new(CatalogService::new(source.clone(), analytics.clone())),
            bundle_service: Arc::new(BundleService::new(source, analytics.clone())),
            journey_service: Arc::new(JourneyService::new(analytics, config.journey_delay)),
            shell: Shell {
                ga_measurement_id: config.ga_measurement_id.clone(),
            },
            config,
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn analytics_sink(config: &Config) -> Result<Arc<dyn AnalyticsSink>, AnalyticsError> {
    let sink: Arc<dyn AnalyticsSink> = match (config.analytics_mode, &config.analytics_url) {
        (AnalyticsMode::Noop, _) => Arc::new(NoopAnalyticsSink),
        (AnalyticsMode::Log, _) => Arc::new(TracingAnalyticsSink),
        (AnalyticsMode::Http, Some(url)) => Arc::new(HttpAnalyticsSink::new(
            url.clone(),
            config.fetch_timeout,
        )?),
        (AnalyticsMode::Http, None) => {
            tracing::warn!(
                "MARKETPLACE_ANALYTICS=http without MARKETPLACE_ANALYTICS_URL, events are dropped"
            );
            Arc::new(NoopAnalyticsSink)
        }
    };
    Ok(sink)
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let interactions = Router::new()
        .route("/products/:id/view", post(handlers::view_product))
        .route("/products/:id/cart", post(handlers::add_to_cart))
        .route("/bundles/migrate", post(handlers::migrate_bundle))
        .route("/bundles/:id/choose", post(handlers::choose_bundle))
        .route("/bundles/:id/demo", post(handlers::request_bundle_demo))
        .route("/jornadas/:id/milestone", post(handlers::view_milestone))
        .route("/jornadas/:id/start", post(handlers::start_journey))
        .route("/jornadas/:id/demo", post(handlers::request_journey_demo));

    // Keyed on the peer address, so it needs connect info
    let interactions = if state.config.rate_limit {
        let governor_config = GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_millisecond(200)
            .burst_size(20)
            .finish();
        match governor_config {
            Some(config) => interactions.layer(GovernorLayer {
                config: Arc::new(config),
            }),
            None => {
                tracing::warn!("invalid rate limit settings, interactions are not rate limited");
                interactions
            }
        }
    } else {
        interactions
    };

    Router::new()
        .route("/", get(handlers::get_catalog))
        .route("/bundles", get(handlers::get_bundles))
        .route("/jornadas", get(handlers::get_journeys))
        .route("/health", get(health))
        .merge(interactions)
        .nest_service("/configs", ServeDir::new(&state.config.config_dir))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hivefy_marketplace=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hivefy Marketplace...");

    let config = Config::from_env();

    let source: Arc<dyn MarketplaceSource> = Arc::new(HttpMarketplaceSource::new(
        config.config_base_url.clone(),
        config.tenant.clone(),
        config.fetch_timeout,
    )?);
    tracing::info!(
        "Loading marketplace config from {} (tenant {})",
        config.config_base_url,
        config.tenant
    );

    let analytics = analytics_sink(&config)?;
    let port = config.port;
    let app = build_router(AppState::new(config, source, analytics));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
