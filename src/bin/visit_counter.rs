use std::str::FromStr;
use std::sync::Arc;

use sentry::types::Dsn;
use sentry_tracing::EventFilter;
use visit_counter::countapi::CountApi;
use visit_counter::http::Server;
use visit_counter::{Config, Result};

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> Result<()> {
    let config =
        Arc::new(Config::from_env().expect("Failed to load config from environment variables"));

    let _guard = configure_observability(&config);

    let counter = CountApi::new(Arc::clone(&config));
    let server = Server::new(config, counter);

    info!("Starting server...");
    server.start().await
}

fn configure_observability(config: &Config) -> sentry::ClientInitGuard {
    let _guard = sentry::init(sentry::ClientOptions {
        dsn: config
            .sentry_dsn
            .clone()
            .map(|dsn| Dsn::from_str(dsn.as_str()).expect("Invalid DSN")),
        debug: config.debug_mode,
        release: sentry::release_name!(),
        ..Default::default()
    });

    let sentry_layer = sentry_tracing::layer().event_filter(|meta| match meta.level() {
        &tracing::Level::ERROR | &tracing::Level::WARN => EventFilter::Exception,
        _ => EventFilter::Ignore,
    });

    let registry = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(sentry_layer);

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    _guard
}
