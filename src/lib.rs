pub mod config;
pub mod domain;
pub mod error;
pub mod props;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub fn init_logging() {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_target(false)
        .with_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,rdv_core=debug".into()),
        );

    tracing_subscriber::registry().with(stdout_layer).init();

    info!("Logging initialized");
}
