// This module setup the logger level.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the configured level when it is set.
pub fn setup(logger_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "gamecatalog_app={logger_level},gamecatalog_infrastructure={logger_level},gamecatalog_routing={logger_level},tower_http={logger_level}"
        ))
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
