use recordbook_domain::Config;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// `RUST_LOG` wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.logging.level)));

    if config.logging.json {
        registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        registry()
            .with(filter)
            .with(fmt::layer().with_target(false))
            .init();
    }
}

fn default_directives(level: &str) -> String {
    format!(
        "{level},recordbook={level},hickory_proto=warn,tower_http=info,hyper=warn",
        level = level
    )
}
