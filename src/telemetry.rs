use crate::config::CaseConfig;
use tracing_subscriber::EnvFilter;

/// Installs a compact stderr subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is harmless:
/// the second global install fails quietly.
pub fn init(config: &CaseConfig) {
    let filter = env_filter(config);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}

fn env_filter(config: &CaseConfig) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(from_env.as_deref(), &config.log_level)
}

/// First directive set that parses wins; `info` is the last resort.
fn build_filter(from_env: Option<&str>, configured: &str) -> EnvFilter {
    from_env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
