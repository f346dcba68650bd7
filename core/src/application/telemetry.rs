use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "mealmate_core=info";

/// Installs the global fmt subscriber. `RUST_LOG` selects levels and
/// `LOG_FORMAT=json` switches to JSON lines. Safe to call more than once.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    let result = if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).try_init()
    };

    if let Err(e) = result {
        tracing::debug!("tracing subscriber already installed: {}", e);
    }
}
