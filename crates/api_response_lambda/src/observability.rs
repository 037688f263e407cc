use tracing_subscriber::EnvFilter;

/// Installs JSON-line logging for a handler binary. CloudWatch stamps the
/// ingestion time, so records carry no timestamp of their own.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .try_init()
}
