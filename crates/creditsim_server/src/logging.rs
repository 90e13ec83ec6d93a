use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to stderr.
///
/// The filter comes from `RUST_LOG` when set, otherwise from `level`.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    let default_filter =
        format!("creditsim_server={level},creditsim_core=warn,tower_http=info");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!("logging initialized (filter={default_filter})");
    Ok(())
}
