use clap::Parser;
use creditsim_server::{ServerArgs, build_app, init_logging};

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = ServerArgs::parse();
    init_logging(&args.log_level)?;

    let app = build_app(&args)?;

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}
