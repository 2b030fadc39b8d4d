use productivity_sheet::{AppState, Config, SubmitClient, Table, load_context, router};
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let context = load_context(&config.context_path).await;
    info!(
        user = %context.user.name,
        department = %context.user.department,
        rows = context.entries.len(),
        "loaded page context"
    );

    let table = Table::from_records(context.entries);
    let submit = SubmitClient::new(&config.save_base_url);
    info!("saving to {}", submit.endpoint());

    let state = AppState::new(context.user, context.summary, table, submit);
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
