use miniapp_backend::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load env
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr;

    tracing::info!(
        app = ?config.mini_app,
        chain = config.chain.name,
        contract = ?config.contract_address,
        encoding = ?config.tx_encoding,
        "starting mini app backend"
    );

    let state = AppState::new(config)?;
    let app = miniapp_backend::app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
