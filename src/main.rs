use axum::serve;
use people_table::api::routes::create_app_from_config;
use people_table::config::AppConfig;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging, keeping the HTTP client quiet
    use env_logger::Builder;
    use log::LevelFilter;

    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .parse_default_env()
        .init();

    log::info!("People Table server");

    let config = AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{}, people api={}",
        config.server.host,
        config.server.port,
        config.api.people_url
    );

    let app = create_app_from_config(&config);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("People Table running on http://{}/people", bind_address);

    serve(listener, app).await?;

    Ok(())
}
