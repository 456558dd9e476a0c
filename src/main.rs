use campus_api::api::routes::route_banner;
use campus_api::config::AppConfig;
use campus_api::Dataset;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default, RUST_LOG overrides
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Campus API: read-only course records server");

    let config = AppConfig::load()?;
    println!("{}", config.summary());

    // A missing or malformed document stops startup here
    let dataset = Dataset::load(&config.data.path)?;

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    println!("{}", route_banner(&bind_address));

    campus_api::serve(listener, dataset).await
}
