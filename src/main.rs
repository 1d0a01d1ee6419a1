use dioxus_logger::tracing::{self, Level};
use postboard::server::{config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).expect("Failed to initialize logger");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();

    tracing::info!("Starting server");

    if let Err(e) = startup::serve(&config, AppState { db }).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
