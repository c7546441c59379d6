use std::env;

use dotenvy::dotenv;

use studioflow::models::config::{ServerConfig, load_settings};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "Starting studioflow with APP_ENV={}",
        env::var("APP_ENV").unwrap_or_else(|_| "local".into())
    );

    studioflow::run(server_config).await
}
