mod analysis;
mod config;
mod factory;
mod fetch;
mod routes;
mod translation;
mod vision;

use actix_web::{App, HttpServer, web};
use aws_config::BehaviorVersion;
use config::AppConfig;
use routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {:?}", e);
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Configuration error: {}", e),
        )
    })?;

    // Credentials and region come from the standard AWS provider chain
    let aws_config = aws_config::defaults(BehaviorVersion::latest()).load().await;

    let handler = factory::build_handler(&config, &aws_config).map_err(|e| {
        log::error!("Failed to build image analysis handler: {:?}", e);
        std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Handler construction failed: {}", e),
        )
    })?;
    let handler = web::Data::new(handler);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    log::info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(handler.clone())
            .configure(configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
