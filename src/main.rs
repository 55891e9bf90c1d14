use actix_web::{web, App, HttpServer};
use log::info;

use live_chess::config::ServerConfig;
use live_chess::models::AppState;
use live_chess::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    info!("Starting live chess server at http://{}", config.bind_addr);
    info!("Serving static files from {}", config.static_dir.display());

    let app_state = web::Data::new(AppState::new());
    let bind_addr = config.bind_addr;
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(config.clone())
            .configure(|cfg| configure_routes(cfg, &config))
    })
    .bind(bind_addr)?
    .run()
    .await
}
