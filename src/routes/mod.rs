use actix_files as fs;
use actix_web::{web, Result};

use crate::config::ServerConfig;

/// HTTP handler for the index page
pub async fn index(config: web::Data<ServerConfig>) -> Result<fs::NamedFile> {
    Ok(fs::NamedFile::open_async(config.index_path()).await?)
}

/// Configure the HTTP routes
pub fn configure_routes(cfg: &mut web::ServiceConfig, config: &ServerConfig) {
    cfg.service(web::resource("/ws").route(web::get().to(crate::websocket::ws_index)))
        .service(web::resource("/").route(web::get().to(index)))
        .service(fs::Files::new("/static", config.static_dir.clone()));
}
