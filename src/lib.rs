use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::api::{api_clients, api_projects};
use crate::routes::client::show_client;
use crate::routes::main::{show_clients, show_index, show_projects};
use crate::routes::project::show_project;
use crate::search::render::{ClientRowRenderer, ProjectRowRenderer};

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod search;
pub mod services;

/// Registers the JSON search API under `/api` and the list and detail pages.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(api_clients)
            .service(api_projects),
    )
    .service(show_index)
    .service(show_clients)
    .service(show_client)
    .service(show_projects)
    .service(show_project);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let client_rows = ClientRowRenderer::new()
        .map_err(|e| std::io::Error::other(format!("Row template error: {e}")))?;
    let project_rows = ProjectRowRenderer::new()
        .map_err(|e| std::io::Error::other(format!("Row template error: {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", &server_config.assets_dir))
            .configure(configure_routes)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(client_rows.clone()))
            .app_data(web::Data::new(project_rows.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
