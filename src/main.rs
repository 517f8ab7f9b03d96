use std::io;

use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use book_library_api::{catalog::CatalogClient, config::Config, db, routes};

fn startup_error(context: &str, err: impl std::fmt::Display) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|e| startup_error("Invalid configuration", e))?;

    let pool = db::connect(&config)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;
    db::migrate(&pool)
        .await
        .map_err(|e| startup_error("Failed to run migrations", e))?;

    let catalog = CatalogClient::new(&config.catalog)
        .map_err(|e| startup_error("Failed to build catalog client", e))?;

    let pool = web::Data::new(pool);
    let jwt = web::Data::new(config.jwt.clone());
    let catalog = web::Data::new(catalog);

    log::info!("Starting Book Library API at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(pool.clone())
            .app_data(jwt.clone())
            .app_data(catalog.clone())
            .wrap(routes::cors())
            .wrap(routes::cors_wildcard_header())
            .wrap(Logger::default())
            .configure(routes::config)
            .default_service(web::to(routes::not_found))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
