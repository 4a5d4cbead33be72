mod api_models;
mod configurations;
mod constants;
mod handlers;
mod routes;

use actix_cors::Cors;
use actix_web::{
    App, HttpResponse, HttpServer,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web,
};
use anyhow::Context;
use log::info;

use crate::api_models::general::ErrorResponse;
use crate::configurations::system::Config;
use crate::routes::configure_routes;

/// Turns the extractor's rejection into a machine-readable JSON body while
/// keeping the 400 status.
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let message = err.to_string();
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ErrorResponse { error: message }),
    )
    .into()
}

/// Assembles the application served by every worker: request logging,
/// permissive CORS, the JSON extractor config, and the route table.
fn create_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Logger::default())
        .wrap(Cors::permissive())
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(configure_routes)
}

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    // Load configuration first
    let config_path: String =
        std::env::var("CONFIG_PATH").unwrap_or_else(|_| "./config.json".to_string());
    let config: Config = match Config::load_from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation failed: {}", e);
        std::process::exit(1);
    }

    // Initialize logger with config level
    env_logger::Builder::from_default_env()
        .filter_level(match config.logging.level.as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        })
        .init();

    info!("Starting {}...", constants::APP_NAME);
    info!(
        "Configuration: Server {}:{}",
        config.server.host, config.server.port
    );

    // Start HTTP server
    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    info!("Starting HTTP server on {}", bind_address);

    let mut server = HttpServer::new(create_app);

    // Set number of workers if specified
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
        info!("Using {} worker threads", workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind to {}", bind_address))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
        .run()
        .await
}
