use dotenvy::dotenv;
use std::sync::Arc;

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;

use application::BlogService;
use data::post_repository::InMemoryPostRepository;
use infrastructure::{config::ServerConfig, logging::init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    init_logging();

    let config = ServerConfig::from_env()?;

    tracing::info!("Starting blog server...");
    tracing::info!("HTTP server will listen on {}", config.http_addr());
    tracing::info!("CORS allowed origins: {}", config.cors_allowed_origins);

    let post_repo = Arc::new(InMemoryPostRepository::new());
    let blog_service = Arc::new(BlogService::new(post_repo));

    run_http_server(config, blog_service).await?;

    tracing::info!("Shutting down...");
    Ok(())
}

/// Configure CORS for the HTTP server with allowed origins from .env
fn configure_cors(config: &ServerConfig) -> actix_cors::Cors {
    use actix_cors::Cors;
    use actix_web::http::header;

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    for origin in config.cors_origins() {
        cors = cors.allowed_origin(origin);
        tracing::debug!("Added allowed CORS origin: {}", origin);
    }

    cors
}

async fn run_http_server(
    config: ServerConfig,
    blog_service: Arc<BlogService>,
) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    let addr = config.http_addr();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors(&config))
            .app_data(web::Data::new(blog_service.clone()))
            .configure(presentation::configure)
    })
    .bind(&addr)?
    .run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
