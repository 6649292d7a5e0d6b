use dotenvy::dotenv;
use std::sync::Arc;

use posts_server::application::PostService;
use posts_server::data::InMemoryPostRepository;
use posts_server::infrastructure::{config::AppConfig, logging::init_logging, seed::load_seed};
use posts_server::presentation::configure_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    init_logging();

    let config = AppConfig::from_env()?;

    tracing::info!("Starting posts server...");
    tracing::info!("HTTP server will listen on {}", config.http_addr());
    tracing::info!("CORS allowed origins: {}", config.cors_allowed_origins);

    let seed = load_seed(config.seed_file.as_deref())?;

    let post_repo = Arc::new(InMemoryPostRepository::new(seed));
    let post_service = Arc::new(PostService::new(post_repo));

    tracing::info!("Services initialized successfully");

    run_http_server(config, post_service).await?;

    tracing::info!("Shutting down...");
    Ok(())
}

/// Configure CORS for the HTTP server with allowed origins from the environment
fn configure_cors(config: &AppConfig) -> actix_cors::Cors {
    use actix_cors::Cors;
    use actix_web::http::header;

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    for origin in config.allowed_origins() {
        cors = cors.allowed_origin(origin);
        tracing::debug!("Added allowed CORS origin: {}", origin);
    }

    cors
}

async fn run_http_server(config: AppConfig, post_service: Arc<PostService>) -> anyhow::Result<()> {
    use actix_web::{middleware::Logger, web, App, HttpServer};

    tracing::info!("Configuring HTTP server...");

    let addr = config.http_addr();
    let cors_config = config.clone();

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(configure_cors(&cors_config))
            .app_data(web::Data::new(post_service.clone()))
            .configure(configure_routes)
    });

    if let Some(workers) = config.http_workers {
        server = server.workers(workers);
    }

    let server = server.bind(&addr)?.run();

    tracing::info!("HTTP server running on {}", addr);

    server.await?;

    Ok(())
}
