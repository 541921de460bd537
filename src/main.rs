use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use gameswipe::config::{ServerSettings, Settings};
use gameswipe::core::Recommender;
use gameswipe::error::{handle_json_payload_error, handle_path_error, handle_query_payload_error};
use gameswipe::routes::{self, AppState};
use gameswipe::services::{AuthService, CacheManager, PostgresClient, RawgClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

fn build_cors(server: &ServerSettings) -> Cors {
    if server.allowed_origins.is_empty() {
        return Cors::permissive();
    }

    server
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting GameSwipe backend...");

    // Initialize PostgreSQL client
    let db_max_conn = settings.database.max_connections.unwrap_or(10);

    let postgres = Arc::new(
        PostgresClient::from_settings(
            &settings.database.url,
            Some(db_max_conn),
            settings.database.min_connections,
            settings.database.acquire_timeout_secs,
            settings.database.idle_timeout_secs,
        )
        .await
        .map_err(|e| startup_error("Failed to connect to PostgreSQL", e))?,
    );

    info!("PostgreSQL client initialized (max: {} connections)", db_max_conn);

    // Initialize catalog client
    let catalog = Arc::new(
        RawgClient::new(
            settings.catalog.base_url.clone(),
            settings.catalog.api_key.clone(),
            Duration::from_secs(settings.catalog.timeout_secs),
        )
        .map_err(|e| startup_error("Failed to build catalog client", e))?,
    );

    // Initialize cache manager (Redis is optional)
    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let l1_cache_size = settings.cache.l1_cache_size.unwrap_or(1000);

    let cache = Arc::new(
        CacheManager::from_settings(settings.cache.redis_url.as_deref(), l1_cache_size, cache_ttl).await,
    );

    info!("Cache manager initialized (L1: {} entries, TTL: {}s)", l1_cache_size, cache_ttl);

    let auth = Arc::new(
        AuthService::new(
            &settings.auth.jwt_secret,
            settings.auth.token_ttl_days,
            settings.auth.bcrypt_cost,
        )
        .map_err(|e| startup_error("Invalid auth configuration", e))?,
    );

    let recommender = Recommender::new(settings.recommendations.clone());

    info!("Recommender initialized with settings: {:?}", settings.recommendations);

    // Build application state
    let app_state = AppState {
        postgres,
        catalog,
        cache,
        auth,
        recommender,
    };

    // Configure HTTP server
    let server = settings.server.clone();
    let host = server.host.clone();
    let port = server.port;
    let workers = server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(build_cors(&server))
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
