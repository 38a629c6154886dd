use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use redpulse::config::{Settings, StoreBackend};
use redpulse::routes::{self, AppState};
use redpulse::services::{MatchCache, MemoryStore, PostgresStore, RecordStore, TokenIssuer};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(level: &str, format: &str) {
    // RUST_LOG, when set, takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match format {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.json().init(),
    }
}

async fn build_store(settings: &Settings) -> std::io::Result<Arc<dyn RecordStore>> {
    match settings.store.backend {
        StoreBackend::Memory => {
            let store = if settings.store.seed_demo_data {
                info!("Using in-memory store with demo data");
                MemoryStore::seeded()
            } else {
                info!("Using empty in-memory store");
                MemoryStore::new()
            };
            Ok(Arc::new(store))
        }
        StoreBackend::Postgres => {
            let store = PostgresStore::from_settings(
                &settings.database.url,
                settings.database.max_connections,
                settings.database.min_connections,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;
            info!("PostgreSQL store initialized");
            Ok(Arc::new(store))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting RedPulse matching service...");

    if settings.auth.uses_dev_secret() {
        warn!("auth.jwt_secret is the development default; set REDPULSE__AUTH__JWT_SECRET");
    }

    let store = build_store(&settings).await?;
    let cache = MatchCache::new(settings.cache.max_entries, settings.cache.ttl_secs);
    let tokens = TokenIssuer::new(&settings.auth.jwt_secret, settings.auth.token_ttl_secs);

    info!(
        "Match cache initialized ({} entries, TTL: {}s)",
        settings.cache.max_entries, settings.cache.ttl_secs
    );

    let app_state = AppState::new(store, cache, tokens);

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_app)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
