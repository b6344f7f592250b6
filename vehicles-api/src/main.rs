// vehicles-api/src/main.rs

use vehicles_api::clients::{MapsClient, PricingClient};
use vehicles_api::config::AppConfig;
use vehicles_api::services::CarService;
use vehicles_api::state::AppState;
use vehicles_api::{db, web};

use actix_web::{web as actix_data, App, HttpServer};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting vehicles API server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // Initialize Database Pool
  let db_pool = match PgPool::connect(&app_config.database_url).await {
    Ok(pool) => {
      tracing::info!("Successfully connected to the database.");
      pool
    }
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      panic!("Database connection error: {}", e);
    }
  };

  // Bootstrap schema (and seed when configured)
  if let Err(e) = db::initialize(&db_pool, app_config.seed_db).await {
    tracing::error!(error = %e, "Failed to initialize the database.");
    panic!("Database initialization error: {}", e);
  }

  // One shared HTTP connection pool for both downstream clients
  let http_client = reqwest::Client::new();
  let car_service = CarService::new(
    db_pool.clone(),
    MapsClient::new(http_client.clone(), app_config.maps_base_url.clone()),
    PricingClient::new(http_client, app_config.pricing_base_url.clone()),
  );

  // Create AppState
  let app_state = AppState {
    car_service,
    config: app_config.clone(),
  };

  // Configure and Start Actix Web Server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
