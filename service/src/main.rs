// catalog_ingest/src/main.rs

use catalog_ingest::bootstrap::connect_with_retry;
use catalog_ingest::config::{AppConfig, LogFormat};
use catalog_ingest::state::AppState;
use catalog_ingest::store::PgCatalogStore;
use catalog_ingest::telemetry::init_tracing;
use catalog_ingest::web::configure_app_routes;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  dotenvy::dotenv().ok();
  let log_format = LogFormat::from_env();
  init_tracing(*log_format.as_ref().unwrap_or(&LogFormat::Pretty));
  if let Err(e) = &log_format {
    tracing::warn!(error = %e, "Falling back to pretty log output.");
  }

  tracing::info!("Starting catalog ingestion server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(e).context("configuration error");
    }
  };

  // Store Bootstrap. Nothing else starts until this succeeds.
  let store = {
    let database_url = app_config.database_url.clone();
    let max_connections = app_config.db_max_connections;
    let connected = connect_with_retry(&app_config.store_retry, |attempt| {
      let database_url = database_url.clone();
      async move {
        tracing::debug!(attempt, "Opening database pool.");
        PgCatalogStore::connect(&database_url, max_connections).await
      }
    })
    .await;

    match connected {
      Ok(store) => Arc::new(store),
      Err(e) => {
        tracing::error!(error = %e, "Backing store unavailable; exiting without opening the listener.");
        std::process::exit(1);
      }
    }
  };

  let app_state = AppState::new(store.clone(), store.clone(), app_config.clone());

  let server_address = app_config.server_address();
  tracing::info!("Server listening on: http://{}", server_address);

  let served = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("failed to bind {}", server_address))?
  .run()
  .await;

  // The listener has stopped (signal or error); release the pool either way.
  store.close().await;
  served.context("server terminated with an error")
}
