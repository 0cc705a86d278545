mod api;
mod app;
mod config;
mod container;
mod domain;
mod infrastructure;
mod services;
mod telemetry;

use config::{AppConfig, StorageBackend};
use container::Container;
use infrastructure::databases::surrealdb;

use actix_web::HttpServer;
use std::sync::Arc;
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Database(#[from] ::surrealdb::Error),
    #[error(transparent)]
    Configuration(#[from] figment::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Migration(String),
    #[error(transparent)]
    Telemetry(#[from] telemetry::TelemetryError),
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    let provider = telemetry::configure(&config.service, &config.logging)?;

    let container = match config.storage.backend {
        StorageBackend::SurrealDb => {
            let conn = surrealdb::connect(&config.surrealdb).await?;

            if config.surrealdb.migration {
                surrealdb::migrate(&conn)
                    .await
                    .map_err(StartupError::Migration)?;
            }

            Container::surrealdb(conn, &config.mailer)
        }
        StorageBackend::Memory => {
            tracing::warn!("accounts are kept in memory and will not survive a restart");
            Container::memory(&config.mailer)
        }
    };

    let container = Arc::new(container);

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "starting http server"
    );

    HttpServer::new(move || app::create(Arc::clone(&container)))
        .bind((config.server.host.as_str(), config.server.port))?
        .run()
        .await?;

    telemetry::shutdown(provider)?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    if let Err(err) = run().await {
        panic!("{err}");
    }
}
