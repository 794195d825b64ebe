//! PostgreSQL pool construction and startup checks.

use crate::{DbError, Result as DbErrorResult};

use ua_config::DatabaseConfig;

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Build the connection pool, verify the database is reachable and apply
/// pending migrations.
///
/// Any failure here is meant to abort startup.
pub async fn connect(config: &DatabaseConfig) -> DbErrorResult<PgPool> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| DbError::Initialization {
            message: "database url is not configured".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let options = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .max_lifetime(config.max_lifetime())
        .idle_timeout(config.idle_timeout())
        .acquire_timeout(config.connect_timeout());

    // `connect` opens one connection up front, which doubles as the
    // reachability check.
    let pool = tokio::time::timeout(config.connect_timeout(), options.connect(url))
        .await
        .map_err(|_| DbError::Timeout {
            message: format!(
                "database not reachable within {}s",
                config.connect_timeout_secs
            ),
            location: ErrorLocation::from(Location::caller()),
        })??;

    info!("Database connection established");

    if config.run_migrations {
        run_migrations(&pool).await?;
    } else {
        info!("Skipping database migrations (disabled by configuration)");
    }

    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> DbErrorResult<()> {
    info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Migrations complete");
    Ok(())
}
