use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

use crate::application::ports::RepositoryError;

/// Builds a pool that connects on first use, so startup never waits on the database.
#[instrument(skip(url))]
pub fn create_pool(
    url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, RepositoryError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_lazy(url)
        .map_err(|e| RepositoryError::StorageFailed(e.to_string()))?;

    info!("PostgreSQL connection pool configured");
    Ok(pool)
}
