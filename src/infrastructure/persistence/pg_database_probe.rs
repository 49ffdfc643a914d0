use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use crate::application::ports::DatabaseProbe;

/// Runs `SELECT 1` against PostgreSQL. Without a pool it always reports unreachable.
pub struct PgDatabaseProbe {
    pool: Option<PgPool>,
}

impl PgDatabaseProbe {
    pub fn new(pool: PgPool) -> Self {
        Self { pool: Some(pool) }
    }

    pub fn unconfigured() -> Self {
        Self { pool: None }
    }
}

#[async_trait]
impl DatabaseProbe for PgDatabaseProbe {
    #[instrument(skip(self))]
    async fn is_reachable(&self) -> bool {
        let Some(pool) = &self.pool else {
            return false;
        };

        match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database probe failed");
                false
            }
        }
    }
}
