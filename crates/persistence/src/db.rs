//! Database connection pool management.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

/// Creates a PostgreSQL connection pool with the given configuration.
///
/// Connections are established lazily: an unreachable database does not
/// stop the process from starting, it only fails the requests that need
/// the store. Only a malformed connection URL is an immediate error.
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_lazy(&config.url)
}

/// Checks whether the store is reachable.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_secs: 1,
            idle_timeout_secs: 600,
        }
    }

    #[tokio::test]
    async fn test_create_pool_lazy_does_not_connect() {
        // Nothing listens on this address; lazy pool creation still succeeds.
        let config = test_config("postgres://postgres@127.0.0.1:9/confreg");
        assert!(create_pool(&config).is_ok());
    }

    #[test]
    fn test_create_pool_rejects_malformed_url() {
        let config = test_config("not-a-connection-string");
        assert!(create_pool(&config).is_err());
    }

    #[tokio::test]
    async fn test_ping_fails_when_unreachable() {
        let config = test_config("postgres://postgres@127.0.0.1:9/confreg");
        let pool = create_pool(&config).expect("lazy pool");
        assert!(ping(&pool).await.is_err());
    }
}
