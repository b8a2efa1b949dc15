use crate::{config::DatabaseConfig, error::Result};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};

pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let mut options = SqlitePoolOptions::new().max_connections(config.max_connections);

    if config.is_in_memory() {
        // Every new connection would otherwise open an empty database.
        options = options
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = options.connect(&config.url).await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!(
        "Database connection established with {} max connections",
        pool.options().get_max_connections()
    );

    Ok(pool)
}

pub async fn check_health(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1").fetch_one(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory() -> DatabaseConfig {
        DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 5,
        }
    }

    #[tokio::test]
    async fn in_memory_pool_is_pinned_to_one_connection() {
        let pool = create_pool(&in_memory()).await.unwrap();
        assert_eq!(pool.options().get_max_connections(), 1);
        check_health(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn migrations_create_product_table() {
        let pool = create_pool(&in_memory()).await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM PRODUCT_TBL")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(count, 0);
    }
}
