use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{AppConfig, CorsConfig},
    database,
    error::{AppError, Result},
    routes,
};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

/// Opens the pool described by `config` and wires the router around it.
pub async fn build(config: &AppConfig) -> Result<(Router, SqlitePool)> {
    let pool = database::create_pool(&config.database).await?;
    let state = AppState { db: pool.clone() };

    let app = router(state)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors_layer(&config.cors)?);

    Ok((app, pool))
}

pub fn router(state: AppState) -> Router {
    routes::create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_rejects_malformed_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["http://bad\norigin".to_string()],
        };

        assert!(matches!(cors_layer(&config), Err(AppError::ConfigError(_))));
    }

    #[test]
    fn cors_accepts_listed_origins() {
        let config = CorsConfig {
            allowed_origins: vec!["http://localhost:4200".to_string()],
        };

        assert!(cors_layer(&config).is_ok());
    }
}
