use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{JwtError, TokenIssuer};
use crate::config::AppConfig;

/// Shared by every handler; immutable after start-up
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<AppConfig>,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    /// Fails when the configuration carries no signing key
    pub fn new(pool: SqlitePool, config: AppConfig) -> Result<Self, JwtError> {
        let tokens = TokenIssuer::new(&config.jwt)?;
        Ok(Self {
            pool,
            config: Arc::new(config),
            tokens: Arc::new(tokens),
        })
    }
}
