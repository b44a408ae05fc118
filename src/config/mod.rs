use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtSettings,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "Development",
            Environment::Staging => "Staging",
            Environment::Production => "Production",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection string, e.g. `sqlite::memory:` or `sqlite://sehd.db?mode=rwc`
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
    /// Insert reference and sample data when the store is empty
    pub seed: bool,
}

/// Token signing settings. `key` is the shared HMAC secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtSettings {
    #[serde(skip_serializing)]
    pub key: String,
    pub issuer: String,
    pub audience: String,
    pub expiry_days: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub cors_origins: Vec<String>,
    /// Registers the diagnostics endpoint that echoes raw store errors
    pub expose_diagnostics: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(port) = env::var("SEHD_API_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|v| v.parse().ok())
        {
            self.server.port = port;
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Ok(v) = env::var("DATABASE_SEED") {
            self.database.seed = v.parse().unwrap_or(self.database.seed);
        }

        // JWT overrides
        if let Ok(v) = env::var("JWT_KEY") {
            self.jwt.key = v;
        }
        if let Ok(v) = env::var("JWT_ISSUER") {
            self.jwt.issuer = v;
        }
        if let Ok(v) = env::var("JWT_AUDIENCE") {
            self.jwt.audience = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRY_DAYS") {
            self.jwt.expiry_days = v.parse().unwrap_or(self.jwt.expiry_days);
        }

        // Security overrides
        if let Ok(v) = env::var("CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Ok(v) = env::var("SECURITY_EXPOSE_DIAGNOSTICS") {
            self.security.expose_diagnostics = v.parse().unwrap_or(self.security.expose_diagnostics);
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 5000 },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                connection_timeout: 30,
                seed: true,
            },
            jwt: JwtSettings {
                key: "sehd-development-signing-key-change-me-0123456789".to_string(),
                issuer: "SEHD.API".to_string(),
                audience: "SEHD.Dashboard".to_string(),
                expiry_days: 7,
            },
            security: SecurityConfig {
                cors_origins: vec![
                    "http://localhost:3000".to_string(),
                    "http://localhost:5173".to_string(),
                    "https://localhost:5173".to_string(),
                    "http://localhost:5174".to_string(),
                    "https://localhost:5174".to_string(),
                ],
                expose_diagnostics: true,
            },
        }
    }

    pub fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 8080 },
            database: DatabaseConfig {
                url: "sqlite://sehd.db?mode=rwc".to_string(),
                max_connections: 5,
                connection_timeout: 10,
                seed: true,
            },
            jwt: JwtSettings {
                key: String::new(),
                issuer: "SEHD.API".to_string(),
                audience: "SEHD.Dashboard".to_string(),
                expiry_days: 1,
            },
            security: SecurityConfig {
                cors_origins: vec!["https://staging.sehd.example.edu".to_string()],
                expose_diagnostics: false,
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 8080 },
            database: DatabaseConfig {
                url: "sqlite://sehd.db?mode=rwc".to_string(),
                max_connections: 10,
                connection_timeout: 5,
                seed: false,
            },
            jwt: JwtSettings {
                // Must come from JWT_KEY; an empty key refuses to sign
                key: String::new(),
                issuer: "SEHD.API".to_string(),
                audience: "SEHD.Dashboard".to_string(),
                expiry_days: 1,
            },
            security: SecurityConfig {
                cors_origins: vec!["https://sehd.example.edu".to_string()],
                expose_diagnostics: false,
            },
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
