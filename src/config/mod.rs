use crate::core::{AppError, Result};
use crate::modules::taxes::TaxPolicyConfig;
use std::env;
use std::path::PathBuf;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    /// YAML file with the pensioner / recovery / NPS-exempt id lists
    pub tax_policy_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "debug".to_string()),
                json_logs: env::var("LOG_FORMAT")
                    .map(|format| format.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            tax_policy_path: env::var("TAX_POLICY_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size == 0 {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "SERVER_WORKERS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Policy from `TAX_POLICY_PATH`, or the built-in lists when unset
    pub fn load_tax_policy(&self) -> Result<TaxPolicyConfig> {
        match &self.tax_policy_path {
            Some(path) => TaxPolicyConfig::load(path),
            None => {
                tracing::info!("TAX_POLICY_PATH not set, using built-in tax policy");
                Ok(TaxPolicyConfig::default())
            }
        }
    }
}
