use inkpot_core::admin::AdminList;
use inkpot_storage::StorageConfig;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development except
/// `JWT_SECRET`, which must be set. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Administrator allow-list parsed from `ADMIN_EMAILS`.
    pub admins: AdminList,
    /// Object storage settings for the public image bucket.
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `HOST`                 | `0.0.0.0`                     |
    /// | `PORT`                 | `3000`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                          |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                          |
    /// | `ADMIN_EMAILS`         | (empty -- nobody is admin)    |
    /// | `S3_ENDPOINT`          | `http://localhost:9000`       |
    /// | `S3_REGION`            | `us-east-1`                   |
    /// | `S3_BUCKET`            | `blog-images`                 |
    /// | `S3_PUBLIC_BASE_URL`   | `{S3_ENDPOINT}/{S3_BUCKET}`   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();

        let admins =
            AdminList::from_comma_separated(&std::env::var("ADMIN_EMAILS").unwrap_or_default());

        let endpoint =
            std::env::var("S3_ENDPOINT").unwrap_or_else(|_| "http://localhost:9000".into());
        let bucket = std::env::var("S3_BUCKET").unwrap_or_else(|_| "blog-images".into());
        let storage = StorageConfig {
            public_base_url: std::env::var("S3_PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("{endpoint}/{bucket}")),
            region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".into()),
            endpoint,
            bucket,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt,
            admins,
            storage,
        }
    }
}
