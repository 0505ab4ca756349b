use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

use crate::auth::{decode_secret_key, AuthConfig};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DB_PATH: &str = "./db/app.db";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub auth: AuthConfig,
}

fn env_var(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

impl Config {
    /// Reads the configuration from the environment, loading `.env` first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mut listen_addr: SocketAddr = env_var(&["ST_LISTEN_ADDR"])
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid ST_LISTEN_ADDR")?;
        if let Some(port) = env_var(&["PORT"]) {
            listen_addr.set_port(port.parse().context("Invalid PORT")?);
        }

        let db_path =
            env_var(&["ST_DB_PATH", "DATABASE_URL"]).unwrap_or_else(|| DEFAULT_DB_PATH.into());

        let cors_allow = env_var(&["ST_CORS_ALLOW_ORIGINS", "FRONTEND_URL"])
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout_ms: u64 = env_var(&["ST_REQUEST_TIMEOUT_MS"])
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let jwt_secret = env_var(&["ST_JWT_SECRET"]).context("ST_JWT_SECRET must be set")?;
        let ttl_secs: u64 = env_var(&["ST_ACCESS_TOKEN_TTL_SECS"])
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            auth: AuthConfig {
                jwt_secret: decode_secret_key(&jwt_secret)?,
                access_token_ttl: Duration::from_secs(ttl_secs),
            },
        })
    }
}
