use anyhow::{bail, Context, Result};
use std::path::PathBuf;

const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 3000;
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:8000,http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_host: String,
    pub http_port: u16,
    pub http_workers: Option<usize>,
    pub seed_file: Option<PathBuf>,
    pub cors_allowed_origins: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_host: DEFAULT_HTTP_HOST.to_string(),
            http_port: DEFAULT_HTTP_PORT,
            http_workers: None,
            seed_file: None,
            cors_allowed_origins: DEFAULT_CORS_ALLOWED_ORIGINS.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the server configuration from the process environment.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let http_host = env_var("HTTP_HOST").unwrap_or(defaults.http_host);

        let http_port = match env_var("HTTP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("HTTP_PORT must be a port number, got {:?}", raw))?,
            None => defaults.http_port,
        };

        let http_workers = match env_var("HTTP_WORKERS") {
            Some(raw) => {
                let workers = raw
                    .parse::<usize>()
                    .with_context(|| format!("HTTP_WORKERS must be a number, got {:?}", raw))?;
                if workers == 0 {
                    bail!("HTTP_WORKERS must be at least 1");
                }
                Some(workers)
            }
            None => defaults.http_workers,
        };

        let seed_file = env_var("SEED_FILE").map(PathBuf::from);

        let cors_allowed_origins =
            env_var("CORS_ALLOWED_ORIGINS").unwrap_or(defaults.cors_allowed_origins);

        Ok(Self {
            http_host,
            http_port,
            http_workers,
            seed_file,
            cors_allowed_origins,
        })
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn allowed_origins(&self) -> impl Iterator<Item = &str> {
        self.cors_allowed_origins
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}

// Unset and blank variables both fall back to defaults.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
