use std::env;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5173",
];

/// Process-level settings read from the environment once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    /// JSON catalog file; the built-in table is used when absent.
    pub catalog_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read `VETO_HOST`, `VETO_PORT`, `CORS_ALLOWED_ORIGINS` and `VETO_CATALOG_PATH`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("VETO_HOST")
            .ok()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("VETO_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("VETO_PORT must be a valid port number, got: '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_origins = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let catalog_path = env::var("VETO_CATALOG_PATH")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            cors_origins,
            catalog_path,
        })
    }
}

/// Comma separated origins; empty, `null` and non-http(s) entries are ignored.
/// Falls back to the local dev origins when nothing valid remains.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}
