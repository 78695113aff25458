//! Server configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub runtime_env: RuntimeEnv,
    pub db_kind: DbKind,
}

impl ServerConfig {
    /// Reads `BACKEND_HOST`, `BACKEND_PORT` and `CONTACTS_DB`.
    ///
    /// The binary always serves the production database; tests build their
    /// state directly.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST")
            .ok()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let db_kind = match env::var("CONTACTS_DB") {
            Ok(raw) if !raw.trim().is_empty() => DbKind::from_str(&raw)?,
            _ => DbKind::SqliteFile,
        };

        Ok(Self {
            host,
            port,
            runtime_env: RuntimeEnv::Prod,
            db_kind,
        })
    }
}
