use std::env;

use crate::error::AppError;

/// Database profile: which backend the state builder connects to.
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Private in-memory SQLite database (tests, local runs)
    InMemory,
    /// SQLite file; `None` reads the path from `TABLE_SQLITE_FILE`
    SqliteFile { file: Option<String> },
    /// PostgreSQL configured from the environment
    Postgres,
}

/// Builds a database URL for the given profile.
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
        DbProfile::SqliteFile { file } => {
            let path = match file {
                Some(path) => path.clone(),
                None => must_var("TABLE_SQLITE_FILE")?,
            };
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbProfile::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = must_var("TABLE_DB")?;
            let username = must_var("TABLE_DB_USER")?;
            let password = must_var("TABLE_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// SQLite busy timeout in milliseconds (`TABLE_SQLITE_BUSY_TIMEOUT_MS`, default 5000).
pub fn sqlite_busy_timeout_ms() -> Result<u64, AppError> {
    match env::var("TABLE_SQLITE_BUSY_TIMEOUT_MS") {
        Ok(raw) => raw.parse::<u64>().map_err(|_| {
            AppError::config(format!(
                "TABLE_SQLITE_BUSY_TIMEOUT_MS must be a non-negative integer, got '{raw}'"
            ))
        }),
        Err(_) => Ok(5000),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
