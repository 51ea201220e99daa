use std::str::FromStr;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, SqlxSqliteConnector};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use crate::config::db::{db_url, sqlite_busy_timeout_ms, DbProfile};
use crate::error::AppError;

const POSTGRES_MAX_CONNECTIONS: u32 = 16;
const SQLITE_FILE_MAX_CONNECTIONS: u32 = 4;

fn engine_name(profile: &DbProfile) -> &'static str {
    match profile {
        DbProfile::Postgres => "postgresql",
        DbProfile::SqliteFile { .. } | DbProfile::InMemory => "sqlite",
    }
}

/// Connect to the database for the given profile.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let conn = match profile {
        DbProfile::Postgres => {
            let mut opts = ConnectOptions::new(url);
            opts.max_connections(POSTGRES_MAX_CONNECTIONS)
                .connect_timeout(Duration::from_secs(5))
                .sqlx_logging(false);
            Database::connect(opts).await?
        }
        DbProfile::SqliteFile { .. } | DbProfile::InMemory => {
            let busy_timeout_ms = sqlite_busy_timeout_ms()?;
            let opts = SqliteConnectOptions::from_str(&url)
                .map_err(|e| AppError::config(format!("invalid sqlite url: {e}")))?
                .create_if_missing(true)
                .foreign_keys(true)
                .busy_timeout(Duration::from_millis(busy_timeout_ms));

            // Every connection to `sqlite::memory:` opens its own empty database,
            // so the in-memory profile is pinned to one long-lived connection.
            let pool_opts = if *profile == DbProfile::InMemory {
                SqlitePoolOptions::new()
                    .max_connections(1)
                    .min_connections(1)
                    .idle_timeout(None)
                    .max_lifetime(None)
            } else {
                SqlitePoolOptions::new().max_connections(SQLITE_FILE_MAX_CONNECTIONS)
            };

            let pool = pool_opts
                .connect_with(opts)
                .await
                .map_err(|e| AppError::config(format!("sqlite connect failed: {e}")))?;
            debug!(busy_timeout_ms, "sqlite pool ready");
            SqlxSqliteConnector::from_sqlx_sqlite_pool(pool)
        }
    };

    info!(engine = engine_name(profile), "database connected");
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    Ok(conn)
}
