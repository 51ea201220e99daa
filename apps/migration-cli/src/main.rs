use clap::{Parser, ValueEnum};
use migration::{migrate, MigrationCommand};
use table_core::config::db::DbProfile;
use table_core::infra::db::connect_db;
use table_core::telemetry;
use tracing::{error, info};

#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration")]
#[command(about = "Table database migration tool")]
struct Args {
    /// up | down | fresh | reset | refresh | status
    command: MigrationCommand,

    /// Database type. In-memory SQLite is not offered: it would vanish
    /// when the command exits.
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,

    /// SQLite file path; falls back to TABLE_SQLITE_FILE
    #[arg(long)]
    file: Option<String>,
}

#[tokio::main]
async fn main() {
    telemetry::init_tracing();

    let args = Args::parse();
    let profile = match args.db {
        Db::Postgres => DbProfile::Postgres,
        Db::SqliteFile => DbProfile::SqliteFile { file: args.file },
    };

    let conn = match connect_db(&profile).await {
        Ok(conn) => conn,
        Err(e) => {
            error!(error = %e, "could not connect");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&conn, args.command).await {
        error!(error = %e, "migration failed");
        std::process::exit(1);
    }
    info!(command = ?args.command, "done");
}
