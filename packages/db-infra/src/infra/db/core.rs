use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, sqlite_file_path, DbKind, DbOwner, RuntimeEnv};
use crate::error::DbInfraError;

/// Open a connection pool for the given environment, kind and owner.
///
/// This function does NOT run any migrations.
pub async fn connect(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = db_url(env, kind, owner)?;

    if kind == DbKind::SqliteFile {
        let path = sqlite_file_path(env);
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                DbInfraError::config(format!(
                    "failed to create sqlite directory {}: {e}",
                    dir.display()
                ))
            })?;
        }
    }

    let mut opts = ConnectOptions::new(url.clone());
    opts.connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // Every pooled connection to sqlite::memory: is its own database.
    if kind == DbKind::SqliteMemory {
        opts.max_connections(1).min_connections(1);
    }

    info!(
        db_kind = kind.as_str(),
        env = ?env,
        url = %sanitize_db_url(&url),
        "db.connect"
    );

    Database::connect(opts).await.map_err(|e| {
        DbInfraError::config(format!(
            "failed to connect to database {}: {e}",
            sanitize_db_url(&url)
        ))
    })
}

/// Sanitize database URL by masking password in connection strings.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.rsplit_once('@') else {
        return url.to_string();
    };

    let (scheme, credentials) = auth_part.split_once("://").unwrap_or(("", auth_part));
    match credentials.split_once(':') {
        Some((user, _password)) if scheme.is_empty() => format!("{user}:***@{host_part}"),
        Some((user, _password)) => format!("{scheme}://{user}:***@{host_part}"),
        None => url.to_string(),
    }
}

/// Connect with owner credentials and run a migration command.
///
/// In-memory SQLite is rejected: the database would vanish with the pool.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    if kind == DbKind::SqliteMemory {
        return Err(DbInfraError::config(
            "in-memory sqlite cannot be migrated out of process",
        ));
    }

    info!(env = ?env, db_kind = kind.as_str(), cmd = ?command, "migrate=start");

    let pool = connect(env, kind, DbOwner::Owner).await?;
    let result = migrate(&pool, command).await;
    pool.close().await?;
    result?;

    info!("migrate=done");
    Ok(())
}
