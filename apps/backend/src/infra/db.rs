use db_infra::config::db::{DbKind, DbOwner, RuntimeEnv};
use migration::{migrate, MigrationCommand};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::error::AppError;

/// Open an application-level pool.
/// This function does NOT run any migrations.
pub async fn connect_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    Ok(db_infra::connect(env, kind, DbOwner::App).await?)
}

/// Connect and bring the schema up to date, returning the application pool.
///
/// File and server databases are migrated over a short-lived owner pool.
/// An in-memory database only exists inside its own pool, so it is migrated
/// on the application connection directly.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    if kind == DbKind::SqliteMemory {
        let conn = connect_db(env, kind).await?;
        migrate(&conn, MigrationCommand::Up).await?;
        info!(db_kind = kind.as_str(), "db.bootstrap.done");
        return Ok(conn);
    }

    let owner = db_infra::connect(env, kind, DbOwner::Owner).await?;
    let migrated = migrate(&owner, MigrationCommand::Up).await;
    owner.close().await?;
    migrated?;

    let conn = connect_db(env, kind).await?;
    info!(db_kind = kind.as_str(), "db.bootstrap.done");
    Ok(conn)
}
