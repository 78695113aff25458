use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::archive::Archiver;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// The single process-wide archive job holder
    archiver: Arc<Archiver>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, archiver: Arc<Archiver>) -> Self {
        Self {
            db: Some(db),
            archiver,
        }
    }

    /// State without a database; contact routes answer DB_UNAVAILABLE.
    pub fn without_db(archiver: Arc<Archiver>) -> Self {
        Self { db: None, archiver }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn archiver(&self) -> &Arc<Archiver> {
        &self.archiver
    }
}
