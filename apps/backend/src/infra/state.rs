use std::sync::Arc;

use db_infra::config::db::{DbKind, RuntimeEnv};

use crate::domain::archive::Archiver;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
    archiver: Option<Arc<Archiver>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            env: RuntimeEnv::Prod,
            db_kind: None,
            archiver: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    /// Share an existing archiver instead of starting a fresh one.
    pub fn with_archiver(mut self, archiver: Arc<Archiver>) -> Self {
        self.archiver = Some(archiver);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let archiver = self.archiver.unwrap_or_default();
        match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => {
                let conn = bootstrap_db(self.env, kind).await?;
                Ok(AppState::new(conn, archiver))
            }
            None => Ok(AppState::without_db(archiver)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
