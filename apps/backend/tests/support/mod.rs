#![allow(dead_code)]

pub mod app_builder;
pub mod factory;

use contacts_backend::config::db::{DbKind, RuntimeEnv};
use contacts_backend::infra::state::build_state;
use contacts_backend::state::app_state::AppState;

pub use app_builder::create_test_app;

/// Fresh state over its own migrated in-memory SQLite database.
pub async fn memory_state() -> AppState {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
        .expect("build in-memory test state")
}

/// State with no database; contact routes answer DB_UNAVAILABLE.
pub async fn state_without_db() -> AppState {
    build_state()
        .with_env(RuntimeEnv::Test)
        .build()
        .await
        .expect("build db-less test state")
}
