//! Adapters for external dependencies.

pub mod contacts_sea;
