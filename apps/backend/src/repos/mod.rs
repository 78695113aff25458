//! Repository functions: domain types in, domain types out, generic over
//! `sea_orm::ConnectionTrait` so callers pass a pool or a transaction.

pub mod contacts;
