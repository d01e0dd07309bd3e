//! Database module: models, schema, and the per-request store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `store.rs`: pool setup and the `TodoStore` gateway

pub mod models;
pub mod schema;
pub mod store;

pub use models::{Todo, TodoList};
pub use schema::SQLITE_INIT;
pub use store::{TodoStore, connect};
