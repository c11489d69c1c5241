//! # restomap-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `restomap-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `restomap-app` (for port traits) and `restomap-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod city_repo;
mod error;
mod pool;
mod restaurant_repo;

pub use city_repo::SqliteCityRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
pub use restaurant_repo::SqliteRestaurantRepository;
