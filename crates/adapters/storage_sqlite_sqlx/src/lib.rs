//! # hbnb-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `hbnb-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Turn `UNIQUE` violations into typed conflict errors
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits) and `hbnb-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod amenity_repo;
mod error;
mod place_amenity_repo;
mod place_repo;
mod pool;
mod rows;

pub use amenity_repo::SqliteAmenityRepository;
pub use error::StorageError;
pub use place_amenity_repo::SqlitePlaceAmenityRepository;
pub use place_repo::SqlitePlaceRepository;
pub use pool::{Config, Database};
