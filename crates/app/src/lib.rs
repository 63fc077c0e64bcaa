//! # hbnb-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AmenityRepository`: CRUD for amenities
//!   - `PlaceRepository`: CRUD for places
//!   - `PlaceAmenityRepository`: attach, detach and list place/amenity edges
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AmenityService`: amenity CRUD plus place association management
//!   - `PlaceService`: place CRUD
//! - Run the before-persist hook on every write path
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hbnb-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
