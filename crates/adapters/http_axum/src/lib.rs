//! # hbnb-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API for amenities, places and their associations
//!   (`/amenities`, `/places`, `/places/{place_id}/amenities`, …)
//! - Accept form-encoded parameters on writes and hand them to the domain
//!   parsers
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses with `{msg}` bodies
//!
//! ## Dependency rule
//! Depends on `hbnb-app` (for port traits and services) and `hbnb-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
