//! # hbnb-domain
//!
//! Pure domain model for the hbnb lodging API.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Record** base shared by every persisted entity
//!   (audit timestamps, before-persist hook, default ordering)
//! - Define **Amenities** (named features such as wifi or a pool)
//! - Define **Places** (lodgings amenities are attached to)
//! - Define **`PlaceAmenity`** edges linking the two
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod record;
pub mod time;

pub mod amenity;
pub mod place;
pub mod place_amenity;
