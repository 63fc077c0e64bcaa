//! Shared application state for axum handlers.

use std::sync::Arc;

use hbnb_app::ports::{AmenityRepository, PlaceAmenityRepository, PlaceRepository};
use hbnb_app::services::amenity_service::AmenityService;
use hbnb_app::services::place_service::PlaceService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<AR, PR, LR> {
    /// Amenity CRUD and place association service.
    pub amenity_service: Arc<AmenityService<AR, PR, LR>>,
    /// Place CRUD service.
    pub place_service: Arc<PlaceService<PR>>,
}

impl<AR, PR, LR> Clone for AppState<AR, PR, LR> {
    fn clone(&self) -> Self {
        Self {
            amenity_service: Arc::clone(&self.amenity_service),
            place_service: Arc::clone(&self.place_service),
        }
    }
}

impl<AR, PR, LR> AppState<AR, PR, LR>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(amenity_service: AmenityService<AR, PR, LR>, place_service: PlaceService<PR>) -> Self {
        Self {
            amenity_service: Arc::new(amenity_service),
            place_service: Arc::new(place_service),
        }
    }
}
