//! Storage port: repository traits for persistence.
//!
//! Every listing takes a [`SortOrder`]; services pass the default (ascending
//! by id) unless told otherwise. Deletes report whether a row matched but
//! never fail because nothing did.

use std::future::Future;

use hbnb_domain::amenity::{Amenity, NewAmenity};
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, PlaceId};
use hbnb_domain::place::{NewPlace, Place};
use hbnb_domain::place_amenity::{NewPlaceAmenity, PlaceAmenity};
use hbnb_domain::record::SortOrder;

/// Persistence for [`Amenity`] records.
pub trait AmenityRepository {
    /// Insert a draft and return it with its assigned id.
    ///
    /// Fails with [`HbnbError::Conflict`] when the name is already taken.
    fn create(
        &self,
        amenity: NewAmenity,
    ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send;

    fn get_all(
        &self,
        order: SortOrder,
    ) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send;

    /// Delete by id. Returns `true` when a row was removed.
    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<bool, HbnbError>> + Send;
}

/// Persistence for [`Place`] records.
pub trait PlaceRepository {
    fn create(&self, place: NewPlace) -> impl Future<Output = Result<Place, HbnbError>> + Send;

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send;

    fn get_all(
        &self,
        order: SortOrder,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send;

    /// Overwrite a stored place. Returns `None` when no row matched `place.id`.
    fn update(
        &self,
        place: Place,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send;

    /// Delete by id. Returns `true` when a row was removed.
    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<bool, HbnbError>> + Send;
}

/// Persistence for [`PlaceAmenity`] edges.
pub trait PlaceAmenityRepository {
    /// Insert an edge. Attaching a pair that is already linked returns the
    /// existing edge.
    fn attach(
        &self,
        link: NewPlaceAmenity,
    ) -> impl Future<Output = Result<PlaceAmenity, HbnbError>> + Send;

    /// Remove the edge matching the exact pair. Returns `true` when a row was removed.
    fn detach(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<bool, HbnbError>> + Send;

    /// Amenities linked to `place_id`.
    fn amenities_for_place(
        &self,
        place_id: PlaceId,
        order: SortOrder,
    ) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send;
}
