//! `PlaceAmenity`: the many-to-many edge between places and amenities.

use serde::{Deserialize, Serialize};

use crate::id::{AmenityId, PlaceAmenityId, PlaceId};
use crate::record::{Record, Timestamps};
use crate::time::Timestamp;

/// A persisted association row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceAmenity {
    pub id: PlaceAmenityId,
    pub place_id: PlaceId,
    pub amenity_id: AmenityId,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Record for PlaceAmenity {
    const KIND: &'static str = "PlaceAmenity";

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

/// An association that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlaceAmenity {
    pub place_id: PlaceId,
    pub amenity_id: AmenityId,
    pub timestamps: Timestamps,
}

impl NewPlaceAmenity {
    /// Link `amenity_id` to `place_id`, stamped at `instant`.
    #[must_use]
    pub fn new(place_id: PlaceId, amenity_id: AmenityId, instant: Timestamp) -> Self {
        Self {
            place_id,
            amenity_id,
            timestamps: Timestamps::at(instant),
        }
    }
}

impl Record for NewPlaceAmenity {
    const KIND: &'static str = "PlaceAmenity";

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }

    /// A draft is created at the instant it is first persisted.
    fn before_persist(&mut self, instant: Timestamp) {
        self.timestamps = Timestamps::at(instant);
    }
}

/// What detaching an amenity from a place removes.
///
/// The default keeps the amenity so other places can still use it.
/// [`DetachPolicy::DeleteAmenity`] reproduces the legacy hbnb API, where
/// unlinking an amenity from one place deleted it globally and therefore
/// from every other place too.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetachPolicy {
    /// Remove only the association row; the amenity stays reusable.
    #[default]
    EdgeOnly,
    /// Remove the association row, then the amenity itself.
    DeleteAmenity,
}
