//! Place: a rentable lodging that amenities are attached to.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::PlaceId;
use crate::record::{Record, Timestamps};
use crate::time::Timestamp;

/// Descriptive attributes of a place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: String,
    pub description: String,
    pub number_rooms: u32,
    pub number_bathrooms: u32,
    pub max_guest: u32,
    pub price_by_night: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A persisted place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    #[serde(flatten)]
    pub details: PlaceDetails,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Place {
    /// Attach the storage-assigned id to a draft.
    #[must_use]
    pub fn from_new(id: PlaceId, new: NewPlace) -> Self {
        Self {
            id,
            details: new.details,
            timestamps: new.timestamps,
        }
    }
}

impl Record for Place {
    const KIND: &'static str = "Place";

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

/// A place that has not been inserted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub details: PlaceDetails,
    pub timestamps: Timestamps,
}

impl NewPlace {
    /// Build a draft from a patch; the patch must carry a name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn from_patch(patch: PlacePatch, instant: Timestamp) -> Result<Self, ValidationError> {
        if patch.name.is_none() {
            return Err(ValidationError::MissingField("name"));
        }
        let mut details = PlaceDetails::default();
        patch.apply(&mut details);
        Ok(Self {
            details,
            timestamps: Timestamps::at(instant),
        })
    }
}

impl Record for NewPlace {
    const KIND: &'static str = "Place";

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

/// Partial set of place attributes parsed from request parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub number_rooms: Option<u32>,
    pub number_bathrooms: Option<u32>,
    pub max_guest: Option<u32>,
    pub price_by_night: Option<u32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PlacePatch {
    /// Parameter keys that map onto place fields.
    pub const FIELDS: &'static [&'static str] = &[
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
    ];

    /// Parse loosely-typed key/value parameters. Unknown keys are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidField`] when a numeric field does not
    /// parse.
    pub fn from_params<'a, I>(params: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut patch = Self::default();
        for (key, value) in params {
            match key {
                "name" => patch.name = Some(value.to_string()),
                "description" => patch.description = Some(value.to_string()),
                "number_rooms" => patch.number_rooms = Some(parse_field("number_rooms", value)?),
                "number_bathrooms" => {
                    patch.number_bathrooms = Some(parse_field("number_bathrooms", value)?);
                }
                "max_guest" => patch.max_guest = Some(parse_field("max_guest", value)?),
                "price_by_night" => {
                    patch.price_by_night = Some(parse_field("price_by_night", value)?);
                }
                "latitude" => patch.latitude = Some(parse_field("latitude", value)?),
                "longitude" => patch.longitude = Some(parse_field("longitude", value)?),
                _ => {}
            }
        }
        Ok(patch)
    }

    /// Overwrite every attribute present in the patch.
    pub fn apply(self, details: &mut PlaceDetails) {
        if let Some(name) = self.name {
            details.name = name;
        }
        if let Some(description) = self.description {
            details.description = description;
        }
        if let Some(v) = self.number_rooms {
            details.number_rooms = v;
        }
        if let Some(v) = self.number_bathrooms {
            details.number_bathrooms = v;
        }
        if let Some(v) = self.max_guest {
            details.max_guest = v;
        }
        if let Some(v) = self.price_by_night {
            details.price_by_night = v;
        }
        if self.latitude.is_some() {
            details.latitude = self.latitude;
        }
        if self.longitude.is_some() {
            details.longitude = self.longitude;
        }
    }
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, ValidationError> {
    value.trim().parse().map_err(|_| ValidationError::InvalidField {
        field,
        value: value.to_string(),
    })
}
