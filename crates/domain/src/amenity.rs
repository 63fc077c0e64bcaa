//! Amenity: a named feature a place can offer (wifi, pool, …).

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::AmenityId;
use crate::record::{Record, Timestamps};
use crate::time::Timestamp;

/// A persisted amenity. Names are unique across all amenities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: AmenityId,
    pub name: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Amenity {
    /// Parameter keys that map onto amenity fields.
    pub const FIELDS: &'static [&'static str] = &["name"];

    /// Attach the storage-assigned id to a draft.
    #[must_use]
    pub fn from_new(id: AmenityId, new: NewAmenity) -> Self {
        Self {
            id,
            name: new.name,
            timestamps: new.timestamps,
        }
    }
}

impl Record for Amenity {
    const KIND: &'static str = "Amenity";

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

/// An amenity that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAmenity {
    pub name: String,
    pub timestamps: Timestamps,
}

impl NewAmenity {
    /// Build a draft stamped at `instant`.
    #[must_use]
    pub fn new(name: impl Into<String>, instant: Timestamp) -> Self {
        Self {
            name: name.into(),
            timestamps: Timestamps::at(instant),
        }
    }

    /// Build a draft from loosely-typed key/value parameters.
    ///
    /// Every key matching an amenity field is assigned; anything else is
    /// left for the caller to report.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] when `name` is absent.
    pub fn from_params<'a, I>(params: I, instant: Timestamp) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut name = None;
        for (key, value) in params {
            if key == "name" {
                name = Some(value.to_string());
            }
        }
        let name = name.ok_or(ValidationError::MissingField("name"))?;
        Ok(Self::new(name, instant))
    }
}

impl Record for NewAmenity {
    const KIND: &'static str = "Amenity";

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
