//! Typed identifier newtypes backed by storage-assigned integers.
//!
//! Ids are handed out by the store on insert and never change afterwards.
//! There is no constructor that invents a fresh one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw key read back from storage.
            #[must_use]
            pub const fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the inner key.
            #[must_use]
            pub const fn as_raw(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>()
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidId(s.to_string()))
            }
        }
    };
}

define_id!(
    /// Unique identifier for an [`Amenity`](crate::amenity::Amenity).
    AmenityId
);

define_id!(
    /// Unique identifier for a [`Place`](crate::place::Place).
    PlaceId
);

define_id!(
    /// Unique identifier for a [`PlaceAmenity`](crate::place_amenity::PlaceAmenity) edge.
    PlaceAmenityId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_integer_path_segment() {
        let id: AmenityId = "42".parse().unwrap();
        assert_eq!(id.as_raw(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn should_return_error_when_parsing_non_integer() {
        let result = PlaceId::from_str("abc");
        assert_eq!(result, Err(ValidationError::InvalidId("abc".to_string())));
    }

    #[test]
    fn should_serialize_as_bare_integer() {
        let json = serde_json::to_string(&PlaceAmenityId::from_raw(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn should_order_by_raw_value() {
        assert!(AmenityId::from_raw(1) < AmenityId::from_raw(2));
    }
}
