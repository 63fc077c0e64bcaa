//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used for `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Layout used when timestamps cross the HTTP boundary.
pub const WIRE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// `serde` adapter rendering a [`Timestamp`] in [`WIRE_FORMAT`].
pub mod wire {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{Timestamp, WIRE_FORMAT};

    /// Serialize as `YYYY/MM/DD HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(WIRE_FORMAT))
    }

    /// Parse `YYYY/MM/DD HH:MM:SS` as UTC.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error when the string does not match the layout.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, WIRE_FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}
