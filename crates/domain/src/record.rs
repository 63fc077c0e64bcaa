//! Record: the behaviour every persisted entity shares.
//!
//! A record carries a storage-assigned id plus two audit timestamps. Writes go
//! through [`Record::before_persist`], which the services call explicitly on
//! every insert and update so `updated_at` always reflects the last write.

use serde::{Deserialize, Serialize};

use crate::time::{Timestamp, wire};

/// Audit timestamps embedded in every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    /// When the record was first built.
    #[serde(with = "wire")]
    pub created_at: Timestamp,
    /// When the record was last persisted.
    #[serde(with = "wire")]
    pub updated_at: Timestamp,
}

impl Timestamps {
    /// Both timestamps set to the same instant.
    #[must_use]
    pub fn at(instant: Timestamp) -> Self {
        Self {
            created_at: instant,
            updated_at: instant,
        }
    }

    /// Advance `updated_at`; `created_at` is never touched.
    pub fn touch(&mut self, instant: Timestamp) {
        self.updated_at = instant;
    }
}

/// Shared behaviour of persisted (or about-to-be-persisted) entities.
pub trait Record {
    /// Human-readable kind, used in not-found messages.
    const KIND: &'static str;

    /// Borrow the audit timestamps.
    fn timestamps(&self) -> &Timestamps;

    /// Mutably borrow the audit timestamps.
    fn timestamps_mut(&mut self) -> &mut Timestamps;

    /// Hook run on every write path before the record reaches storage.
    fn before_persist(&mut self, instant: Timestamp) {
        self.timestamps_mut().touch(instant);
    }
}

/// Listing order by id. Ascending unless a caller asks otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// SQL keyword for this order.
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }
}
