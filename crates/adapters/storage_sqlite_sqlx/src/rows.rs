//! Column helpers shared by the repositories.
//!
//! Timestamps are stored as RFC 3339 text.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use hbnb_domain::record::Timestamps;
use hbnb_domain::time::Timestamp;

pub(crate) fn encode_timestamp(ts: Timestamp) -> String {
    ts.to_rfc3339()
}

fn decode_timestamp(row: &SqliteRow, column: &str) -> Result<Timestamp, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    chrono::DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn decode_timestamps(row: &SqliteRow) -> Result<Timestamps, sqlx::Error> {
    Ok(Timestamps {
        created_at: decode_timestamp(row, "created_at")?,
        updated_at: decode_timestamp(row, "updated_at")?,
    })
}
