//! `SQLite` implementation of [`PlaceAmenityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::PlaceAmenityRepository;
use hbnb_domain::amenity::Amenity;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::{AmenityId, PlaceAmenityId, PlaceId};
use hbnb_domain::place_amenity::{NewPlaceAmenity, PlaceAmenity};
use hbnb_domain::record::SortOrder;

use crate::amenity_repo::Wrapper as AmenityRow;
use crate::error::StorageError;
use crate::rows::{decode_timestamps, encode_timestamp};

struct Wrapper(PlaceAmenity);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let place_id: i64 = row.try_get("place_id")?;
        let amenity_id: i64 = row.try_get("amenity_id")?;

        Ok(Self(PlaceAmenity {
            id: PlaceAmenityId::from_raw(id),
            place_id: PlaceId::from_raw(place_id),
            amenity_id: AmenityId::from_raw(amenity_id),
            timestamps: decode_timestamps(row)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO place_amenities (place_id, amenity_id, created_at, updated_at)
    VALUES (?, ?, ?, ?)
    ON CONFLICT (place_id, amenity_id) DO NOTHING
";

const SELECT_BY_PAIR: &str =
    "SELECT * FROM place_amenities WHERE place_id = ? AND amenity_id = ?";

const DELETE_BY_PAIR: &str = "DELETE FROM place_amenities WHERE place_id = ? AND amenity_id = ?";

fn select_amenities_for_place(order: SortOrder) -> String {
    format!(
        "SELECT a.* FROM amenities a \
         JOIN place_amenities pa ON pa.amenity_id = a.id \
         WHERE pa.place_id = ? \
         ORDER BY a.id {}",
        order.as_sql()
    )
}

/// `SQLite`-backed repository for place/amenity edges.
pub struct SqlitePlaceAmenityRepository {
    pool: SqlitePool,
}

impl SqlitePlaceAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceAmenityRepository for SqlitePlaceAmenityRepository {
    fn attach(
        &self,
        link: NewPlaceAmenity,
    ) -> impl Future<Output = Result<PlaceAmenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Insert and read back in one transaction so a concurrent detach
            // cannot remove the edge in between.
            let mut tx = pool.begin().await.map_err(StorageError::from)?;

            sqlx::query(INSERT)
                .bind(link.place_id.as_raw())
                .bind(link.amenity_id.as_raw())
                .bind(encode_timestamp(link.timestamps.created_at))
                .bind(encode_timestamp(link.timestamps.updated_at))
                .execute(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            let row: Wrapper = sqlx::query_as(SELECT_BY_PAIR)
                .bind(link.place_id.as_raw())
                .bind(link.amenity_id.as_raw())
                .fetch_one(&mut *tx)
                .await
                .map_err(StorageError::from)?;

            tx.commit().await.map_err(StorageError::from)?;
            Ok(row.0)
        }
    }

    fn detach(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> impl Future<Output = Result<bool, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let done = sqlx::query(DELETE_BY_PAIR)
                .bind(place_id.as_raw())
                .bind(amenity_id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(done.rows_affected() > 0)
        }
    }

    fn amenities_for_place(
        &self,
        place_id: PlaceId,
        order: SortOrder,
    ) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = select_amenities_for_place(order);
            let rows: Vec<AmenityRow> = sqlx::query_as(&sql)
                .bind(place_id.as_raw())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
