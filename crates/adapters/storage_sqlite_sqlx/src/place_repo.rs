//! `SQLite` implementation of [`PlaceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::PlaceRepository;
use hbnb_domain::error::HbnbError;
use hbnb_domain::id::PlaceId;
use hbnb_domain::place::{NewPlace, Place, PlaceDetails};
use hbnb_domain::record::SortOrder;

use crate::error::StorageError;
use crate::rows::{decode_timestamps, encode_timestamp};

struct Wrapper(Place);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Place> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let details = PlaceDetails {
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            number_rooms: row.try_get("number_rooms")?,
            number_bathrooms: row.try_get("number_bathrooms")?,
            max_guest: row.try_get("max_guest")?,
            price_by_night: row.try_get("price_by_night")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
        };

        Ok(Self(Place {
            id: PlaceId::from_raw(id),
            details,
            timestamps: decode_timestamps(row)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO places (name, description, number_rooms, number_bathrooms, max_guest,
                        price_by_night, latitude, longitude, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM places WHERE id = ?";

const UPDATE: &str = r"
    UPDATE places
    SET name = ?, description = ?, number_rooms = ?, number_bathrooms = ?, max_guest = ?,
        price_by_night = ?, latitude = ?, longitude = ?, updated_at = ?
    WHERE id = ?
";

const DELETE_BY_ID: &str = "DELETE FROM places WHERE id = ?";

fn select_all(order: SortOrder) -> String {
    format!("SELECT * FROM places ORDER BY id {}", order.as_sql())
}

/// `SQLite`-backed place repository.
pub struct SqlitePlaceRepository {
    pool: SqlitePool,
}

impl SqlitePlaceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PlaceRepository for SqlitePlaceRepository {
    fn create(&self, place: NewPlace) -> impl Future<Output = Result<Place, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let d = &place.details;
            let done = sqlx::query(INSERT)
                .bind(&d.name)
                .bind(&d.description)
                .bind(d.number_rooms)
                .bind(d.number_bathrooms)
                .bind(d.max_guest)
                .bind(d.price_by_night)
                .bind(d.latitude)
                .bind(d.longitude)
                .bind(encode_timestamp(place.timestamps.created_at))
                .bind(encode_timestamp(place.timestamps.updated_at))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Place::from_new(
                PlaceId::from_raw(done.last_insert_rowid()),
                place,
            ))
        }
    }

    fn get_by_id(
        &self,
        id: PlaceId,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_raw())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(
        &self,
        order: SortOrder,
    ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let sql = select_all(order);
            let rows: Vec<Wrapper> = sqlx::query_as(&sql)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        place: Place,
    ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let d = &place.details;
            let done = sqlx::query(UPDATE)
                .bind(&d.name)
                .bind(&d.description)
                .bind(d.number_rooms)
                .bind(d.number_bathrooms)
                .bind(d.max_guest)
                .bind(d.price_by_night)
                .bind(d.latitude)
                .bind(d.longitude)
                .bind(encode_timestamp(place.timestamps.updated_at))
                .bind(place.id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if done.rows_affected() == 0 {
                return Ok(None);
            }
            Ok(Some(place))
        }
    }

    fn delete(&self, id: PlaceId) -> impl Future<Output = Result<bool, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let done = sqlx::query(DELETE_BY_ID)
                .bind(id.as_raw())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(done.rows_affected() > 0)
        }
    }
}
