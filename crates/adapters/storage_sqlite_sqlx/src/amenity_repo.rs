//! `SQLite` implementation of [`AmenityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use hbnb_app::ports::AmenityRepository;
use hbnb_domain::amenity::{Amenity, NewAmenity};
use hbnb_domain::error::{ConflictError, HbnbError};
use hbnb_domain::id::AmenityId;
use hbnb_domain::record::{Record, SortOrder};

use crate::error::{StorageError, is_unique_violation};
use crate::rows::{decode_timestamps, encode_timestamp};

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
pub(crate) struct Wrapper(pub(crate) Amenity);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Amenity> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;

        Ok(Self(Amenity {
            id: AmenityId::from_raw(id),
            name,
            timestamps: decode_timestamps(row)?,
        }))
    }
}

const INSERT: &str = "INSERT INTO amenities (name, created_at, updated_at) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM amenities WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM amenities WHERE id = ?";

fn select_all(order: SortOrder) -> String {
    format!("SELECT * FROM amenities ORDER BY id {}", order.as_sql())
}

/// `SQLite`-backed amenity repository.
pub struct SqliteAmenityRepository {
    pool: SqlitePool,
}

impl SqliteAmenityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AmenityRepository for SqliteAmenityRepository {
    fn create(
        &self,
        amenity: NewAmenity,
    ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&amenity.name)
                .bind(encode_timestamp(amenity.timestamps.created_at))
                .bind(encode_timestamp(amenity.timestamps.updated_at))
                .execute(&pool)
                .await;

            match result {
                Ok(done) => Ok(Amenity::from_new(
                    AmenityId::from_raw(done.last_insert_rowid()),
                    amenity,
                )),
                Err(err) if is_unique_violation(&err) => Err(ConflictError::DuplicateName {
                    entity: Amenity::KIND,
                    name: amenity.name,
                }
                .into()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn get_by_id(
        &self,
        id: AmenityId,
    ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send {
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
    ) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
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

    fn delete(&self, id: AmenityId) -> impl Future<Output = Result<bool, HbnbError>> + Send {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use hbnb_domain::time::now;

    async fn setup() -> SqliteAmenityRepository {
        let db = Config::in_memory().build().await.unwrap();
        SqliteAmenityRepository::new(db.pool().clone())
    }

    #[tokio::test]
    async fn should_create_and_retrieve_amenity() {
        let repo = setup().await;
        let created = repo.create(NewAmenity::new("wifi", now())).await.unwrap();

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "wifi");
        assert_eq!(fetched.timestamps, created.timestamps);
    }

    #[tokio::test]
    async fn should_assign_increasing_ids() {
        let repo = setup().await;
        let first = repo.create(NewAmenity::new("wifi", now())).await.unwrap();
        let second = repo.create(NewAmenity::new("pool", now())).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_not_reuse_ids_after_delete() {
        let repo = setup().await;
        let first = repo.create(NewAmenity::new("wifi", now())).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(NewAmenity::new("pool", now())).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_return_conflict_when_name_taken() {
        let repo = setup().await;
        repo.create(NewAmenity::new("wifi", now())).await.unwrap();

        let result = repo.create(NewAmenity::new("wifi", now())).await;
        assert!(matches!(
            result,
            Err(HbnbError::Conflict(ConflictError::DuplicateName { .. }))
        ));
    }

    #[tokio::test]
    async fn should_return_none_when_amenity_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(AmenityId::from_raw(12)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_amenities_ordered_by_id() {
        let repo = setup().await;
        for name in ["wifi", "pool", "sauna"] {
            repo.create(NewAmenity::new(name, now())).await.unwrap();
        }

        let asc = repo.get_all(SortOrder::Ascending).await.unwrap();
        let names: Vec<&str> = asc.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["wifi", "pool", "sauna"]);

        let desc = repo.get_all(SortOrder::Descending).await.unwrap();
        let names: Vec<&str> = desc.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["sauna", "pool", "wifi"]);
    }

    #[tokio::test]
    async fn should_report_whether_delete_matched() {
        let repo = setup().await;
        let created = repo.create(NewAmenity::new("wifi", now())).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
