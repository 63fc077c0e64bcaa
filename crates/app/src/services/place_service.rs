//! Place service: use-cases for managing places.

use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::PlaceId;
use hbnb_domain::place::{NewPlace, Place, PlacePatch};
use hbnb_domain::record::{Record, SortOrder};
use hbnb_domain::time::now;

use crate::ports::PlaceRepository;

/// Application service for place CRUD operations.
pub struct PlaceService<R> {
    repo: R,
}

impl<R: PlaceRepository> PlaceService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist a new place.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn create_place(&self, mut place: NewPlace) -> Result<Place, HbnbError> {
        place.before_persist(now());
        let created = self.repo.create(place).await?;
        tracing::info!(id = %created.id, name = %created.details.name, "place created");
        Ok(created)
    }

    /// Look up a place by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_place(&self, id: PlaceId) -> Result<Place, HbnbError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| place_not_found(id))
    }

    /// List all places in the requested order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_places(&self, order: SortOrder) -> Result<Vec<Place>, HbnbError> {
        self.repo.get_all(order).await
    }

    /// Apply a partial update and persist it, refreshing `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no place with `id` exists, also
    /// when it disappears before the write lands, or a storage error from
    /// the repository.
    pub async fn update_place(&self, id: PlaceId, patch: PlacePatch) -> Result<Place, HbnbError> {
        let mut place = self.get_place(id).await?;
        patch.apply(&mut place.details);
        place.before_persist(now());
        let saved = self
            .repo
            .update(place)
            .await?
            .ok_or_else(|| place_not_found(id))?;
        tracing::debug!(%id, "place updated");
        Ok(saved)
    }

    /// Delete a place by id. Succeeds whether or not a row matched.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        let removed = self.repo.delete(id).await?;
        tracing::debug!(%id, removed, "place delete");
        Ok(())
    }
}

fn place_not_found(id: PlaceId) -> HbnbError {
    NotFoundError {
        entity: Place::KIND,
        id: id.to_string(),
    }
    .into()
}
