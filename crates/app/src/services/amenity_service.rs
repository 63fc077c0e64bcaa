//! Amenity service: use-cases for amenities and their place associations.

use hbnb_domain::amenity::{Amenity, NewAmenity};
use hbnb_domain::error::{HbnbError, NotFoundError};
use hbnb_domain::id::{AmenityId, PlaceId};
use hbnb_domain::place::Place;
use hbnb_domain::place_amenity::{DetachPolicy, NewPlaceAmenity, PlaceAmenity};
use hbnb_domain::record::{Record, SortOrder};
use hbnb_domain::time::now;

use crate::ports::{AmenityRepository, PlaceAmenityRepository, PlaceRepository};

/// Application service for amenity CRUD and place/amenity links.
pub struct AmenityService<AR, PR, LR> {
    amenities: AR,
    places: PR,
    links: LR,
    detach_policy: DetachPolicy,
}

impl<AR, PR, LR> AmenityService<AR, PR, LR>
where
    AR: AmenityRepository,
    PR: PlaceRepository,
    LR: PlaceAmenityRepository,
{
    /// Create a new service backed by the given repositories.
    ///
    /// Detaching only removes the association row unless
    /// [`with_detach_policy`](Self::with_detach_policy) says otherwise.
    pub fn new(amenities: AR, places: PR, links: LR) -> Self {
        Self {
            amenities,
            places,
            links,
            detach_policy: DetachPolicy::default(),
        }
    }

    /// Choose what [`detach_amenity`](Self::detach_amenity) removes.
    #[must_use]
    pub fn with_detach_policy(mut self, policy: DetachPolicy) -> Self {
        self.detach_policy = policy;
        self
    }

    /// List all amenities in the requested order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_amenities(&self, order: SortOrder) -> Result<Vec<Amenity>, HbnbError> {
        self.amenities.get_all(order).await
    }

    /// Persist a new amenity.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::Conflict`] when the name is already taken, or a
    /// storage error from the repository.
    pub async fn create_amenity(&self, mut amenity: NewAmenity) -> Result<Amenity, HbnbError> {
        amenity.before_persist(now());
        let created = self.amenities.create(amenity).await?;
        tracing::info!(id = %created.id, name = %created.name, "amenity created");
        Ok(created)
    }

    /// Look up an amenity by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when no amenity with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_amenity(&self, id: AmenityId) -> Result<Amenity, HbnbError> {
        self.amenities
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found::<Amenity>(id))
    }

    /// Delete an amenity by id. Succeeds whether or not a row matched.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_amenity(&self, id: AmenityId) -> Result<(), HbnbError> {
        let removed = self.amenities.delete(id).await?;
        tracing::debug!(%id, removed, "amenity delete");
        Ok(())
    }

    /// List the amenities attached to a place.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] for the place when it does not exist,
    /// and for an amenity when the place has none attached.
    pub async fn list_place_amenities(
        &self,
        place_id: PlaceId,
        order: SortOrder,
    ) -> Result<Vec<Amenity>, HbnbError> {
        self.ensure_place(place_id).await?;
        let amenities = self.links.amenities_for_place(place_id, order).await?;
        if amenities.is_empty() {
            return Err(not_found::<Amenity>(place_id));
        }
        Ok(amenities)
    }

    /// Link an amenity to a place. Linking an already-linked pair is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the amenity (checked first) or the
    /// place does not exist, or a storage error from the repository.
    pub async fn attach_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<PlaceAmenity, HbnbError> {
        self.ensure_amenity(amenity_id).await?;
        self.ensure_place(place_id).await?;

        let ts = now();
        let mut link = NewPlaceAmenity::new(place_id, amenity_id, ts);
        link.before_persist(ts);
        let link = self.links.attach(link).await?;
        tracing::info!(%place_id, %amenity_id, "amenity attached to place");
        Ok(link)
    }

    /// Unlink an amenity from a place, honouring the configured
    /// [`DetachPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`HbnbError::NotFound`] when the amenity (checked first) or the
    /// place does not exist, or a storage error from the repository.
    pub async fn detach_amenity(
        &self,
        place_id: PlaceId,
        amenity_id: AmenityId,
    ) -> Result<(), HbnbError> {
        self.ensure_amenity(amenity_id).await?;
        self.ensure_place(place_id).await?;

        let unlinked = self.links.detach(place_id, amenity_id).await?;
        tracing::info!(%place_id, %amenity_id, unlinked, "amenity detached from place");

        if self.detach_policy == DetachPolicy::DeleteAmenity {
            self.amenities.delete(amenity_id).await?;
            tracing::info!(%amenity_id, "amenity deleted after detach");
        }
        Ok(())
    }

    async fn ensure_amenity(&self, id: AmenityId) -> Result<(), HbnbError> {
        match self.amenities.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(not_found::<Amenity>(id)),
        }
    }

    async fn ensure_place(&self, id: PlaceId) -> Result<(), HbnbError> {
        match self.places.get_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(not_found::<Place>(id)),
        }
    }
}

fn not_found<R: Record>(id: impl ToString) -> HbnbError {
    NotFoundError {
        entity: R::KIND,
        id: id.to_string(),
    }
    .into()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use hbnb_domain::error::ConflictError;
    use hbnb_domain::id::PlaceAmenityId;
    use hbnb_domain::place::{NewPlace, PlaceDetails};
    use hbnb_domain::record::Timestamps;
    use std::future::Future;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct State {
        next_id: i64,
        amenities: Vec<Amenity>,
        places: Vec<Place>,
        links: Vec<PlaceAmenity>,
    }

    impl State {
        fn next_id(&mut self) -> i64 {
            self.next_id += 1;
            self.next_id
        }
    }

    /// One shared in-memory store implementing every storage port.
    #[derive(Clone, Default)]
    pub(crate) struct InMemoryStore(Arc<Mutex<State>>);

    fn ordered<T: Clone>(items: &[T], order: SortOrder) -> Vec<T> {
        let mut items = items.to_vec();
        if order == SortOrder::Descending {
            items.reverse();
        }
        items
    }

    impl AmenityRepository for InMemoryStore {
        fn create(
            &self,
            amenity: NewAmenity,
        ) -> impl Future<Output = Result<Amenity, HbnbError>> + Send {
            let mut state = self.0.lock().unwrap();
            let result = if state.amenities.iter().any(|a| a.name == amenity.name) {
                Err(ConflictError::DuplicateName {
                    entity: "Amenity",
                    name: amenity.name,
                }
                .into())
            } else {
                let id = AmenityId::from_raw(state.next_id());
                let created = Amenity::from_new(id, amenity);
                state.amenities.push(created.clone());
                Ok(created)
            };
            async { result }
        }

        fn get_by_id(
            &self,
            id: AmenityId,
        ) -> impl Future<Output = Result<Option<Amenity>, HbnbError>> + Send {
            let state = self.0.lock().unwrap();
            let result = state.amenities.iter().find(|a| a.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(
            &self,
            order: SortOrder,
        ) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
            let state = self.0.lock().unwrap();
            let result = ordered(&state.amenities, order);
            async { Ok(result) }
        }

        fn delete(&self, id: AmenityId) -> impl Future<Output = Result<bool, HbnbError>> + Send {
            let mut state = self.0.lock().unwrap();
            let before = state.amenities.len();
            state.amenities.retain(|a| a.id != id);
            state.links.retain(|l| l.amenity_id != id);
            let removed = state.amenities.len() != before;
            async move { Ok(removed) }
        }
    }

    impl PlaceRepository for InMemoryStore {
        fn create(&self, place: NewPlace) -> impl Future<Output = Result<Place, HbnbError>> + Send {
            let mut state = self.0.lock().unwrap();
            let id = PlaceId::from_raw(state.next_id());
            let created = Place::from_new(id, place);
            state.places.push(created.clone());
            async { Ok(created) }
        }

        fn get_by_id(
            &self,
            id: PlaceId,
        ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
            let state = self.0.lock().unwrap();
            let result = state.places.iter().find(|p| p.id == id).cloned();
            async { Ok(result) }
        }

        fn get_all(
            &self,
            order: SortOrder,
        ) -> impl Future<Output = Result<Vec<Place>, HbnbError>> + Send {
            let state = self.0.lock().unwrap();
            let result = ordered(&state.places, order);
            async { Ok(result) }
        }

        fn update(
            &self,
            place: Place,
        ) -> impl Future<Output = Result<Option<Place>, HbnbError>> + Send {
            let mut state = self.0.lock().unwrap();
            let result = state
                .places
                .iter_mut()
                .find(|p| p.id == place.id)
                .map(|slot| {
                    *slot = place.clone();
                    place
                });
            async { Ok(result) }
        }

        fn delete(&self, id: PlaceId) -> impl Future<Output = Result<bool, HbnbError>> + Send {
            let mut state = self.0.lock().unwrap();
            let before = state.places.len();
            state.places.retain(|p| p.id != id);
            state.links.retain(|l| l.place_id != id);
            let removed = state.places.len() != before;
            async move { Ok(removed) }
        }
    }

    impl PlaceAmenityRepository for InMemoryStore {
        fn attach(
            &self,
            link: NewPlaceAmenity,
        ) -> impl Future<Output = Result<PlaceAmenity, HbnbError>> + Send {
            let mut state = self.0.lock().unwrap();
            let existing = state
                .links
                .iter()
                .find(|l| l.place_id == link.place_id && l.amenity_id == link.amenity_id)
                .cloned();
            let result = if let Some(existing) = existing {
                existing
            } else {
                let created = PlaceAmenity {
                    id: PlaceAmenityId::from_raw(state.next_id()),
                    place_id: link.place_id,
                    amenity_id: link.amenity_id,
                    timestamps: link.timestamps,
                };
                state.links.push(created.clone());
                created
            };
            async { Ok(result) }
        }

        fn detach(
            &self,
            place_id: PlaceId,
            amenity_id: AmenityId,
        ) -> impl Future<Output = Result<bool, HbnbError>> + Send {
            let mut state = self.0.lock().unwrap();
            let before = state.links.len();
            state
                .links
                .retain(|l| !(l.place_id == place_id && l.amenity_id == amenity_id));
            let removed = state.links.len() != before;
            async move { Ok(removed) }
        }

        fn amenities_for_place(
            &self,
            place_id: PlaceId,
            order: SortOrder,
        ) -> impl Future<Output = Result<Vec<Amenity>, HbnbError>> + Send {
            let state = self.0.lock().unwrap();
            let linked: Vec<Amenity> = state
                .amenities
                .iter()
                .filter(|a| {
                    state
                        .links
                        .iter()
                        .any(|l| l.place_id == place_id && l.amenity_id == a.id)
                })
                .cloned()
                .collect();
            let result = ordered(&linked, order);
            async { Ok(result) }
        }
    }

    type Service = AmenityService<InMemoryStore, InMemoryStore, InMemoryStore>;

    fn make_service() -> (Service, InMemoryStore) {
        let store = InMemoryStore::default();
        let svc = AmenityService::new(store.clone(), store.clone(), store.clone());
        (svc, store)
    }

    async fn seed_place(store: &InMemoryStore) -> PlaceId {
        let place = NewPlace {
            details: PlaceDetails {
                name: "Loft".to_string(),
                ..PlaceDetails::default()
            },
            timestamps: Timestamps::at(now()),
        };
        PlaceRepository::create(store, place).await.unwrap().id
    }

    #[tokio::test]
    async fn should_create_amenity_with_equal_timestamps() {
        let (svc, _) = make_service();
        let created = svc
            .create_amenity(NewAmenity::new("wifi", now()))
            .await
            .unwrap();

        assert_eq!(created.name, "wifi");
        assert_eq!(created.timestamps.created_at, created.timestamps.updated_at);
    }

    #[tokio::test]
    async fn should_stamp_draft_at_persist_time() {
        let (svc, _) = make_service();
        let stale = now() - chrono::Duration::days(1);

        let created = svc
            .create_amenity(NewAmenity::new("wifi", stale))
            .await
            .unwrap();

        assert!(created.timestamps.created_at > stale);
    }

    #[tokio::test]
    async fn should_reject_duplicate_name() {
        let (svc, _) = make_service();
        svc.create_amenity(NewAmenity::new("wifi", now()))
            .await
            .unwrap();

        let result = svc.create_amenity(NewAmenity::new("wifi", now())).await;
        assert!(matches!(
            result,
            Err(HbnbError::Conflict(ConflictError::DuplicateName { .. }))
        ));
    }

    #[tokio::test]
    async fn should_return_not_found_when_amenity_missing() {
        let (svc, _) = make_service();
        let result = svc.get_amenity(AmenityId::from_raw(99)).await;
        assert!(matches!(
            result,
            Err(HbnbError::NotFound(NotFoundError {
                entity: "Amenity",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn should_list_amenities_in_requested_order() {
        let (svc, _) = make_service();
        for name in ["wifi", "pool", "sauna"] {
            svc.create_amenity(NewAmenity::new(name, now()))
                .await
                .unwrap();
        }

        let asc = svc.list_amenities(SortOrder::Ascending).await.unwrap();
        let ids: Vec<i64> = asc.iter().map(|a| a.id.as_raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let desc = svc.list_amenities(SortOrder::Descending).await.unwrap();
        assert_eq!(desc.first().map(|a| a.name.as_str()), Some("sauna"));
    }

    #[tokio::test]
    async fn should_succeed_when_deleting_missing_amenity() {
        let (svc, _) = make_service();
        svc.delete_amenity(AmenityId::from_raw(42)).await.unwrap();
    }

    #[tokio::test]
    async fn should_list_attached_amenities_for_place() {
        let (svc, store) = make_service();
        let place_id = seed_place(&store).await;
        let wifi = svc
            .create_amenity(NewAmenity::new("wifi", now()))
            .await
            .unwrap();

        svc.attach_amenity(place_id, wifi.id).await.unwrap();

        let listed = svc
            .list_place_amenities(place_id, SortOrder::default())
            .await
            .unwrap();
        assert_eq!(listed, vec![wifi]);
    }

    #[tokio::test]
    async fn should_not_duplicate_edge_when_attaching_twice() {
        let (svc, store) = make_service();
        let place_id = seed_place(&store).await;
        let wifi = svc
            .create_amenity(NewAmenity::new("wifi", now()))
            .await
            .unwrap();

        let first = svc.attach_amenity(place_id, wifi.id).await.unwrap();
        let second = svc.attach_amenity(place_id, wifi.id).await.unwrap();

        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn should_report_missing_amenities_when_place_has_none() {
        let (svc, store) = make_service();
        let place_id = seed_place(&store).await;

        let result = svc
            .list_place_amenities(place_id, SortOrder::default())
            .await;
        assert!(matches!(
            result,
            Err(HbnbError::NotFound(NotFoundError {
                entity: "Amenity",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn should_report_missing_place_when_listing_unknown_place() {
        let (svc, _) = make_service();
        let result = svc
            .list_place_amenities(PlaceId::from_raw(7), SortOrder::default())
            .await;
        assert!(matches!(
            result,
            Err(HbnbError::NotFound(NotFoundError { entity: "Place", .. }))
        ));
    }

    #[tokio::test]
    async fn should_check_amenity_before_place_when_attaching() {
        let (svc, _) = make_service();
        let result = svc
            .attach_amenity(PlaceId::from_raw(1), AmenityId::from_raw(2))
            .await;
        assert!(matches!(
            result,
            Err(HbnbError::NotFound(NotFoundError {
                entity: "Amenity",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn should_keep_amenity_when_detaching_with_edge_only_policy() {
        let (svc, store) = make_service();
        let place_id = seed_place(&store).await;
        let wifi = svc
            .create_amenity(NewAmenity::new("wifi", now()))
            .await
            .unwrap();
        svc.attach_amenity(place_id, wifi.id).await.unwrap();

        svc.detach_amenity(place_id, wifi.id).await.unwrap();

        assert!(svc.get_amenity(wifi.id).await.is_ok());
        assert!(
            svc.list_place_amenities(place_id, SortOrder::default())
                .await
                .is_err()
        );
    }

    #[tokio::test]
    async fn should_delete_amenity_when_detaching_with_delete_policy() {
        let store = InMemoryStore::default();
        let svc = AmenityService::new(store.clone(), store.clone(), store.clone())
            .with_detach_policy(DetachPolicy::DeleteAmenity);
        let place_id = seed_place(&store).await;
        let wifi = svc
            .create_amenity(NewAmenity::new("wifi", now()))
            .await
            .unwrap();
        svc.attach_amenity(place_id, wifi.id).await.unwrap();

        svc.detach_amenity(place_id, wifi.id).await.unwrap();

        assert!(matches!(
            svc.get_amenity(wifi.id).await,
            Err(HbnbError::NotFound(_))
        ));
    }
}
