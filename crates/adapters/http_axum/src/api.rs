//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod amenities;
#[allow(clippy::missing_errors_doc)]
pub mod place_amenities;
#[allow(clippy::missing_errors_doc)]
pub mod places;

use axum::body::Bytes;
use axum::extract::{FromRequest, Query, Request};
use axum::http::{StatusCode, header};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Serialize;

use hbnb_app::ports::{AmenityRepository, PlaceAmenityRepository, PlaceRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// `{"msg": "..."}` body returned by endpoints that only confirm an action.
#[derive(Debug, Serialize)]
pub struct Message {
    pub msg: &'static str,
}

/// Parameters of a write request: the query string pairs followed by the
/// form-encoded body pairs, if any.
///
/// A request without a body is accepted with query parameters alone; any
/// body must be `application/x-www-form-urlencoded`. Failures are answered
/// with a `{"msg": ...}` body like every other API error.
pub struct Params(pub Vec<(String, String)>);

impl<S> FromRequest<S> for Params
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Query(mut params) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map_err(|rejection| ApiError::rejected(rejection.status(), rejection.body_text()))?;

        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Form(body) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    ApiError::rejected(rejection.status(), rejection.body_text())
                })?;
            params.extend(body);
        } else {
            let body = Bytes::from_request(req, state).await.map_err(|rejection| {
                ApiError::rejected(rejection.status(), rejection.body_text())
            })?;
            if !body.is_empty() {
                return Err(ApiError::rejected(
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "Request body must be application/x-www-form-urlencoded",
                ));
            }
        }

        Ok(Self(params))
    }
}

/// Borrow form pairs as `(&str, &str)` for the domain parsers, logging any
/// key the target record does not know about.
fn known_params<'a>(
    kind: &'static str,
    fields: &[&str],
    params: &'a [(String, String)],
) -> Vec<(&'a str, &'a str)> {
    for (key, _) in params {
        if !fields.contains(&key.as_str()) {
            tracing::debug!(kind, %key, "ignoring unknown parameter");
        }
    }
    params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

/// Build the API router.
pub fn routes<AR, PR, LR>() -> Router<AppState<AR, PR, LR>>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    Router::new()
        // Amenities
        .route(
            "/amenities",
            get(amenities::list::<AR, PR, LR>).post(amenities::create::<AR, PR, LR>),
        )
        .route(
            "/amenities/{amenity_id}",
            get(amenities::get::<AR, PR, LR>).delete(amenities::delete::<AR, PR, LR>),
        )
        // Places
        .route(
            "/places",
            get(places::list::<AR, PR, LR>).post(places::create::<AR, PR, LR>),
        )
        .route(
            "/places/{place_id}",
            get(places::get::<AR, PR, LR>)
                .put(places::update::<AR, PR, LR>)
                .delete(places::delete::<AR, PR, LR>),
        )
        // Place ↔ amenity links
        .route(
            "/places/{place_id}/amenities",
            get(place_amenities::list::<AR, PR, LR>),
        )
        .route(
            "/places/{place_id}/amenities/{amenity_id}",
            post(place_amenities::attach::<AR, PR, LR>)
                .delete(place_amenities::detach::<AR, PR, LR>),
        )
}
