//! JSON REST handlers for the amenities attached to a place.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use hbnb_app::ports::{AmenityRepository, PlaceAmenityRepository, PlaceRepository};
use hbnb_domain::amenity::Amenity;
use hbnb_domain::id::{AmenityId, PlaceId};
use hbnb_domain::record::SortOrder;

use super::Message;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Amenity>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the attach endpoint.
pub enum AttachResponse {
    Created,
}

impl IntoResponse for AttachResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => (
                StatusCode::CREATED,
                Json(Message {
                    msg: "Amenity added to place successfully.",
                }),
            )
                .into_response(),
        }
    }
}

/// Possible responses from the detach endpoint.
pub enum DetachResponse {
    Deleted,
}

impl IntoResponse for DetachResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(Message {
                msg: "Amenity deleted successfully.",
            })
            .into_response(),
        }
    }
}

fn parse_pair(place_id: &str, amenity_id: &str) -> Result<(PlaceId, AmenityId), ApiError> {
    Ok((place_id.parse()?, amenity_id.parse()?))
}

/// `GET /places/{place_id}/amenities`
pub async fn list<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Path(place_id): Path<String>,
) -> Result<ListResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let place_id: PlaceId = place_id.parse()?;
    let amenities = state
        .amenity_service
        .list_place_amenities(place_id, SortOrder::default())
        .await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `POST /places/{place_id}/amenities/{amenity_id}`
pub async fn attach<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<AttachResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let (place_id, amenity_id) = parse_pair(&place_id, &amenity_id)?;
    state
        .amenity_service
        .attach_amenity(place_id, amenity_id)
        .await?;
    Ok(AttachResponse::Created)
}

/// `DELETE /places/{place_id}/amenities/{amenity_id}`
pub async fn detach<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Path((place_id, amenity_id)): Path<(String, String)>,
) -> Result<DetachResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let (place_id, amenity_id) = parse_pair(&place_id, &amenity_id)?;
    state
        .amenity_service
        .detach_amenity(place_id, amenity_id)
        .await?;
    Ok(DetachResponse::Deleted)
}
