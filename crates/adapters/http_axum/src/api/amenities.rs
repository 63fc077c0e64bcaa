//! JSON REST handlers for amenities.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use hbnb_app::ports::{AmenityRepository, PlaceAmenityRepository, PlaceRepository};
use hbnb_domain::amenity::{Amenity, NewAmenity};
use hbnb_domain::id::AmenityId;
use hbnb_domain::record::{Record, SortOrder};
use hbnb_domain::time::now;

use super::{Message, Params, known_params};
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

/// Possible responses from the get and create endpoints.
pub enum AmenityResponse {
    Ok(Json<Amenity>),
}

impl IntoResponse for AmenityResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(Message {
                msg: "Amenity deleted successfully.",
            })
            .into_response(),
        }
    }
}

/// `GET /amenities`
pub async fn list<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
) -> Result<ListResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let amenities = state
        .amenity_service
        .list_amenities(SortOrder::default())
        .await?;
    Ok(ListResponse::Ok(Json(amenities)))
}

/// `POST /amenities`
///
/// Query or form parameters; `name` is required and must be unused.
pub async fn create<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Params(params): Params,
) -> Result<AmenityResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let pairs = known_params(Amenity::KIND, Amenity::FIELDS, &params);
    let draft = NewAmenity::from_params(pairs, now())?;
    let created = state.amenity_service.create_amenity(draft).await?;
    Ok(AmenityResponse::Ok(Json(created)))
}

/// `GET /amenities/{amenity_id}`
pub async fn get<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Path(amenity_id): Path<String>,
) -> Result<AmenityResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id: AmenityId = amenity_id.parse()?;
    let amenity = state.amenity_service.get_amenity(id).await?;
    Ok(AmenityResponse::Ok(Json(amenity)))
}

/// `DELETE /amenities/{amenity_id}`
pub async fn delete<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Path(amenity_id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id: AmenityId = amenity_id.parse()?;
    state.amenity_service.delete_amenity(id).await?;
    Ok(DeleteResponse::Deleted)
}
