//! JSON REST handlers for places.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

use hbnb_app::ports::{AmenityRepository, PlaceAmenityRepository, PlaceRepository};
use hbnb_domain::id::PlaceId;
use hbnb_domain::place::{NewPlace, Place, PlacePatch};
use hbnb_domain::record::{Record, SortOrder};
use hbnb_domain::time::now;

use super::{Message, Params, known_params};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Place>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get, create and update endpoints.
pub enum PlaceResponse {
    Ok(Json<Place>),
}

impl IntoResponse for PlaceResponse {
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
                msg: "Place deleted successfully.",
            })
            .into_response(),
        }
    }
}

/// `GET /places`
pub async fn list<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
) -> Result<ListResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let places = state.place_service.list_places(SortOrder::default()).await?;
    Ok(ListResponse::Ok(Json(places)))
}

/// `POST /places`
pub async fn create<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Params(params): Params,
) -> Result<PlaceResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let patch = PlacePatch::from_params(known_params(Place::KIND, PlacePatch::FIELDS, &params))?;
    let draft = NewPlace::from_patch(patch, now())?;
    let created = state.place_service.create_place(draft).await?;
    Ok(PlaceResponse::Ok(Json(created)))
}

/// `GET /places/{place_id}`
pub async fn get<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Path(place_id): Path<String>,
) -> Result<PlaceResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id: PlaceId = place_id.parse()?;
    let place = state.place_service.get_place(id).await?;
    Ok(PlaceResponse::Ok(Json(place)))
}

/// `PUT /places/{place_id}`
///
/// Query or form parameters; only the supplied fields change.
pub async fn update<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Path(place_id): Path<String>,
    Params(params): Params,
) -> Result<PlaceResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id: PlaceId = place_id.parse()?;
    let patch = PlacePatch::from_params(known_params(Place::KIND, PlacePatch::FIELDS, &params))?;
    let place = state.place_service.update_place(id, patch).await?;
    Ok(PlaceResponse::Ok(Json(place)))
}

/// `DELETE /places/{place_id}`
pub async fn delete<AR, PR, LR>(
    State(state): State<AppState<AR, PR, LR>>,
    Path(place_id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    AR: AmenityRepository + Send + Sync + 'static,
    PR: PlaceRepository + Send + Sync + 'static,
    LR: PlaceAmenityRepository + Send + Sync + 'static,
{
    let id: PlaceId = place_id.parse()?;
    state.place_service.delete_place(id).await?;
    Ok(DeleteResponse::Deleted)
}
