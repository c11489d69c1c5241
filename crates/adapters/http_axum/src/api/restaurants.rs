//! JSON handler for the restaurant listing.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use restomap_app::ports::{CityRepository, RestaurantRepository};
use restomap_app::queries::get_restaurants::{CITY_ID_FIELD, GetRestaurantsQuery, RestaurantsVm};

use crate::error::ApiError;
use crate::state::AppState;

/// Raw query string of the list endpoint.
///
/// `cityId` is bound as text so that a malformed value is reported as a
/// field failure instead of a bare extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub city_id: Option<String>,
}

impl TryFrom<ListParams> for GetRestaurantsQuery {
    type Error = ApiError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        let city_id = match params.city_id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                ApiError::invalid_field(CITY_ID_FIELD, format!("The value '{raw}' is not valid."))
            })?),
        };
        Ok(Self { city_id })
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<RestaurantsVm>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /restaurants?cityId=…`
pub async fn list<CR, RR>(
    State(state): State<AppState<CR, RR>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    CR: CityRepository + Send + Sync + 'static,
    RR: RestaurantRepository + Send + Sync + 'static,
{
    let Query(params) =
        params.map_err(|rejection| ApiError::invalid_field(CITY_ID_FIELD, rejection.body_text()))?;
    let query = GetRestaurantsQuery::try_from(params)?;
    let vm = state.restaurant_service.get_restaurants(query).await?;
    Ok(ListResponse::Ok(Json(vm)))
}
