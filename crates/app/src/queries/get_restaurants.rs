//! List cities and restaurants, optionally filtered by city.

mod dto;
mod validator;

pub use dto::{CityDto, RestaurantDto, RestaurantsVm};
pub use validator::{CITY_ID_FIELD, GetRestaurantsValidator, INVALID_CITY_ID, UNKNOWN_CITY_ID};

use serde::Deserialize;

use restomap_domain::error::RestoMapError;
use restomap_domain::id::CityId;

use crate::pipeline::{Handler, Request};
use crate::ports::{CityRepository, RestaurantRepository};

/// Parameters of the restaurant listing.
///
/// `city_id` is kept as a raw integer so non-positive values reach the
/// validator instead of failing deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRestaurantsQuery {
    pub city_id: Option<i64>,
}

impl Request for GetRestaurantsQuery {
    type Response = RestaurantsVm;
    const NAME: &'static str = "GetRestaurantsQuery";
}

/// Loads the city selector and the (filtered) restaurant list.
///
/// Both reads are independent and run concurrently.
pub struct GetRestaurantsHandler<CR, RR> {
    cities: CR,
    restaurants: RR,
}

impl<CR, RR> GetRestaurantsHandler<CR, RR> {
    pub fn new(cities: CR, restaurants: RR) -> Self {
        Self {
            cities,
            restaurants,
        }
    }
}

impl<CR, RR> Handler<GetRestaurantsQuery> for GetRestaurantsHandler<CR, RR>
where
    CR: CityRepository + Send + Sync,
    RR: RestaurantRepository + Send + Sync,
{
    async fn handle(&self, query: GetRestaurantsQuery) -> Result<RestaurantsVm, RestoMapError> {
        let filter = query.city_id.map(CityId::new).transpose()?;

        let (cities, restaurants) =
            tokio::try_join!(self.cities.get_all(), self.restaurants.find(filter))?;

        Ok(RestaurantsVm {
            cities: cities.iter().map(CityDto::from).collect(),
            restaurants: restaurants.iter().map(RestaurantDto::from).collect(),
            selected_city_id: query.city_id,
        })
    }
}
