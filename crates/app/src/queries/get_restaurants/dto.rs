//! Transport shapes returned by [`GetRestaurantsQuery`](super::GetRestaurantsQuery).
//!
//! Each shape has exactly one `From` impl mapping the domain record it is
//! projected from.

use serde::{Deserialize, Serialize};

use restomap_domain::city::City;
use restomap_domain::restaurant::RestaurantWithCity;

/// A city as listed in the city selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&City> for CityDto {
    fn from(city: &City) -> Self {
        Self {
            id: city.id.get(),
            name: city.name.clone(),
            country: city.country.clone(),
            latitude: city.latitude,
            longitude: city.longitude,
        }
    }
}

/// A restaurant with its city's name and country denormalized for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: i64,
    pub name: String,
    pub building_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city_id: i64,
    pub city_name: String,
    pub country: String,
}

impl From<&RestaurantWithCity> for RestaurantDto {
    fn from(joined: &RestaurantWithCity) -> Self {
        let restaurant = &joined.restaurant;
        Self {
            id: restaurant.id.get(),
            name: restaurant.name.clone(),
            building_id: restaurant.building_id.clone(),
            latitude: restaurant.latitude,
            longitude: restaurant.longitude,
            address: restaurant.address.clone(),
            city_id: restaurant.city_id.get(),
            city_name: joined.city_name.clone(),
            country: joined.country.clone(),
        }
    }
}

/// Everything the restaurant page needs in one response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantsVm {
    pub cities: Vec<CityDto>,
    pub restaurants: Vec<RestaurantDto>,
    pub selected_city_id: Option<i64>,
}
