//! Storage port: repository traits for persistence.

use std::future::Future;
use std::sync::Arc;

use restomap_domain::city::City;
use restomap_domain::error::RestoMapError;
use restomap_domain::id::CityId;
use restomap_domain::restaurant::{Restaurant, RestaurantWithCity};

/// Persistence for [`City`] records.
pub trait CityRepository {
    /// Insert a new city.
    fn create(&self, city: City) -> impl Future<Output = Result<City, RestoMapError>> + Send;

    /// All cities ordered by name ascending, ties broken by id.
    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, RestoMapError>> + Send;

    /// Whether a city with `id` exists.
    fn exists(&self, id: CityId) -> impl Future<Output = Result<bool, RestoMapError>> + Send;

    /// Delete a city.
    ///
    /// Implementations return [`RestoMapError::NotFound`] when no such city
    /// exists and [`RestoMapError::Conflict`] while restaurants still
    /// reference it.
    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), RestoMapError>> + Send;
}

/// Persistence for [`Restaurant`] records.
pub trait RestaurantRepository {
    /// Insert a new restaurant. The referenced city must exist.
    fn create(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, RestoMapError>> + Send;

    /// Restaurants joined with their city, ordered by name ascending with
    /// ties broken by id. When `city_id` is set only that city's restaurants
    /// are returned.
    fn find(
        &self,
        city_id: Option<CityId>,
    ) -> impl Future<Output = Result<Vec<RestaurantWithCity>, RestoMapError>> + Send;
}

impl<T: CityRepository + Send + Sync> CityRepository for Arc<T> {
    fn create(&self, city: City) -> impl Future<Output = Result<City, RestoMapError>> + Send {
        (**self).create(city)
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, RestoMapError>> + Send {
        (**self).get_all()
    }

    fn exists(&self, id: CityId) -> impl Future<Output = Result<bool, RestoMapError>> + Send {
        (**self).exists(id)
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), RestoMapError>> + Send {
        (**self).delete(id)
    }
}

impl<T: RestaurantRepository + Send + Sync> RestaurantRepository for Arc<T> {
    fn create(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, RestoMapError>> + Send {
        (**self).create(restaurant)
    }

    fn find(
        &self,
        city_id: Option<CityId>,
    ) -> impl Future<Output = Result<Vec<RestaurantWithCity>, RestoMapError>> + Send {
        (**self).find(city_id)
    }
}
