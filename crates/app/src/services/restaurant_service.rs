//! Restaurant service: the directory listing plus its administrative writes.

use std::sync::Arc;
use std::time::Duration;

use restomap_domain::city::City;
use restomap_domain::error::{NotFoundError, RestoMapError};
use restomap_domain::id::CityId;
use restomap_domain::restaurant::Restaurant;

use crate::pipeline::{
    DEFAULT_SLOW_REQUEST_THRESHOLD, Handler, Logging, Performance, Validating,
};
use crate::ports::{CityRepository, RestaurantRepository};
use crate::queries::get_restaurants::{
    GetRestaurantsHandler, GetRestaurantsQuery, GetRestaurantsValidator, RestaurantsVm,
};

type GetRestaurantsPipeline<CR, RR> = Logging<
    Performance<Validating<GetRestaurantsValidator<Arc<CR>>, GetRestaurantsHandler<Arc<CR>, Arc<RR>>>>,
>;

/// Application service for browsing cities and restaurants.
pub struct RestaurantService<CR, RR> {
    cities: Arc<CR>,
    restaurants: Arc<RR>,
    get_restaurants: GetRestaurantsPipeline<CR, RR>,
}

impl<CR, RR> RestaurantService<CR, RR>
where
    CR: CityRepository + Send + Sync,
    RR: RestaurantRepository + Send + Sync,
{
    /// Create a new service backed by the given repositories.
    pub fn new(cities: CR, restaurants: RR) -> Self {
        Self::with_slow_request_threshold(cities, restaurants, DEFAULT_SLOW_REQUEST_THRESHOLD)
    }

    /// Like [`RestaurantService::new`], reporting requests slower than
    /// `threshold`.
    pub fn with_slow_request_threshold(cities: CR, restaurants: RR, threshold: Duration) -> Self {
        let cities = Arc::new(cities);
        let restaurants = Arc::new(restaurants);
        let get_restaurants = Logging::new(Performance::new(
            Validating::new(
                GetRestaurantsValidator::new(Arc::clone(&cities)),
                GetRestaurantsHandler::new(Arc::clone(&cities), Arc::clone(&restaurants)),
            ),
            threshold,
        ));
        Self {
            cities,
            restaurants,
            get_restaurants,
        }
    }

    /// List all cities and the restaurants matching the optional city filter.
    ///
    /// # Errors
    ///
    /// Returns [`RestoMapError::Validation`] when the city filter is not
    /// positive or names an unknown city, or a storage error propagated from
    /// the repositories.
    pub async fn get_restaurants(
        &self,
        query: GetRestaurantsQuery,
    ) -> Result<RestaurantsVm, RestoMapError> {
        self.get_restaurants.handle(query).await
    }

    /// Create a city after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RestoMapError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, city), fields(city_name = %city.name))]
    pub async fn create_city(&self, city: City) -> Result<City, RestoMapError> {
        city.validate()?;
        self.cities.create(city).await
    }

    /// Create a restaurant after validating domain invariants and checking
    /// that its city exists.
    ///
    /// # Errors
    ///
    /// Returns [`RestoMapError::Validation`] if invariants fail,
    /// [`RestoMapError::NotFound`] if the city is unknown, or a storage error
    /// propagated from the repositories.
    #[tracing::instrument(skip(self, restaurant), fields(restaurant_name = %restaurant.name))]
    pub async fn create_restaurant(
        &self,
        restaurant: Restaurant,
    ) -> Result<Restaurant, RestoMapError> {
        restaurant.validate()?;
        if !self.cities.exists(restaurant.city_id).await? {
            return Err(NotFoundError {
                entity: "City",
                id: restaurant.city_id.to_string(),
            }
            .into());
        }
        self.restaurants.create(restaurant).await
    }

    /// Delete a city that no restaurant references anymore.
    ///
    /// # Errors
    ///
    /// Returns [`RestoMapError::NotFound`] when the city does not exist,
    /// [`RestoMapError::Conflict`] while restaurants reference it, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_city(&self, id: CityId) -> Result<(), RestoMapError> {
        self.cities.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queries::get_restaurants::{CITY_ID_FIELD, INVALID_CITY_ID, UNKNOWN_CITY_ID};
    use crate::test_support::MemoryStore;
    use restomap_domain::error::{FieldFailure, ValidationError};

    fn make_service(store: &MemoryStore) -> RestaurantService<MemoryStore, MemoryStore> {
        RestaurantService::new(store.clone(), store.clone())
    }

    fn failures(result: Result<RestaurantsVm, RestoMapError>) -> Vec<FieldFailure> {
        match result {
            Err(RestoMapError::Validation(ValidationError::Failures(failures))) => failures,
            other => panic!("expected validation failures, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn should_list_restaurants_for_existing_city() {
        let store = MemoryStore::seeded();
        let svc = make_service(&store);

        let vm = svc
            .get_restaurants(GetRestaurantsQuery { city_id: Some(1) })
            .await
            .unwrap();

        assert_eq!(vm.selected_city_id, Some(1));
        let names: Vec<&str> = vm.restaurants.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["BEEF meat & wine", "Kanapa"]);
        assert_eq!(store.exists_calls(), 1);
    }

    #[tokio::test]
    async fn should_not_look_up_city_when_no_filter() {
        let store = MemoryStore::seeded();
        let svc = make_service(&store);

        let vm = svc
            .get_restaurants(GetRestaurantsQuery::default())
            .await
            .unwrap();

        assert_eq!(vm.restaurants.len(), 4);
        assert_eq!(store.exists_calls(), 0);
    }

    #[tokio::test]
    async fn should_reject_non_positive_city_without_lookup() {
        let store = MemoryStore::seeded();
        let svc = make_service(&store);

        let result = svc
            .get_restaurants(GetRestaurantsQuery { city_id: Some(-5) })
            .await;

        assert_eq!(
            failures(result),
            vec![FieldFailure::new(CITY_ID_FIELD, INVALID_CITY_ID)]
        );
        assert_eq!(store.exists_calls(), 0);
    }

    #[tokio::test]
    async fn should_reject_unknown_city() {
        let store = MemoryStore::seeded();
        let svc = make_service(&store);

        let result = svc
            .get_restaurants(GetRestaurantsQuery { city_id: Some(42) })
            .await;

        assert_eq!(
            failures(result),
            vec![FieldFailure::new(CITY_ID_FIELD, UNKNOWN_CITY_ID)]
        );
    }

    #[tokio::test]
    async fn should_create_city_when_valid() {
        let store = MemoryStore::default();
        let svc = make_service(&store);
        let city = City::builder()
            .id(9)
            .name("Warsaw")
            .country("Poland")
            .location(52.2297, 21.0122)
            .build()
            .unwrap();

        svc.create_city(city).await.unwrap();

        let vm = svc
            .get_restaurants(GetRestaurantsQuery { city_id: Some(9) })
            .await
            .unwrap();
        assert_eq!(vm.cities.len(), 1);
        assert!(vm.restaurants.is_empty());
    }

    #[tokio::test]
    async fn should_reject_create_city_when_name_is_empty() {
        let store = MemoryStore::default();
        let svc = make_service(&store);
        let mut city = City::builder()
            .id(1)
            .name("Kyiv")
            .country("Ukraine")
            .build()
            .unwrap();
        city.name = String::new();

        let result = svc.create_city(city).await;
        assert!(matches!(
            result,
            Err(RestoMapError::Validation(ValidationError::EmptyName))
        ));
    }

    #[tokio::test]
    async fn should_reject_restaurant_when_city_unknown() {
        let store = MemoryStore::seeded();
        let svc = make_service(&store);
        let restaurant = Restaurant::builder()
            .id(100)
            .name("U Fleku")
            .address("Křemencova 11, Prague, 110 00")
            .location(50.0820, 14.4162)
            .city_id(CityId::new(99).unwrap())
            .build()
            .unwrap();

        let result = svc.create_restaurant(restaurant).await;
        assert!(matches!(result, Err(RestoMapError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_create_restaurant_visible_in_listing() {
        let store = MemoryStore::seeded();
        let svc = make_service(&store);
        let restaurant = Restaurant::builder()
            .id(100)
            .name("Dacha")
            .address("Derybasivska St, 15, Odesa, 65026")
            .location(46.4854, 30.7394)
            .city_id(CityId::new(3).unwrap())
            .build()
            .unwrap();

        svc.create_restaurant(restaurant).await.unwrap();

        let vm = svc
            .get_restaurants(GetRestaurantsQuery { city_id: Some(3) })
            .await
            .unwrap();
        assert_eq!(vm.restaurants.len(), 1);
        assert_eq!(vm.restaurants[0].city_name, "Odesa");
    }

    #[tokio::test]
    async fn should_refuse_to_delete_city_with_restaurants() {
        let store = MemoryStore::seeded();
        let svc = make_service(&store);

        let result = svc.delete_city(CityId::new(1).unwrap()).await;
        assert!(matches!(result, Err(RestoMapError::Conflict(_))));
    }

    #[tokio::test]
    async fn should_delete_city_without_restaurants() {
        let store = MemoryStore::seeded();
        let svc = make_service(&store);

        svc.delete_city(CityId::new(3).unwrap()).await.unwrap();

        let vm = svc
            .get_restaurants(GetRestaurantsQuery::default())
            .await
            .unwrap();
        assert_eq!(vm.cities.len(), 2);
    }
}
