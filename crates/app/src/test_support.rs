//! In-memory port implementations shared by unit tests.

use std::cmp::Ordering as CmpOrdering;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use restomap_domain::city::City;
use restomap_domain::error::{ConflictError, NotFoundError, RestoMapError};
use restomap_domain::id::CityId;
use restomap_domain::restaurant::{Restaurant, RestaurantWithCity};

use crate::ports::{CityRepository, RestaurantRepository};

/// Name order as the store applies it: ASCII case folded first, then bytes.
fn by_name(a: &str, b: &str) -> CmpOrdering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
        .then_with(|| a.cmp(b))
}

#[derive(Default)]
struct Tables {
    cities: Vec<City>,
    restaurants: Vec<Restaurant>,
}

/// Both tables behind one handle so foreign keys can be checked.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    exists_calls: Arc<AtomicUsize>,
}

impl MemoryStore {
    /// Kyiv (2 restaurants), Lviv (2 restaurants), Odesa (none).
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut tables = store.tables.lock().unwrap();
            for (id, name, lat, lon) in [
                (1, "Kyiv", 50.4501, 30.5234),
                (2, "Lviv", 49.8397, 24.0297),
                (3, "Odesa", 46.4825, 30.7233),
            ] {
                tables.cities.push(
                    City::builder()
                        .id(id)
                        .name(name)
                        .country("Ukraine")
                        .location(lat, lon)
                        .build()
                        .unwrap(),
                );
            }
            for (id, name, city_id, address) in [
                (1, "Kanapa", 1, "Andriyivskyy Descent, 19/8, Kyiv, 04070"),
                (2, "Kryivka", 2, "Rynok Square, 14, Lviv, 79008"),
                (3, "BEEF meat & wine", 1, "Shota Rustaveli St, 4, Kyiv, 01001"),
                (4, "Amadeus", 2, "Rynok Square, 4, Lviv, 79008"),
            ] {
                tables.restaurants.push(
                    Restaurant::builder()
                        .id(id)
                        .name(name)
                        .location(50.0, 30.0)
                        .address(address)
                        .city_id(CityId::new(city_id).unwrap())
                        .build()
                        .unwrap(),
                );
            }
        }
        store
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }
}

impl CityRepository for MemoryStore {
    fn create(&self, city: City) -> impl Future<Output = Result<City, RestoMapError>> + Send {
        self.tables.lock().unwrap().cities.push(city.clone());
        async { Ok(city) }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, RestoMapError>> + Send {
        let mut cities = self.tables.lock().unwrap().cities.clone();
        cities.sort_by(|a, b| by_name(&a.name, &b.name).then(a.id.cmp(&b.id)));
        async { Ok(cities) }
    }

    fn exists(&self, id: CityId) -> impl Future<Output = Result<bool, RestoMapError>> + Send {
        self.exists_calls.fetch_add(1, Ordering::SeqCst);
        let found = self.tables.lock().unwrap().cities.iter().any(|c| c.id == id);
        async move { Ok(found) }
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), RestoMapError>> + Send {
        let mut tables = self.tables.lock().unwrap();
        let result = if tables.restaurants.iter().any(|r| r.city_id == id) {
            Err(ConflictError {
                entity: "City",
                id: id.to_string(),
                dependents: "restaurants",
            }
            .into())
        } else if let Some(pos) = tables.cities.iter().position(|c| c.id == id) {
            tables.cities.remove(pos);
            Ok(())
        } else {
            Err(NotFoundError {
                entity: "City",
                id: id.to_string(),
            }
            .into())
        };
        async { result }
    }
}

impl RestaurantRepository for MemoryStore {
    fn create(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, RestoMapError>> + Send {
        self.tables
            .lock()
            .unwrap()
            .restaurants
            .push(restaurant.clone());
        async { Ok(restaurant) }
    }

    fn find(
        &self,
        city_id: Option<CityId>,
    ) -> impl Future<Output = Result<Vec<RestaurantWithCity>, RestoMapError>> + Send {
        let tables = self.tables.lock().unwrap();
        let mut joined: Vec<RestaurantWithCity> = tables
            .restaurants
            .iter()
            .filter(|r| city_id.is_none_or(|id| r.city_id == id))
            .filter_map(|r| {
                let city = tables.cities.iter().find(|c| c.id == r.city_id)?;
                Some(RestaurantWithCity::new(r.clone(), city))
            })
            .collect();
        joined.sort_by(|a, b| {
            by_name(&a.restaurant.name, &b.restaurant.name)
                .then(a.restaurant.id.cmp(&b.restaurant.id))
        });
        async { Ok(joined) }
    }
}
