//! `SQLite` implementation of [`RestaurantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use restomap_app::ports::RestaurantRepository;
use restomap_domain::error::{NotFoundError, RestoMapError};
use restomap_domain::id::{CityId, RestaurantId};
use restomap_domain::restaurant::{Restaurant, RestaurantWithCity};

use crate::error::{StorageError, decode_error, is_foreign_key_violation};

/// Wrapper for converting joined rows into [`RestaurantWithCity`].
struct Wrapper(RestaurantWithCity);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let city_id: i64 = row.try_get("city_id")?;

        let restaurant = Restaurant {
            id: RestaurantId::new(id).map_err(decode_error)?,
            name: row.try_get("name")?,
            building_id: row.try_get("building_id")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
            address: row.try_get("address")?,
            city_id: CityId::new(city_id).map_err(decode_error)?,
        };

        Ok(Self(RestaurantWithCity {
            restaurant,
            city_name: row.try_get("city_name")?,
            country: row.try_get("country")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO restaurants (id, name, building_id, latitude, longitude, address, city_id) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_ALL: &str = "SELECT r.id, r.name, r.building_id, r.latitude, r.longitude, r.address, r.city_id, c.name AS city_name, c.country AS country \
     FROM restaurants r INNER JOIN cities c ON c.id = r.city_id \
     ORDER BY r.name COLLATE NOCASE, r.name, r.id";
const SELECT_BY_CITY: &str = "SELECT r.id, r.name, r.building_id, r.latitude, r.longitude, r.address, r.city_id, c.name AS city_name, c.country AS country \
     FROM restaurants r INNER JOIN cities c ON c.id = r.city_id \
     WHERE r.city_id = ? \
     ORDER BY r.name COLLATE NOCASE, r.name, r.id";

/// `SQLite`-backed restaurant repository.
pub struct SqliteRestaurantRepository {
    pool: SqlitePool,
}

impl SqliteRestaurantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RestaurantRepository for SqliteRestaurantRepository {
    fn create(
        &self,
        restaurant: Restaurant,
    ) -> impl Future<Output = Result<Restaurant, RestoMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(restaurant.id.get())
                .bind(&restaurant.name)
                .bind(restaurant.building_id.as_deref())
                .bind(restaurant.latitude)
                .bind(restaurant.longitude)
                .bind(&restaurant.address)
                .bind(restaurant.city_id.get())
                .execute(&pool)
                .await;

            match result {
                Ok(_) => Ok(restaurant),
                Err(err) if is_foreign_key_violation(&err) => Err(NotFoundError {
                    entity: "City",
                    id: restaurant.city_id.to_string(),
                }
                .into()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn find(
        &self,
        city_id: Option<CityId>,
    ) -> impl Future<Output = Result<Vec<RestaurantWithCity>, RestoMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            let query = match city_id {
                Some(id) => sqlx::query_as::<_, Wrapper>(SELECT_BY_CITY).bind(id.get()),
                None => sqlx::query_as::<_, Wrapper>(SELECT_ALL),
            };
            let rows: Vec<Wrapper> = query.fetch_all(&pool).await.map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
