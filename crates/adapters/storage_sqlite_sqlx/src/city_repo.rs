//! `SQLite` implementation of [`CityRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use restomap_app::ports::CityRepository;
use restomap_domain::city::City;
use restomap_domain::error::{ConflictError, NotFoundError, RestoMapError};
use restomap_domain::id::CityId;

use crate::error::{StorageError, decode_error, is_foreign_key_violation};

/// Wrapper for converting database rows into domain [`City`].
struct Wrapper(City);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(City {
            id: CityId::new(id).map_err(decode_error)?,
            name: row.try_get("name")?,
            country: row.try_get("country")?,
            latitude: row.try_get("latitude")?,
            longitude: row.try_get("longitude")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO cities (id, name, country, latitude, longitude) VALUES (?, ?, ?, ?, ?)";
const SELECT_ALL: &str =
    "SELECT id, name, country, latitude, longitude FROM cities ORDER BY name COLLATE NOCASE, name, id";
const EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM cities WHERE id = ?)";
const DELETE_BY_ID: &str = "DELETE FROM cities WHERE id = ?";

/// `SQLite`-backed city repository.
pub struct SqliteCityRepository {
    pool: SqlitePool,
}

impl SqliteCityRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CityRepository for SqliteCityRepository {
    fn create(&self, city: City) -> impl Future<Output = Result<City, RestoMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(city.id.get())
                .bind(&city.name)
                .bind(&city.country)
                .bind(city.latitude)
                .bind(city.longitude)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(city)
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<City>, RestoMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn exists(&self, id: CityId) -> impl Future<Output = Result<bool, RestoMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            let found: i64 = sqlx::query_scalar(EXISTS)
                .bind(id.get())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found != 0)
        }
    }

    fn delete(&self, id: CityId) -> impl Future<Output = Result<(), RestoMapError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.get())
                .execute(&pool)
                .await;

            match result {
                Ok(done) if done.rows_affected() == 0 => Err(NotFoundError {
                    entity: "City",
                    id: id.to_string(),
                }
                .into()),
                Ok(_) => Ok(()),
                Err(err) if is_foreign_key_violation(&err) => Err(ConflictError {
                    entity: "City",
                    id: id.to_string(),
                    dependents: "restaurants",
                }
                .into()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }
}
