//! Validation rules for [`GetRestaurantsQuery`].

use restomap_domain::error::{FieldFailure, RestoMapError};
use restomap_domain::id::CityId;

use super::GetRestaurantsQuery;
use crate::pipeline::Validator;
use crate::ports::CityRepository;

/// Field name failures are reported under, matching the query-string key.
pub const CITY_ID_FIELD: &str = "cityId";
pub const INVALID_CITY_ID: &str = "City ID must be greater than 0 when provided.";
pub const UNKNOWN_CITY_ID: &str = "City with the specified ID does not exist.";

/// Rejects non-positive and unknown city filters.
///
/// The existence lookup only runs for positive ids.
pub struct GetRestaurantsValidator<CR> {
    cities: CR,
}

impl<CR> GetRestaurantsValidator<CR> {
    pub fn new(cities: CR) -> Self {
        Self { cities }
    }
}

impl<CR> Validator<GetRestaurantsQuery> for GetRestaurantsValidator<CR>
where
    CR: CityRepository + Send + Sync,
{
    async fn validate(
        &self,
        query: &GetRestaurantsQuery,
    ) -> Result<Vec<FieldFailure>, RestoMapError> {
        let mut failures = Vec::new();
        let Some(raw) = query.city_id else {
            return Ok(failures);
        };

        match CityId::new(raw) {
            Err(_) => failures.push(FieldFailure::new(CITY_ID_FIELD, INVALID_CITY_ID)),
            Ok(id) => {
                if !self.cities.exists(id).await? {
                    failures.push(FieldFailure::new(CITY_ID_FIELD, UNKNOWN_CITY_ID));
                }
            }
        }
        Ok(failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use restomap_domain::city::City;

    struct KnownCities {
        ids: Vec<i64>,
        lookups: AtomicUsize,
    }

    impl KnownCities {
        fn new(ids: &[i64]) -> Self {
            Self {
                ids: ids.to_vec(),
                lookups: AtomicUsize::new(0),
            }
        }
    }

    impl CityRepository for KnownCities {
        fn create(&self, city: City) -> impl Future<Output = Result<City, RestoMapError>> + Send {
            async { Ok(city) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<City>, RestoMapError>> + Send {
            async { Ok(vec![]) }
        }

        fn exists(&self, id: CityId) -> impl Future<Output = Result<bool, RestoMapError>> + Send {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            let found = self.ids.contains(&id.get());
            async move { Ok(found) }
        }

        fn delete(&self, _id: CityId) -> impl Future<Output = Result<(), RestoMapError>> + Send {
            async { Ok(()) }
        }
    }

    fn query(city_id: Option<i64>) -> GetRestaurantsQuery {
        GetRestaurantsQuery { city_id }
    }

    #[tokio::test]
    async fn should_pass_when_city_id_absent() {
        let validator = GetRestaurantsValidator::new(KnownCities::new(&[]));
        let failures = validator.validate(&query(None)).await.unwrap();
        assert!(failures.is_empty());
        assert_eq!(validator.cities.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_fail_without_lookup_when_city_id_not_positive() {
        for raw in [0, -1, i64::MIN] {
            let validator = GetRestaurantsValidator::new(KnownCities::new(&[1]));
            let failures = validator.validate(&query(Some(raw))).await.unwrap();

            assert_eq!(
                failures,
                vec![FieldFailure::new(CITY_ID_FIELD, INVALID_CITY_ID)],
                "city id {raw}"
            );
            assert_eq!(validator.cities.lookups.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn should_fail_when_city_does_not_exist() {
        let validator = GetRestaurantsValidator::new(KnownCities::new(&[1]));
        let failures = validator.validate(&query(Some(2))).await.unwrap();
        assert_eq!(
            failures,
            vec![FieldFailure::new(CITY_ID_FIELD, UNKNOWN_CITY_ID)]
        );
        assert_eq!(validator.cities.lookups.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_pass_when_city_exists() {
        let validator = GetRestaurantsValidator::new(KnownCities::new(&[1, 2]));
        let failures = validator.validate(&query(Some(2))).await.unwrap();
        assert!(failures.is_empty());
    }
}
