//! City: a named geographic location grouping restaurants.

use serde::{Deserialize, Serialize};

use crate::error::{RestoMapError, ValidationError};
use crate::geo::{check_length, validate_coordinates};
use crate::id::CityId;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_COUNTRY_LEN: usize = 100;

/// A city where restaurants can be located.
///
/// Restaurants point at their city through
/// [`Restaurant::city_id`](crate::restaurant::Restaurant::city_id); the city
/// itself holds no back-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl City {
    /// Create a builder for constructing a [`City`].
    #[must_use]
    pub fn builder() -> CityBuilder {
        CityBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RestoMapError::Validation`] when `name` or `country` is
    /// empty or too long, or when the coordinates are off the globe.
    pub fn validate(&self) -> Result<(), RestoMapError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.country.trim().is_empty() {
            return Err(ValidationError::EmptyCountry.into());
        }
        check_length("name", &self.name, MAX_NAME_LEN)?;
        check_length("country", &self.country, MAX_COUNTRY_LEN)?;
        validate_coordinates(self.latitude, self.longitude)?;
        Ok(())
    }
}

/// Step-by-step builder for [`City`].
#[derive(Debug, Default)]
pub struct CityBuilder {
    id: Option<i64>,
    name: Option<String>,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

impl CityBuilder {
    #[must_use]
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    #[must_use]
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Consume the builder, validate, and return a [`City`].
    ///
    /// # Errors
    ///
    /// Returns [`RestoMapError::Validation`] if the id is missing or not
    /// positive, or if any invariant checked by [`City::validate`] fails.
    pub fn build(self) -> Result<City, RestoMapError> {
        let id = CityId::new(self.id.unwrap_or_default())?;
        let city = City {
            id,
            name: self.name.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
            latitude: self.latitude,
            longitude: self.longitude,
        };
        city.validate()?;
        Ok(city)
    }
}
