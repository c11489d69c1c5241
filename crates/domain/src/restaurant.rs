//! Restaurant: a dining establishment located within a city.

use serde::{Deserialize, Serialize};

use crate::city::City;
use crate::error::{RestoMapError, ValidationError};
use crate::geo::{check_length, validate_coordinates};
use crate::id::{CityId, RestaurantId};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_BUILDING_ID_LEN: usize = 50;
pub const MAX_ADDRESS_LEN: usize = 500;

/// A restaurant belonging to exactly one [`City`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    /// `OpenStreetMap` building identifier, when known.
    pub building_id: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
    pub city_id: CityId,
}

impl Restaurant {
    /// Create a builder for constructing a [`Restaurant`].
    #[must_use]
    pub fn builder() -> RestaurantBuilder {
        RestaurantBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// Whether `city_id` points at an existing city is a storage concern and
    /// is not checked here.
    ///
    /// # Errors
    ///
    /// Returns [`RestoMapError::Validation`] when `name` or `address` is
    /// empty, a text field exceeds its limit, or the coordinates are off the
    /// globe.
    pub fn validate(&self) -> Result<(), RestoMapError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.address.trim().is_empty() {
            return Err(ValidationError::EmptyAddress.into());
        }
        check_length("name", &self.name, MAX_NAME_LEN)?;
        check_length("address", &self.address, MAX_ADDRESS_LEN)?;
        if let Some(building_id) = &self.building_id {
            check_length("building_id", building_id, MAX_BUILDING_ID_LEN)?;
        }
        validate_coordinates(self.latitude, self.longitude)?;
        Ok(())
    }
}

/// A restaurant joined with the name and country of its city.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantWithCity {
    pub restaurant: Restaurant,
    pub city_name: String,
    pub country: String,
}

impl RestaurantWithCity {
    /// Join a restaurant with its parent city.
    ///
    /// The caller is responsible for passing the city `restaurant.city_id`
    /// refers to.
    #[must_use]
    pub fn new(restaurant: Restaurant, city: &City) -> Self {
        debug_assert_eq!(restaurant.city_id, city.id);
        Self {
            restaurant,
            city_name: city.name.clone(),
            country: city.country.clone(),
        }
    }
}

/// Step-by-step builder for [`Restaurant`].
#[derive(Debug, Default)]
pub struct RestaurantBuilder {
    id: Option<i64>,
    name: Option<String>,
    building_id: Option<String>,
    latitude: f64,
    longitude: f64,
    address: Option<String>,
    city_id: Option<CityId>,
}

impl RestaurantBuilder {
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
    pub fn building_id(mut self, building_id: impl Into<String>) -> Self {
        self.building_id = Some(building_id.into());
        self
    }

    #[must_use]
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn city_id(mut self, city_id: CityId) -> Self {
        self.city_id = Some(city_id);
        self
    }

    /// Consume the builder, validate, and return a [`Restaurant`].
    ///
    /// # Errors
    ///
    /// Returns [`RestoMapError::Validation`] if the id or city id is missing,
    /// or if any invariant checked by [`Restaurant::validate`] fails.
    pub fn build(self) -> Result<Restaurant, RestoMapError> {
        let id = RestaurantId::new(self.id.unwrap_or_default())?;
        let city_id = self.city_id.ok_or(ValidationError::InvalidId)?;
        let restaurant = Restaurant {
            id,
            name: self.name.unwrap_or_default(),
            building_id: self.building_id,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address.unwrap_or_default(),
            city_id,
        };
        restaurant.validate()?;
        Ok(restaurant)
    }
}
