//! Shared application state for axum handlers.

use std::sync::Arc;

use restomap_app::ports::{CityRepository, RestaurantRepository};
use restomap_app::services::restaurant_service::RestaurantService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repositories themselves do not
/// need to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<CR, RR> {
    /// Restaurant directory service.
    pub restaurant_service: Arc<RestaurantService<CR, RR>>,
}

impl<CR, RR> Clone for AppState<CR, RR> {
    fn clone(&self) -> Self {
        Self {
            restaurant_service: Arc::clone(&self.restaurant_service),
        }
    }
}

impl<CR, RR> AppState<CR, RR>
where
    CR: CityRepository + Send + Sync + 'static,
    RR: RestaurantRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(restaurant_service: RestaurantService<CR, RR>) -> Self {
        Self {
            restaurant_service: Arc::new(restaurant_service),
        }
    }
}
