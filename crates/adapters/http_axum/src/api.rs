//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod restaurants;

use axum::Router;
use axum::routing::get;

use restomap_app::ports::{CityRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<CR, RR>() -> Router<AppState<CR, RR>>
where
    CR: CityRepository + Send + Sync + 'static,
    RR: RestaurantRepository + Send + Sync + 'static,
{
    Router::new().route("/restaurants", get(restaurants::list::<CR, RR>))
}
