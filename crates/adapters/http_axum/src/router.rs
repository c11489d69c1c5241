//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use restomap_app::ports::{CityRepository, RestaurantRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the JSON API at the root alongside `/health`. When `static_dir` is
/// given, unmatched paths are served from that directory, falling back to its
/// `index.html` so the single-page client can handle its own routes.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<CR, RR>(state: AppState<CR, RR>, static_dir: Option<&Path>) -> Router
where
    CR: CityRepository + Send + Sync + 'static,
    RR: RestaurantRepository + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes());

    if let Some(dir) = static_dir {
        let assets = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        router = router.fallback_service(assets);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
