//! # restomap-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** consumed by the single-page client
//!   (`GET /restaurants?cityId=…`)
//! - Optionally serve the built client's static assets, falling back to
//!   `index.html` for client-side routes
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `restomap-app` (for port traits and services) and `restomap-domain`
//! (for error types used in response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
