//! # restomap-app
//!
//! Application layer: use-cases, the request pipeline, and **port
//! definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CityRepository`: ordered listing, existence lookup, create, delete
//!   - `RestaurantRepository`: ordered, optionally filtered listing joined
//!     with the parent city; create
//! - Define the **request pipeline** (`Handler`, `Validator`, and the
//!   logging/performance/validation middleware composed around handlers)
//! - Define **queries** with their validators, handlers and transport shapes
//! - Expose **driving/inbound ports** as service structs (`RestaurantService`)
//!
//! ## Dependency rule
//! Depends on `restomap-domain` only (plus `tokio` macros for joining reads).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod pipeline;
pub mod ports;
pub mod queries;
pub mod services;

#[cfg(test)]
mod test_support;
