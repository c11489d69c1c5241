//! # restomap-domain
//!
//! Pure domain model for the restomap restaurant directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Cities** (named locations grouping restaurants)
//! - Define **Restaurants** (dining establishments located in exactly one city)
//! - Contain all invariant enforcement (names, lengths, coordinate bounds)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod geo;
pub mod id;

pub mod city;
pub mod restaurant;
