//! Read-side use-cases.
//!
//! Each query module holds the request type, its validator, its handler and
//! the transport shapes it returns.

pub mod get_restaurants;
