//! API exposure modules
//!
//! Each exposure consumes a `ServerHost` (or nothing, for health routes) and
//! produces an axum `Router`.

pub mod graphql;
pub mod rest;

pub use graphql::GraphQLExposure;
pub use rest::RestExposure;
