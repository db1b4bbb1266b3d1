//! Route tables for the API and operational endpoints.

mod address;
mod common;
mod customer;

pub use address::address_routes;
pub use common::common_routes;
pub use customer::customer_routes;
