//! Customer and address services over the shared pool.

mod address;
mod consistency;
mod customer;
mod validation;

pub use address::AddressService;
pub use consistency::{recompute_single_address_flag, FlagMaintenance};
pub use customer::CustomerService;
pub use validation::{address_fields, customer_fields};
