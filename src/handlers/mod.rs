//! HTTP handlers: extract, delegate to services, wrap in the envelope.

pub mod address;
pub mod customer;
