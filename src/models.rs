//! Row types and request payloads.
//!
//! Request payloads keep required fields as `Option<String>` so a missing field
//! surfaces as the API's own 400 validation message instead of an extractor
//! rejection.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub only_one_address: bool,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Address {
    pub id: i64,
    pub customer_id: i64,
    pub address_details: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    pub is_primary: bool,
}

/// One row of the customer list: customer columns joined with the owned
/// address count.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub only_one_address: bool,
    pub address_count: i64,
}

/// Single customer with its addresses attached.
#[derive(Debug, Serialize)]
pub struct CustomerDetail {
    #[serde(flatten)]
    pub customer: Customer,
    pub addresses: Vec<Address>,
}

/// Id of a freshly inserted row.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CustomerInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddressInput {
    pub address_details: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// Batch create item: an address payload plus the owning customer.
#[derive(Debug, Deserialize)]
pub struct AddressCreateItem {
    pub customer_id: Option<i64>,
    pub address_details: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// Batch update item: an address payload plus the row to update.
#[derive(Debug, Deserialize)]
pub struct AddressUpdateItem {
    pub id: Option<i64>,
    pub address_details: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct AddressBatch<T> {
    #[serde(default)]
    pub addresses: Vec<T>,
}
