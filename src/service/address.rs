//! Address CRUD, single and batch, enforcing primary-address exclusivity.
//!
//! Single-row operations run clear-siblings, write, and flag recompute as one
//! transaction. Batch operations are not transactional: items apply in list
//! order against the pool directly, and a validation failure mid-batch leaves
//! earlier writes in place.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Address, AddressCreateItem, AddressInput, AddressUpdateItem};
use crate::service::consistency::{recompute_single_address_flag, FlagMaintenance};
use crate::service::validation;

const SINGLE_FIELDS_MSG: &str = "All address fields are required";
const BATCH_UPDATE_FIELDS_MSG: &str = "All address fields are required for each address";
const BATCH_CREATE_FIELDS_MSG: &str = "All fields required";

pub struct AddressService;

impl AddressService {
    /// Insert an address for an existing customer. A primary insert demotes
    /// every sibling first. Returns the new id.
    pub async fn create(
        pool: &SqlitePool,
        customer_id: i64,
        input: &AddressInput,
    ) -> Result<i64, AppError> {
        let (details, city, state, pin) = validation::address_fields(
            &input.address_details,
            &input.city,
            &input.state,
            &input.pin_code,
            SINGLE_FIELDS_MSG,
        )?;
        let customer: Option<i64> = sqlx::query_scalar("SELECT id FROM customers WHERE id = ?")
            .bind(customer_id)
            .fetch_optional(pool)
            .await?;
        if customer.is_none() {
            return Err(AppError::NotFound("Customer not found".into()));
        }

        let mut tx = pool.begin().await?;
        if input.is_primary {
            sqlx::query("UPDATE addresses SET is_primary = 0 WHERE customer_id = ?")
                .bind(customer_id)
                .execute(&mut *tx)
                .await?;
        }
        let result = sqlx::query(
            "INSERT INTO addresses (customer_id, address_details, city, state, pin_code, is_primary) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(customer_id)
        .bind(details)
        .bind(city)
        .bind(state)
        .bind(pin)
        .bind(input.is_primary)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();
        recompute_single_address_flag(&mut tx, customer_id).await?;
        tx.commit().await?;

        tracing::info!(customer_id, address_id = id, "address created");
        Ok(id)
    }

    /// All addresses owned by the customer, in insertion order. An unknown
    /// customer yields an empty list, not an error.
    pub async fn list(pool: &SqlitePool, customer_id: i64) -> Result<Vec<Address>, AppError> {
        let rows = sqlx::query_as(
            "SELECT id, customer_id, address_details, city, state, pin_code, is_primary \
             FROM addresses WHERE customer_id = ? ORDER BY id",
        )
        .bind(customer_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Overwrite one address. Setting `is_primary` demotes the siblings of the
    /// owning customer, resolved from the row before the update.
    pub async fn update(
        pool: &SqlitePool,
        address_id: i64,
        input: &AddressInput,
    ) -> Result<(), AppError> {
        let (details, city, state, pin) = validation::address_fields(
            &input.address_details,
            &input.city,
            &input.state,
            &input.pin_code,
            SINGLE_FIELDS_MSG,
        )?;
        let customer_id = Self::owning_customer(pool, address_id).await?;

        let mut tx = pool.begin().await?;
        if input.is_primary {
            sqlx::query("UPDATE addresses SET is_primary = 0 WHERE customer_id = ?")
                .bind(customer_id)
                .execute(&mut *tx)
                .await?;
        }
        sqlx::query(
            "UPDATE addresses SET address_details = ?, city = ?, state = ?, pin_code = ?, is_primary = ? \
             WHERE id = ?",
        )
        .bind(details)
        .bind(city)
        .bind(state)
        .bind(pin)
        .bind(input.is_primary)
        .bind(address_id)
        .execute(&mut *tx)
        .await?;
        recompute_single_address_flag(&mut tx, customer_id).await?;
        tx.commit().await?;

        tracing::info!(address_id, "address updated");
        Ok(())
    }

    /// Delete one address and re-derive the owner's flag.
    pub async fn delete(pool: &SqlitePool, address_id: i64) -> Result<(), AppError> {
        let customer_id = Self::owning_customer(pool, address_id).await?;

        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM addresses WHERE id = ?")
            .bind(address_id)
            .execute(&mut *tx)
            .await?;
        recompute_single_address_flag(&mut tx, customer_id).await?;
        tx.commit().await?;

        tracing::info!(address_id, "address deleted");
        Ok(())
    }

    /// Update a list of addresses in order. Fails fast on the first invalid
    /// item without rolling back earlier items. Flag recomputation runs only
    /// under `FlagMaintenance::Recompute`, once per touched customer.
    pub async fn update_many(
        pool: &SqlitePool,
        items: &[AddressUpdateItem],
        maintenance: FlagMaintenance,
    ) -> Result<(), AppError> {
        if items.is_empty() {
            return Err(AppError::Validation("No addresses provided for update".into()));
        }
        let mut touched: Vec<i64> = Vec::new();
        for item in items {
            let id = item
                .id
                .ok_or_else(|| AppError::Validation(BATCH_UPDATE_FIELDS_MSG.into()))?;
            let (details, city, state, pin) = validation::address_fields(
                &item.address_details,
                &item.city,
                &item.state,
                &item.pin_code,
                BATCH_UPDATE_FIELDS_MSG,
            )?;
            if item.is_primary {
                let customer_id = Self::owning_customer(pool, id).await?;
                sqlx::query("UPDATE addresses SET is_primary = 0 WHERE customer_id = ?")
                    .bind(customer_id)
                    .execute(pool)
                    .await?;
            }
            sqlx::query(
                "UPDATE addresses SET address_details = ?, city = ?, state = ?, pin_code = ?, is_primary = ? \
                 WHERE id = ?",
            )
            .bind(details)
            .bind(city)
            .bind(state)
            .bind(pin)
            .bind(item.is_primary)
            .bind(id)
            .execute(pool)
            .await?;

            if maintenance == FlagMaintenance::Recompute {
                let owner: Option<i64> =
                    sqlx::query_scalar("SELECT customer_id FROM addresses WHERE id = ?")
                        .bind(id)
                        .fetch_optional(pool)
                        .await?;
                if let Some(customer_id) = owner {
                    if !touched.contains(&customer_id) {
                        touched.push(customer_id);
                    }
                }
            }
        }
        Self::recompute_touched(pool, &touched).await?;
        tracing::info!(count = items.len(), "addresses updated");
        Ok(())
    }

    /// Insert a list of addresses in order. Same fail-fast contract as
    /// `update_many`; no customer-existence check on this path.
    pub async fn create_many(
        pool: &SqlitePool,
        items: &[AddressCreateItem],
        maintenance: FlagMaintenance,
    ) -> Result<(), AppError> {
        if items.is_empty() {
            return Err(AppError::Validation("No addresses provided".into()));
        }
        let mut touched: Vec<i64> = Vec::new();
        for item in items {
            let customer_id = item
                .customer_id
                .ok_or_else(|| AppError::Validation(BATCH_CREATE_FIELDS_MSG.into()))?;
            let (details, city, state, pin) = validation::address_fields(
                &item.address_details,
                &item.city,
                &item.state,
                &item.pin_code,
                BATCH_CREATE_FIELDS_MSG,
            )?;
            if item.is_primary {
                sqlx::query("UPDATE addresses SET is_primary = 0 WHERE customer_id = ?")
                    .bind(customer_id)
                    .execute(pool)
                    .await?;
            }
            sqlx::query(
                "INSERT INTO addresses (customer_id, address_details, city, state, pin_code, is_primary) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(customer_id)
            .bind(details)
            .bind(city)
            .bind(state)
            .bind(pin)
            .bind(item.is_primary)
            .execute(pool)
            .await?;

            if maintenance == FlagMaintenance::Recompute && !touched.contains(&customer_id) {
                touched.push(customer_id);
            }
        }
        Self::recompute_touched(pool, &touched).await?;
        tracing::info!(count = items.len(), "addresses added");
        Ok(())
    }

    async fn owning_customer(pool: &SqlitePool, address_id: i64) -> Result<i64, AppError> {
        let owner: Option<i64> =
            sqlx::query_scalar("SELECT customer_id FROM addresses WHERE id = ?")
                .bind(address_id)
                .fetch_optional(pool)
                .await?;
        owner.ok_or_else(|| AppError::NotFound("Address not found".into()))
    }

    async fn recompute_touched(pool: &SqlitePool, touched: &[i64]) -> Result<(), AppError> {
        if touched.is_empty() {
            return Ok(());
        }
        let mut conn = pool.acquire().await?;
        for customer_id in touched {
            recompute_single_address_flag(&mut conn, *customer_id).await?;
        }
        Ok(())
    }
}
