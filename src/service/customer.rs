//! Customer CRUD against the store.

use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::{Address, Customer, CustomerDetail, CustomerInput, CustomerSummary};
use crate::pagination::{PageMeta, PageParams};
use crate::service::validation;
use crate::sql::{customer_count, customer_list, CustomerFilter, SortColumn, SortOrder};

pub struct CustomerService;

impl CustomerService {
    /// Insert a customer after the duplicate-phone check. Returns the new id.
    pub async fn create(pool: &SqlitePool, input: &CustomerInput) -> Result<i64, AppError> {
        let (first, last, phone) = validation::customer_fields(input)?;
        if Self::phone_taken(pool, phone, None).await? {
            return Err(AppError::Conflict(
                "Customer with this phone number already exists".into(),
            ));
        }
        let result =
            sqlx::query("INSERT INTO customers (first_name, last_name, phone_number) VALUES (?, ?, ?)")
                .bind(first)
                .bind(last)
                .bind(phone)
                .execute(pool)
                .await?;
        let id = result.last_insert_rowid();
        tracing::info!(customer_id = id, "customer created");
        Ok(id)
    }

    /// One page of customers with address counts, plus true-total metadata.
    pub async fn list(
        pool: &SqlitePool,
        filter: &CustomerFilter,
        sort: SortColumn,
        order: SortOrder,
        page: PageParams,
    ) -> Result<(Vec<CustomerSummary>, PageMeta), AppError> {
        let list_query = customer_list(filter, sort, order, i64::from(page.limit), page.offset());
        let rows: Vec<CustomerSummary> = list_query.query_as().fetch_all(pool).await?;
        let total: i64 = customer_count(filter).query_scalar().fetch_one(pool).await?;
        Ok((rows, PageMeta::new(total, page)))
    }

    /// Fetch one customer with all owned addresses attached.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<CustomerDetail, AppError> {
        let customer: Customer = sqlx::query_as(
            "SELECT id, first_name, last_name, phone_number, only_one_address FROM customers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Customer not found".into()))?;

        let addresses: Vec<Address> = sqlx::query_as(
            "SELECT id, customer_id, address_details, city, state, pin_code, is_primary \
             FROM addresses WHERE customer_id = ? ORDER BY id",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(CustomerDetail { customer, addresses })
    }

    /// Overwrite name and phone. The phone must not belong to a different
    /// customer; updating to the customer's own current phone is allowed.
    pub async fn update(pool: &SqlitePool, id: i64, input: &CustomerInput) -> Result<(), AppError> {
        let (first, last, phone) = validation::customer_fields(input)?;
        if Self::phone_taken(pool, phone, Some(id)).await? {
            return Err(AppError::Conflict(
                "Phone number already used by another customer".into(),
            ));
        }
        sqlx::query("UPDATE customers SET first_name = ?, last_name = ?, phone_number = ? WHERE id = ?")
            .bind(first)
            .bind(last)
            .bind(phone)
            .bind(id)
            .execute(pool)
            .await?;
        tracing::info!(customer_id = id, "customer updated");
        Ok(())
    }

    /// Remove the customer and every owned address in one transaction.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), AppError> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM addresses WHERE customer_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(customer_id = id, "customer deleted");
        Ok(())
    }

    /// Explicit duplicate check on top of the UNIQUE constraint, so the caller
    /// gets a Conflict message instead of a bare constraint error.
    async fn phone_taken(
        pool: &SqlitePool,
        phone: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, AppError> {
        let existing: Option<i64> = match exclude_id {
            None => {
                sqlx::query_scalar("SELECT id FROM customers WHERE phone_number = ?")
                    .bind(phone)
                    .fetch_optional(pool)
                    .await?
            }
            Some(id) => {
                sqlx::query_scalar("SELECT id FROM customers WHERE phone_number = ? AND id != ?")
                    .bind(phone)
                    .bind(id)
                    .fetch_optional(pool)
                    .await?
            }
        };
        Ok(existing.is_some())
    }
}
