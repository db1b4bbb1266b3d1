//! Derived-flag maintenance for the customers table.

use sqlx::SqliteConnection;

use crate::error::AppError;

/// Whether a batch operation re-derives `only_one_address` for the customers
/// it touched. HTTP batch routes pass `Defer`, which leaves the flag stale
/// until the next single-address mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagMaintenance {
    Recompute,
    Defer,
}

/// Set `only_one_address` to whether the customer owns exactly one address.
///
/// Must run after every single-address insert, update, or delete, inside the
/// same transaction as the triggering write. Idempotent: repeated calls with
/// no intervening address change observe and write the same value.
pub async fn recompute_single_address_flag(
    conn: &mut SqliteConnection,
    customer_id: i64,
) -> Result<(), AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses WHERE customer_id = ?")
        .bind(customer_id)
        .fetch_one(&mut *conn)
        .await?;
    sqlx::query("UPDATE customers SET only_one_address = ? WHERE id = ?")
        .bind(count == 1)
        .bind(customer_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        store::ensure_tables(&pool).await.unwrap();
        pool
    }

    async fn flag(pool: &SqlitePool, id: i64) -> bool {
        sqlx::query_scalar("SELECT only_one_address FROM customers WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn flag_tracks_address_count() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO customers (first_name, last_name, phone_number) VALUES ('John', 'Doe', '9876543210')")
            .execute(&pool)
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        recompute_single_address_flag(&mut conn, 1).await.unwrap();
        drop(conn);
        assert!(!flag(&pool, 1).await);

        sqlx::query("INSERT INTO addresses (customer_id, address_details, city, state, pin_code) VALUES (1, '123 Main St', 'Mumbai', 'Maharashtra', '400001')")
            .execute(&pool)
            .await
            .unwrap();
        let mut conn = pool.acquire().await.unwrap();
        recompute_single_address_flag(&mut conn, 1).await.unwrap();
        drop(conn);
        assert!(flag(&pool, 1).await);

        sqlx::query("INSERT INTO addresses (customer_id, address_details, city, state, pin_code) VALUES (1, '456 Secondary St', 'Pune', 'Maharashtra', '411001')")
            .execute(&pool)
            .await
            .unwrap();
        let mut conn = pool.acquire().await.unwrap();
        recompute_single_address_flag(&mut conn, 1).await.unwrap();
        drop(conn);
        assert!(!flag(&pool, 1).await);
    }

    #[tokio::test]
    async fn recompute_is_idempotent() {
        let pool = test_pool().await;
        sqlx::query("INSERT INTO customers (first_name, last_name, phone_number) VALUES ('Jane', 'Smith', '9123456780')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO addresses (customer_id, address_details, city, state, pin_code) VALUES (1, '789 Oak Street', 'Bengaluru', 'Karnataka', '560001')")
            .execute(&pool)
            .await
            .unwrap();

        let mut conn = pool.acquire().await.unwrap();
        for _ in 0..3 {
            recompute_single_address_flag(&mut conn, 1).await.unwrap();
        }
        drop(conn);
        assert!(flag(&pool, 1).await);
    }
}
