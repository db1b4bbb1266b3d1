//! Seeds demo customers and addresses, wiping existing rows first.

use clientele::{recompute_single_address_flag, store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://clientele.db".into());
    let pool = store::connect(&database_url).await?;
    store::ensure_tables(&pool).await?;

    sqlx::query("DELETE FROM addresses").execute(&pool).await?;
    sqlx::query("DELETE FROM customers").execute(&pool).await?;
    tracing::info!("cleared old data");

    let customers = [
        ("John", "Doe", "9876543210"),
        ("Jane", "Smith", "9123456780"),
        ("Alice", "Johnson", "9988776655"),
    ];
    let mut customer_ids = Vec::new();
    for (first, last, phone) in customers {
        let result =
            sqlx::query("INSERT INTO customers (first_name, last_name, phone_number) VALUES (?, ?, ?)")
                .bind(first)
                .bind(last)
                .bind(phone)
                .execute(&pool)
                .await?;
        customer_ids.push(result.last_insert_rowid());
    }

    let addresses = [
        (customer_ids[0], "123 Main St", "Mumbai", "Maharashtra", "400001"),
        (customer_ids[0], "456 Secondary St", "Pune", "Maharashtra", "411001"),
        (customer_ids[1], "789 Oak Street", "Bengaluru", "Karnataka", "560001"),
        (customer_ids[2], "321 Pine Ave", "Chennai", "Tamil Nadu", "600001"),
    ];
    for (customer_id, details, city, state, pin_code) in addresses {
        sqlx::query(
            "INSERT INTO addresses (customer_id, address_details, city, state, pin_code) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(customer_id)
        .bind(details)
        .bind(city)
        .bind(state)
        .bind(pin_code)
        .execute(&pool)
        .await?;
    }

    let mut conn = pool.acquire().await?;
    for customer_id in &customer_ids {
        recompute_single_address_flag(&mut conn, *customer_id).await?;
    }

    tracing::info!("database seeding completed");
    Ok(())
}
