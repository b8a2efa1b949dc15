use sqlx::{Executor, Sqlite, SqlitePool};

use crate::{
    error::Result,
    models::{Product, ProductRequest, ProductUpdate},
};

const UPSERT_PRODUCT: &str = r#"
    INSERT INTO PRODUCT_TBL (id, name, quantity, price)
    VALUES (?, ?, ?, ?)
    ON CONFLICT(id) DO UPDATE SET
        name = excluded.name,
        quantity = excluded.quantity,
        price = excluded.price
    RETURNING id, name, quantity, price
"#;

async fn upsert<'e, E>(executor: E, req: &ProductRequest) -> Result<Product>
where
    E: Executor<'e, Database = Sqlite>,
{
    let product = sqlx::query_as::<_, Product>(UPSERT_PRODUCT)
        .bind(req.id)
        .bind(&req.name)
        .bind(req.quantity)
        .bind(req.price)
        .fetch_one(executor)
        .await?;

    Ok(product)
}

/// Inserts the product, or overwrites the row when `req.id` already exists.
pub async fn save(pool: &SqlitePool, req: &ProductRequest) -> Result<Product> {
    upsert(pool, req).await
}

pub async fn save_all(pool: &SqlitePool, reqs: &[ProductRequest]) -> Result<Vec<Product>> {
    let mut tx = pool.begin().await?;
    let mut products = Vec::with_capacity(reqs.len());

    for req in reqs {
        products.push(upsert(&mut *tx, req).await?);
    }

    tx.commit().await?;

    Ok(products)
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, quantity, price FROM PRODUCT_TBL ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, quantity, price FROM PRODUCT_TBL WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Overwrites name, quantity and price of an existing row. `None` if absent.
pub async fn update(pool: &SqlitePool, id: i64, req: &ProductUpdate) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        UPDATE PRODUCT_TBL
        SET
            name = ?,
            quantity = ?,
            price = ?
        WHERE id = ?
        RETURNING id, name, quantity, price
        "#,
    )
    .bind(&req.name)
    .bind(req.quantity)
    .bind(req.price)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn delete_by_id(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM PRODUCT_TBL WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM PRODUCT_TBL")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
