use sqlx::PgConnection;

use crate::models::Phone;

/// Attach a phone number to an existing client. Fails with a foreign-key
/// violation when the client does not exist.
pub async fn add_phone(
    conn: &mut PgConnection,
    client_id: i32,
    phone: &str,
) -> Result<i32, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO phones (client_id, phone)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(client_id)
    .bind(phone)
    .fetch_one(&mut *conn)
    .await?;

    tracing::debug!(client_id, phone_id = id, "phone added");
    Ok(id)
}

/// Remove every row of `phone` owned by the client
pub async fn delete_phone(
    conn: &mut PgConnection,
    client_id: i32,
    phone: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM phones WHERE client_id = $1 AND phone = $2")
        .bind(client_id)
        .bind(phone)
        .execute(&mut *conn)
        .await?;

    tracing::debug!(client_id, rows = result.rows_affected(), "phone deleted");
    Ok(result.rows_affected())
}

pub async fn list_phones(conn: &mut PgConnection, client_id: i32) -> Result<Vec<Phone>, sqlx::Error> {
    sqlx::query_as::<_, Phone>(
        "SELECT id, client_id, phone FROM phones WHERE client_id = $1 ORDER BY id",
    )
    .bind(client_id)
    .fetch_all(&mut *conn)
    .await
}
