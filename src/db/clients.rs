use sqlx::{Connection, PgConnection};

use crate::models::{Client, ClientContact, ClientFilter, ClientPhoneRow, ClientUpdate};

/// Insert a client and return its generated id
pub async fn add_client(
    conn: &mut PgConnection,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<i32, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i32>(
        r#"
        INSERT INTO clients (first_name, last_name, email)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .fetch_one(&mut *conn)
    .await?;

    tracing::debug!(client_id = id, "client added");
    Ok(id)
}

/// Apply a partial update. Returns the number of rows changed, zero when the
/// id is unknown.
pub async fn update_client(
    conn: &mut PgConnection,
    client_id: i32,
    update: &ClientUpdate,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE clients
        SET first_name = COALESCE($2, first_name),
            last_name = COALESCE($3, last_name),
            email = COALESCE($4, email)
        WHERE id = $1
        "#,
    )
    .bind(client_id)
    .bind(update.first_name.as_deref())
    .bind(update.last_name.as_deref())
    .bind(update.email.as_deref())
    .execute(&mut *conn)
    .await?;

    tracing::debug!(client_id, rows = result.rows_affected(), "client updated");
    Ok(result.rows_affected())
}

/// Delete a client together with its phones
pub async fn delete_client(conn: &mut PgConnection, client_id: i32) -> Result<u64, sqlx::Error> {
    // Runs as a savepoint when the caller already holds a transaction
    let mut tx = conn.begin().await?;

    // Phones first, the foreign key has no cascade
    let phones = sqlx::query("DELETE FROM phones WHERE client_id = $1")
        .bind(client_id)
        .execute(&mut *tx)
        .await?;

    let clients = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(client_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::debug!(
        client_id,
        phones = phones.rows_affected(),
        rows = clients.rows_affected(),
        "client deleted"
    );
    Ok(clients.rows_affected())
}

/// Search clients and their phones by exact match on any combination of
/// fields. Clients without phones are included unless a phone filter is set.
pub async fn find_clients(
    conn: &mut PgConnection,
    filter: &ClientFilter,
) -> Result<Vec<ClientPhoneRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ClientPhoneRow>(
        r#"
        SELECT clients.id AS client_id,
               clients.first_name,
               clients.last_name,
               clients.email,
               phones.id AS phone_id,
               phones.phone
        FROM clients
        LEFT JOIN phones ON clients.id = phones.client_id
        WHERE ($1::text IS NULL OR clients.first_name = $1)
          AND ($2::text IS NULL OR clients.last_name = $2)
          AND ($3::text IS NULL OR clients.email = $3)
          AND ($4::text IS NULL OR phones.phone = $4)
        ORDER BY clients.id, phones.id
        "#,
    )
    .bind(filter.first_name.as_deref())
    .bind(filter.last_name.as_deref())
    .bind(filter.email.as_deref())
    .bind(filter.phone.as_deref())
    .fetch_all(&mut *conn)
    .await?;

    tracing::debug!(?filter, rows = rows.len(), "clients found");
    Ok(rows)
}

/// First client+phone row for the id. A client without phones yields `None`.
pub async fn get_client(
    conn: &mut PgConnection,
    client_id: i32,
) -> Result<Option<ClientContact>, sqlx::Error> {
    sqlx::query_as::<_, ClientContact>(
        r#"
        SELECT clients.first_name, clients.last_name, clients.email, phones.phone
        FROM clients
        JOIN phones ON clients.id = phones.client_id
        WHERE clients.id = $1
        ORDER BY phones.id
        LIMIT 1
        "#,
    )
    .bind(client_id)
    .fetch_optional(&mut *conn)
    .await
}

pub async fn client_by_id(
    conn: &mut PgConnection,
    client_id: i32,
) -> Result<Option<Client>, sqlx::Error> {
    sqlx::query_as::<_, Client>(
        "SELECT id, first_name, last_name, email FROM clients WHERE id = $1",
    )
    .bind(client_id)
    .fetch_optional(&mut *conn)
    .await
}
