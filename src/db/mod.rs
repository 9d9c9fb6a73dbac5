//! Client store: schema setup and CRUD over a single PostgreSQL connection.
//!
//! Every operation borrows a caller-owned `PgConnection`. Passing the
//! connection of an open `Transaction` runs the operation inside the caller's
//! unit of work.

mod clients;
mod phones;

use sqlx::{Connection, PgConnection};

use crate::config::Config;

pub use clients::{add_client, client_by_id, delete_client, find_clients, get_client, update_client};
pub use phones::{add_phone, delete_phone, list_phones};

const CREATE_CLIENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS clients (
        id SERIAL PRIMARY KEY,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL
    )
"#;

const CREATE_PHONES: &str = r#"
    CREATE TABLE IF NOT EXISTS phones (
        id SERIAL PRIMARY KEY,
        client_id INTEGER NOT NULL REFERENCES clients(id),
        phone TEXT NOT NULL
    )
"#;

/// Open a single database connection
pub async fn connect(config: &Config) -> anyhow::Result<PgConnection> {
    let options = config.connect_options()?;
    let conn = PgConnection::connect_with(&options).await?;

    tracing::info!(host = options.get_host(), database = ?options.get_database(), "connected");
    Ok(conn)
}

/// Close the connection, flushing the terminate message to the server
pub async fn close(conn: PgConnection) -> Result<(), sqlx::Error> {
    conn.close().await?;
    tracing::info!("connection closed");
    Ok(())
}

/// Create the `clients` and `phones` tables if they do not exist yet
pub async fn initialize_schema(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
    let mut tx = conn.begin().await?;

    sqlx::query(CREATE_CLIENTS).execute(&mut *tx).await?;
    sqlx::query(CREATE_PHONES).execute(&mut *tx).await?;

    tx.commit().await?;

    tracing::debug!("schema ready");
    Ok(())
}
