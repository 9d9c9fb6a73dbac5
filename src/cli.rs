//! Command-line front end over the client store.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sqlx::{Connection, PgConnection};

use crate::db;
use crate::error::ConstraintViolation;
use crate::models::{ClientFilter, ClientUpdate};

/// Manage clients and their phone numbers in PostgreSQL.
#[derive(Parser, Debug)]
#[command(name = "client_manager")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create the clients and phones tables if missing
    Init,
    /// Add a client and print its id
    AddClient {
        first_name: String,
        last_name: String,
        email: String,
    },
    /// Attach a phone number to a client
    AddPhone { client_id: i32, phone: String },
    /// Change some of a client's fields
    UpdateClient {
        client_id: i32,
        #[command(flatten)]
        fields: UpdateArgs,
    },
    /// Remove a phone number from a client
    DeletePhone { client_id: i32, phone: String },
    /// Remove a client and all of their phones
    DeleteClient { client_id: i32 },
    /// Search by exact match; omitted fields match anything
    Find(FindArgs),
    /// Show a client with their first phone
    Get { client_id: i32 },
    /// Run a scripted walkthrough of every operation
    Demo {
        /// Roll the whole walkthrough back when done
        #[arg(long)]
        rollback: bool,
    },
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct UpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl From<UpdateArgs> for ClientUpdate {
    fn from(args: UpdateArgs) -> Self {
        ClientUpdate {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
        }
    }
}

#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct FindArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}

impl From<FindArgs> for ClientFilter {
    fn from(args: FindArgs) -> Self {
        ClientFilter {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
        }
    }
}

/// Attach a readable reason to constraint failures
fn describe(err: sqlx::Error) -> anyhow::Error {
    match ConstraintViolation::of(&err) {
        Some(violation) => anyhow::Error::new(err).context(violation.to_string()),
        None => err.into(),
    }
}

pub async fn run(command: Command, conn: &mut PgConnection) -> Result<()> {
    match command {
        Command::Init => {
            db::initialize_schema(conn).await?;
            println!("Schema ready");
        }
        Command::AddClient {
            first_name,
            last_name,
            email,
        } => {
            let id = db::add_client(conn, &first_name, &last_name, &email)
                .await
                .map_err(describe)?;
            println!("{id}");
        }
        Command::AddPhone { client_id, phone } => {
            let id = db::add_phone(conn, client_id, &phone)
                .await
                .map_err(describe)?;
            println!("Phone {id} added to client {client_id}");
        }
        Command::UpdateClient { client_id, fields } => {
            let update = ClientUpdate::from(fields);
            if update.is_empty() {
                println!("Nothing to update");
                return Ok(());
            }
            let rows = db::update_client(conn, client_id, &update).await?;
            println!("{rows} client(s) updated");
        }
        Command::DeletePhone { client_id, phone } => {
            let rows = db::delete_phone(conn, client_id, &phone).await?;
            println!("{rows} phone(s) deleted");
        }
        Command::DeleteClient { client_id } => {
            let rows = db::delete_client(conn, client_id).await?;
            println!("{rows} client(s) deleted");
        }
        Command::Find(args) => {
            let rows = db::find_clients(conn, &ClientFilter::from(args)).await?;
            if rows.is_empty() {
                println!("No matching clients");
            }
            for row in rows {
                println!("{row}");
            }
        }
        Command::Get { client_id } => match db::get_client(conn, client_id).await? {
            Some(contact) => println!("{contact}"),
            None => println!("No client {client_id} with a phone"),
        },
        Command::Demo { rollback } => {
            let mut tx = conn.begin().await?;
            demo(&mut tx).await?;
            if rollback {
                tx.rollback().await?;
                tracing::info!("demo rolled back");
            } else {
                tx.commit().await?;
            }
        }
    }

    Ok(())
}

async fn demo(conn: &mut PgConnection) -> Result<()> {
    db::initialize_schema(conn).await?;

    let john = db::add_client(conn, "John", "Doe", "client1@example.com").await?;
    let jane = db::add_client(conn, "Jane", "Pierce", "client2@example.com").await?;
    db::add_phone(conn, john, "1234567890").await?;
    db::add_phone(conn, john, "9876543210").await?;
    db::add_phone(conn, jane, "1234567891").await?;

    print_client(conn, john).await?;
    print_client(conn, jane).await?;

    let update = ClientUpdate {
        first_name: Some("Jane".to_string()),
        last_name: Some("Doe".to_string()),
        email: Some("client2@example.ru".to_string()),
    };
    db::update_client(conn, john, &update).await?;
    print_client(conn, john).await?;

    for row in db::find_clients(conn, &ClientFilter::new().phone("1234567891")).await? {
        println!("{row}");
    }

    db::delete_phone(conn, john, "1234567890").await?;
    db::delete_client(conn, jane).await?;

    Ok(())
}

async fn print_client(conn: &mut PgConnection, client_id: i32) -> Result<()> {
    match db::get_client(conn, client_id).await? {
        Some(contact) => println!("{contact}"),
        None => println!("No client {client_id} with a phone"),
    }
    Ok(())
}
