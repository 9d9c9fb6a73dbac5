//! Client records and their phone numbers, stored in PostgreSQL.

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
