mod client;
mod contact;
mod filter;
mod phone;

pub use client::{Client, ClientUpdate};
pub use contact::{ClientContact, ClientPhoneRow};
pub use filter::ClientFilter;
pub use phone::Phone;
