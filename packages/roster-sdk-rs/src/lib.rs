//! Roster client SDK for Rust.
//!
//! Keeps the bearer token from the last login, attaches it to every request,
//! and ends the session when the server rejects it.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use roster_sdk::{RosterClient, UserInput};
//!
//! #[tokio::main]
//! async fn main() -> roster_sdk::Result<()> {
//!     let client = RosterClient::new("http://localhost:8080/api")?
//!         .on_session_expired(|| eprintln!("Session expired. Please log in again."));
//!
//!     client.login("alice", "secret").await?;
//!     client.create_user(&UserInput { name: "Bob", email: "bob@example.com" }).await?;
//!     for user in client.list_users().await? {
//!         println!("{user:?}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod rest;
pub mod types;

pub use client::RosterClient;
pub use error::{RosterError, Result};
pub use rest::RestClient;
pub use types::*;
