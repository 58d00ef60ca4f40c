//! # Document Store
//!
//! MongoDB facade for the files manager.
//!
//! ## Overview
//!
//! [`DbClient`] exposes a liveness predicate and count queries over the
//! `users` and `files` collections. The connection is established
//! separately from construction:
//!
//! - `connect()` awaits the session and reports the driver error on failure
//! - `spawn_connect()` runs the same attempt in the background for callers
//!   that poll `is_alive()`
//!
//! A failed attempt is never retried; the client stays not-alive.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use files_manager::config::DbConfig;
//! use files_manager::database::DbClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DbClient::new(DbConfig::from_env()?);
//! db.connect().await?;
//!
//! println!("users: {}", db.nb_users().await?);
//! # Ok(())
//! # }
//! ```

pub mod connection;

pub use connection::DbClient;
