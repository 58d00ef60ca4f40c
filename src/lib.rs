#![allow(clippy::doc_markdown)] // Allow technical terms like MongoDB, Redis in docs
#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Files Manager Core
//!
//! Connection-gated async facades over the files manager's external stores.
//!
//! ## Overview
//!
//! Two independent clients, each a thin layer over a mature driver:
//!
//! - [`database::DbClient`] - MongoDB liveness and collection counts
//! - [`cache::RedisClient`] - Redis liveness and get / set-with-expiry / delete
//!
//! Both separate construction from connection. `new(config)` does no I/O;
//! `connect()` establishes the session and records the outcome in a
//! [`connection::ConnectionMonitor`]. Liveness predicates read that state and
//! never fail. Data operations propagate driver errors unchanged.
//!
//! ## Module Organization
//!
//! - [`config`] - Environment-driven store configuration
//! - [`connection`] - Shared connection-state tracking
//! - [`database`] - Document store facade
//! - [`cache`] - Key-value facade and providers
//! - [`error`] - Structured error handling
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use files_manager::cache::{KeyValueStore, RedisClient};
//! use files_manager::config::ClientsConfig;
//! use files_manager::database::DbClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientsConfig::from_env()?;
//!
//! let db = DbClient::new(config.database);
//! let cache = RedisClient::new(config.redis);
//! db.connect().await?;
//! cache.connect().await?;
//!
//! cache.set("files:count", db.nb_files().await?, 60).await?;
//! println!("cached: {:?}", cache.get("files:count").await?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test                          # Unit and integration tests
//! cargo test --features test-services # Also run against live MongoDB / Redis
//! ```

pub mod cache;
pub mod config;
pub mod connection;
pub mod database;
pub mod error;
pub mod logging;

pub use cache::{KeyValueStore, MemoryStore, RedisClient};
pub use config::{ClientsConfig, DbConfig, RedisConfig};
pub use connection::{ConnectionMonitor, ConnectionState};
pub use database::DbClient;
pub use error::{Result, StoreError};
