//! # Key-Value Cache Module
//!
//! Connection-gated async facade over Redis.
//!
//! ## Architecture
//!
//! ```text
//! KeyValueStore (trait)
//!   ├── RedisClient   <- ConnectionManager-based async Redis
//!   └── MemoryStore   <- in-process entries with per-key expiry
//! ```
//!
//! ## Semantics
//!
//! - `get` returns `Ok(None)` for missing or expired keys
//! - `set` stores with `EX <seconds>`; the store removes the entry on expiry
//! - `del` succeeds whether or not the key existed
//! - `is_alive` is the recorded connection state; `is_alive_async` waits
//!   for the connection attempt to resolve
//!
//! Operations issued before `connect()` fail with `StoreError::NotReady`.
//! Driver errors are returned unchanged.

pub mod providers;
pub mod traits;

pub use providers::{MemoryStore, RedisClient};
pub use traits::KeyValueStore;
