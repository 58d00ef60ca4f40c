//! In-process key-value provider
//!
//! Keeps entries in a `DashMap` with a per-entry deadline. Expired entries
//! are dropped when read and swept on every write. Always alive.
//!
//! This is not distributed: each process has its own entries. It stands in
//! for Redis where a live server is unavailable, such as tests.

use crate::cache::traits::KeyValueStore;
use crate::error::{Result, StoreError};
use dashmap::DashMap;
use redis::ToRedisArgs;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

impl MemoryEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// In-memory key-value store with Redis-compatible set/get/del semantics
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<DashMap<String, MemoryEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including any not yet swept after expiry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render a value the way it would be sent to Redis as a single argument
fn encode_value<V: ToRedisArgs>(value: &V) -> Result<String> {
    let mut args = value.to_redis_args();
    if args.len() != 1 {
        return Err(redis::RedisError::from((
            redis::ErrorKind::ResponseError,
            "wrong number of arguments for 'set' command",
        ))
        .into());
    }
    let bytes = args.remove(0);
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

impl KeyValueStore for MemoryStore {
    fn is_alive(&self) -> bool {
        true
    }

    async fn is_alive_async(&self) -> bool {
        true
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now))
            .is_some()
        {
            debug!(key = key, "GET expired (memory)");
            return Ok(None);
        }

        let result = self.entries.get(key).map(|entry| entry.value.clone());
        debug!(key = key, hit = result.is_some(), "GET (memory)");
        Ok(result)
    }

    async fn set<V>(&self, key: &str, value: V, expire_seconds: u64) -> Result<()>
    where
        V: ToRedisArgs + Send + Sync,
    {
        if expire_seconds == 0 {
            return Err(StoreError::InvalidExpireTime(expire_seconds));
        }

        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(expire_seconds))
            .ok_or(StoreError::InvalidExpireTime(expire_seconds))?;
        let value = encode_value(&value)?;

        self.entries.retain(|_, entry| !entry.is_expired(now));
        self.entries
            .insert(key.to_string(), MemoryEntry { value, expires_at });

        debug!(key = key, expire_seconds = expire_seconds, "SET (memory)");
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        debug!(key = key, "DEL (memory)");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "memory"
    }
}
