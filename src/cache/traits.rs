//! Key-value store trait definition

use crate::error::Result;
use redis::ToRedisArgs;

/// Trait defining the key-value facade surface
///
/// Implemented by [`RedisClient`](super::RedisClient) and the in-process
/// [`MemoryStore`](super::MemoryStore). Reads return `Ok(None)` for missing
/// or expired keys; only store failures are errors.
pub trait KeyValueStore: Send + Sync {
    /// Last known connection state, without waiting
    fn is_alive(&self) -> bool;

    /// Wait for the connection attempt to resolve and report liveness
    fn is_alive_async(&self) -> impl std::future::Future<Output = bool> + Send;

    /// Get the value stored under `key`
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;

    /// Store `value` under `key`, expiring after `expire_seconds`
    fn set<V>(
        &self,
        key: &str,
        value: V,
        expire_seconds: u64,
    ) -> impl std::future::Future<Output = Result<()>> + Send
    where
        V: ToRedisArgs + Send + Sync;

    /// Remove `key`; succeeds when the key is already absent
    fn del(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;

    fn provider_name(&self) -> &'static str;
}
