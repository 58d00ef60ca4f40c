//! Key-value provider implementations

pub mod memory;
pub mod redis;

pub use memory::MemoryStore;
pub use self::redis::RedisClient;
