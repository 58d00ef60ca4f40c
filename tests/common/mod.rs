#![allow(dead_code)]

use files_manager::cache::KeyValueStore;
use files_manager::config::{DbConfig, RedisConfig};
use uuid::Uuid;

/// Key unique to one test run so parallel tests never collide
pub fn unique_key(prefix: &str) -> String {
    format!("test:{}:{}", prefix, &Uuid::new_v4().to_string()[..8])
}

/// Points at a closed local port with a short server selection timeout
pub fn unreachable_db_config() -> DbConfig {
    DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        database: "files_manager_test".to_string(),
        server_selection_timeout_ms: 200,
    }
}

/// Live MongoDB settings, honouring `DB_*` overrides
pub fn live_db_config() -> DbConfig {
    let mut config = DbConfig::from_env().unwrap_or_default();
    config.server_selection_timeout_ms = 2_000;
    config
}

/// Live Redis settings, honouring `REDIS_URL` for CI
pub fn live_redis_config() -> RedisConfig {
    RedisConfig {
        url: std::env::var("REDIS_URL").unwrap_or_else(|_| RedisConfig::default().url),
    }
}

/// Get / set / del behaviour every key-value provider must share
pub async fn assert_basic_key_value_contract<S: KeyValueStore>(store: &S) {
    let key = unique_key("contract");

    assert_eq!(store.get(&key).await.unwrap(), None, "never-set key is absent");

    store.set(&key, 12, 60).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), Some("12".to_string()));

    store.set(&key, "replaced", 60).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), Some("replaced".to_string()));

    store.del(&key).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), None, "deleted key is absent");

    // Deleting again is not an error
    store.del(&key).await.unwrap();
}
