//! Redis smoke test: set a key with a 5 second expiry and watch it disappear

use files_manager::cache::{KeyValueStore, RedisClient};
use files_manager::config::ClientsConfig;
use files_manager::logging;
use std::sync::Arc;
use std::time::Duration;

const KEY: &str = "myKey";
const EXPIRE_SECONDS: u64 = 5;
const EXPIRY_WAIT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    let config = ClientsConfig::from_env()?;
    let redis = Arc::new(RedisClient::new(config.redis));
    redis.spawn_connect();

    println!("{}", redis.is_alive_async().await);

    println!("{:?}", redis.get(KEY).await?);

    redis.set(KEY, 12, EXPIRE_SECONDS).await?;
    println!("{:?}", redis.get(KEY).await?);

    tokio::time::sleep(EXPIRY_WAIT).await;
    println!("{:?}", redis.get(KEY).await?);

    Ok(())
}
