//! MongoDB smoke test: wait for the connection, then print collection counts

use files_manager::config::ClientsConfig;
use files_manager::database::DbClient;
use files_manager::logging;
use std::process;
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(1000);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_structured_logging();

    let config = ClientsConfig::from_env()?;
    let db = Arc::new(DbClient::new(config.database));

    println!("Connecting to MongoDB...");
    db.spawn_connect();

    let alive = db.wait_until_alive(POLL_INTERVAL).await;
    println!("Connection status: {}", alive);
    if !alive {
        process::exit(1);
    }

    println!("Number of users: {}", db.nb_users().await?);
    println!("Number of files: {}", db.nb_files().await?);

    process::exit(0);
}
