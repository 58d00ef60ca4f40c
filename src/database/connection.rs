use crate::config::DbConfig;
use crate::connection::{ConnectionMonitor, ConnectionState};
use crate::error::{Result, StoreError};
use crate::logging::{log_error, log_store_operation};
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{info, instrument};

const STORE_NAME: &str = "MongoDB";

/// Facade over the files manager's MongoDB database
///
/// Construction does no I/O. Call [`DbClient::connect`] to establish the
/// session, or [`DbClient::spawn_connect`] to do it in the background and
/// poll [`DbClient::is_alive`].
#[derive(Debug)]
pub struct DbClient {
    config: DbConfig,
    monitor: ConnectionMonitor,
    database: OnceLock<Database>,
    connect_lock: Mutex<()>,
}

impl DbClient {
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            monitor: ConnectionMonitor::new(STORE_NAME),
            database: OnceLock::new(),
            connect_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Database handle, present once a connection attempt has built the driver client
    pub fn database(&self) -> Option<&Database> {
        self.database.get()
    }

    pub fn state(&self) -> ConnectionState {
        self.monitor.state()
    }

    /// Connect and confirm the session with a `ping`.
    ///
    /// A failed attempt is terminal: the client stays not-alive and later
    /// calls return [`StoreError::ConnectionFailed`] without retrying.
    #[instrument(skip(self), fields(uri = %self.config.uri()))]
    pub async fn connect(&self) -> Result<()> {
        let _guard = self.connect_lock.lock().await;

        match self.monitor.state() {
            ConnectionState::Established => return Ok(()),
            ConnectionState::Failed => {
                return Err(StoreError::connection_failed(
                    STORE_NAME,
                    "previous connection attempt failed",
                ))
            }
            ConnectionState::Pending => {}
        }

        match self.establish().await {
            Ok(()) => {
                self.monitor.resolve(true);
                info!(database = %self.config.database, "Connected to MongoDB");
                Ok(())
            }
            Err(e) => {
                self.monitor.resolve(false);
                log_error(
                    STORE_NAME,
                    "connect",
                    &e.to_string(),
                    Some("Error connecting to MongoDB"),
                );
                Err(e)
            }
        }
    }

    async fn establish(&self) -> Result<()> {
        let uri = self.config.uri();
        let mut options = ClientOptions::parse(uri.as_str()).await?;
        options.server_selection_timeout = Some(self.config.server_selection_timeout());

        let client = Client::with_options(options)?;
        let database = client.database(&self.config.database);

        // Recorded before the ping so later queries surface the driver's own error
        let database = self.database.get_or_init(|| database);

        database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Issue the connection attempt on the runtime and return immediately
    pub fn spawn_connect(self: &Arc<Self>) -> JoinHandle<()> {
        let client = Arc::clone(self);
        tokio::spawn(async move {
            // Outcome is logged and recorded in the connection state
            let _ = client.connect().await;
        })
    }

    /// Whether the session is established right now
    pub fn is_alive(&self) -> bool {
        self.monitor.is_alive()
    }

    /// Poll liveness at `poll_interval` until the connection attempt resolves
    pub async fn wait_until_alive(&self, poll_interval: Duration) -> bool {
        let mut ticker = tokio::time::interval(poll_interval);
        loop {
            ticker.tick().await;
            if self.monitor.state().is_resolved() {
                return self.is_alive();
            }
        }
    }

    /// Count every document in `collection_name`
    #[instrument(skip(self))]
    pub async fn count_entries(&self, collection_name: &str) -> Result<u64> {
        let database = self
            .database
            .get()
            .ok_or_else(|| StoreError::not_ready(STORE_NAME))?;

        let start = Instant::now();
        let count = database
            .collection::<Document>(collection_name)
            .count_documents(doc! {})
            .await?;

        log_store_operation(
            STORE_NAME,
            "count_documents",
            Some(collection_name),
            "ok",
            Some(start.elapsed().as_millis() as u64),
        );
        Ok(count)
    }

    pub async fn nb_users(&self) -> Result<u64> {
        self.count_entries("users").await
    }

    pub async fn nb_files(&self) -> Result<u64> {
        self.count_entries("files").await
    }
}
