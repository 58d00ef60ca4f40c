//! Connection state shared between a facade's connect path and its readers.
//!
//! Each facade owns one [`ConnectionMonitor`]. The connect path is the only
//! writer and resolves the state exactly once; everything else observes it,
//! either synchronously through [`ConnectionMonitor::is_alive`] or by
//! suspending in [`ConnectionMonitor::wait_resolved`].

use tokio::sync::watch;

/// Lifecycle of a store connection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection attempt has resolved yet
    Pending,
    /// The store acknowledged the session
    Established,
    /// The connection attempt failed; terminal
    Failed,
}

impl ConnectionState {
    pub fn is_resolved(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[derive(Debug)]
pub struct ConnectionMonitor {
    store: &'static str,
    state: watch::Sender<ConnectionState>,
}

impl ConnectionMonitor {
    pub fn new(store: &'static str) -> Self {
        let (state, _) = watch::channel(ConnectionState::Pending);
        Self { store, state }
    }

    pub fn store(&self) -> &'static str {
        self.store
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    pub fn is_alive(&self) -> bool {
        self.state() == ConnectionState::Established
    }

    /// Record the outcome of the connection attempt.
    ///
    /// Only the first resolution sticks; later calls are ignored and the
    /// already recorded state is returned.
    pub fn resolve(&self, established: bool) -> ConnectionState {
        let next = if established {
            ConnectionState::Established
        } else {
            ConnectionState::Failed
        };

        let mut recorded = next;
        self.state.send_if_modified(|current| {
            if current.is_resolved() {
                recorded = *current;
                false
            } else {
                *current = next;
                true
            }
        });
        recorded
    }

    /// Suspend until the state leaves `Pending`, then report liveness.
    ///
    /// Returns immediately when already resolved. The receiver is dropped
    /// on return, so no waiter outlives the call.
    pub async fn wait_resolved(&self) -> bool {
        let mut receiver = self.state.subscribe();
        let alive = match receiver.wait_for(|state| state.is_resolved()).await {
            Ok(state) => *state == ConnectionState::Established,
            Err(_) => false,
        };
        alive
    }
}
