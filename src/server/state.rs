use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use std::sync::{Arc, Mutex};

/// Shared state available to all handlers via `State<AppState>`.
///
/// Cheap to clone: the single SQLite connection sits behind an
/// `Arc<Mutex<_>>`.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<DbPool>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            store: Arc::new(Mutex::new(pool)),
            config: Arc::new(config),
        }
    }

    /// Run `f` against the event store on tokio's blocking pool.
    ///
    /// The store lock is held for the whole closure, so a batch insert is
    /// never observed half-written. A poisoned lock is recovered, so one
    /// panicking request does not fail every later one.
    pub async fn with_store<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let store = Arc::clone(&self.store);

        tokio::task::spawn_blocking(move || {
            let mut guard = store.lock().unwrap_or_else(|poisoned| {
                // an earlier closure panicked; its transaction rolled back on drop
                tracing::warn!("Event store lock was poisoned, recovering");
                store.clear_poison();
                poisoned.into_inner()
            });
            f(&mut guard)
        })
        .await
        .map_err(|e| AppError::Server(format!("event store task failed: {e}")))?
    }
}
