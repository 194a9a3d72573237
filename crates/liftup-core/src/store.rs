//! The settings store: a watch-channel snapshot in front of a
//! persistence actor.
//!
//! Reads and updates are synchronous for callers. Every update issues
//! a fire-and-forget write to an actor on a dedicated thread; the
//! actor owns the storage backend and logs write failures, so a hung
//! or broken backend never blocks an in-memory state transition.
//! Writes are not serialized against callers: if two updates race,
//! the last one issued is not guaranteed to be the last to land.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};

use crate::accessibility::{AccessibilityConfig, STATE_STORAGE_KEY};
use crate::error::LiftupError;
use crate::storage::KeyValueStorage;

/// Commands sent to the actor thread. Writes carry no reply channel;
/// their outcome is logged in the actor.
enum StorageCommand {
    Read {
        key: String,
        reply: oneshot::Sender<Result<Option<String>, LiftupError>>,
    },
    Write {
        key: String,
        value: String,
    },
}

/// Cloneable handle to the current accessibility config and its
/// persistence actor. Single writer, many readers: all clones observe
/// the same snapshot.
#[derive(Clone)]
pub struct SettingsStore {
    state: Arc<watch::Sender<AccessibilityConfig>>,
    tx: mpsc::UnboundedSender<StorageCommand>,
}

impl SettingsStore {
    /// Spawn the persistence actor and return a store seeded with the
    /// startup config (built-in default plus ambient theme).
    ///
    /// If the actor thread cannot be spawned the store still works;
    /// it just never persists.
    pub fn new(storage: Box<dyn KeyValueStorage>, startup: AccessibilityConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let _ = std::thread::Builder::new()
            .name("settings-storage".into())
            .spawn(move || actor_loop(storage, rx))
            .map_err(|e| tracing::error!("Failed to spawn storage thread: {e}"));

        let (state, _) = watch::channel(startup);
        Self {
            state: Arc::new(state),
            tx,
        }
    }

    /// The active snapshot. Never fails.
    pub fn current(&self) -> AccessibilityConfig {
        *self.state.borrow()
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<AccessibilityConfig> {
        self.state.subscribe()
    }

    /// Replace the whole config. All readers observe `next`
    /// immediately; the storage write is issued fire-and-forget.
    pub fn update(&self, next: AccessibilityConfig) {
        self.state.send_replace(next);
        self.persist(next);
    }

    /// Restore the built-in default. This deliberately does not
    /// re-apply the ambient theme captured at startup.
    pub fn reset(&self) {
        self.update(AccessibilityConfig::default());
    }

    /// Read the persisted config. A present, well-formed record
    /// replaces the in-memory state; anything else leaves the startup
    /// config untouched and logs.
    pub async fn load(&self) {
        let (reply, rx) = oneshot::channel();
        if self
            .tx
            .send(StorageCommand::Read {
                key: STATE_STORAGE_KEY.to_string(),
                reply,
            })
            .is_err()
        {
            return;
        }
        match rx.await {
            Ok(Ok(Some(raw))) => match serde_json::from_str::<AccessibilityConfig>(&raw) {
                Ok(saved) => {
                    self.state.send_replace(saved);
                }
                Err(e) => tracing::warn!("Ignoring malformed saved state: {e}"),
            },
            Ok(Ok(None)) => {}
            Ok(Err(e)) => tracing::warn!("Failed to load state: {e}"),
            // Actor gone; stay on the startup config.
            Err(_) => {}
        }
    }

    fn persist(&self, config: AccessibilityConfig) {
        match serde_json::to_string(&config) {
            Ok(value) => {
                let _ = self.tx.send(StorageCommand::Write {
                    key: STATE_STORAGE_KEY.to_string(),
                    value,
                });
            }
            Err(e) => tracing::warn!("Failed to serialize state: {e}"),
        }
    }
}

fn actor_loop(
    mut storage: Box<dyn KeyValueStorage>,
    mut rx: mpsc::UnboundedReceiver<StorageCommand>,
) {
    // blocking_recv: this is a plain OS thread, no runtime here.
    while let Some(cmd) = rx.blocking_recv() {
        match cmd {
            StorageCommand::Read { key, reply } => {
                let _ = reply.send(storage.read(&key));
            }
            StorageCommand::Write { key, value } => {
                if let Err(e) = storage.write(&key, &value) {
                    tracing::warn!("Failed to save state: {e}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::{TextAlign, Theme};
    use crate::storage::MemoryStorage;

    fn sample() -> AccessibilityConfig {
        AccessibilityConfig {
            theme: Theme::Dark,
            letter_spacing: 2.0,
            line_height: 32,
            text_align: TextAlign::Right,
        }
    }

    #[tokio::test]
    async fn current_returns_the_last_update() {
        let store = SettingsStore::new(
            Box::new(MemoryStorage::new()),
            AccessibilityConfig::default(),
        );

        let first = sample();
        store.update(first);
        assert_eq!(store.current(), first);

        let second = first.with_cycled_text_align();
        store.update(second);
        assert_eq!(store.current(), second);
    }

    #[tokio::test]
    async fn reset_restores_the_builtin_default() {
        // Startup captured an ambient dark theme; reset must ignore it.
        let store = SettingsStore::new(
            Box::new(MemoryStorage::new()),
            AccessibilityConfig::startup(Some(Theme::Dark)),
        );
        store.update(sample());

        store.reset();
        assert_eq!(store.current(), AccessibilityConfig::default());
        assert_eq!(store.current().theme, Theme::Light);
    }

    #[tokio::test]
    async fn subscribers_observe_updates() {
        let store = SettingsStore::new(
            Box::new(MemoryStorage::new()),
            AccessibilityConfig::default(),
        );
        let mut rx = store.subscribe();

        let next = sample();
        store.update(next);
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), next);
    }

    #[tokio::test]
    async fn persisted_config_survives_a_restart() {
        let backend = MemoryStorage::new();
        let saved = sample();

        let store = SettingsStore::new(Box::new(backend.clone()), AccessibilityConfig::default());
        store.update(saved);
        // The actor handles commands in order, so a read completing
        // means the earlier write has landed.
        store.load().await;

        let reloaded =
            SettingsStore::new(Box::new(backend), AccessibilityConfig::default());
        reloaded.load().await;
        assert_eq!(reloaded.current(), saved);
    }

    #[tokio::test]
    async fn load_falls_back_to_startup_on_read_failure() {
        let startup = AccessibilityConfig::startup(Some(Theme::Dark));
        let store = SettingsStore::new(Box::new(MemoryStorage::failing_reads()), startup);

        store.load().await;
        assert_eq!(store.current(), startup);
    }

    #[tokio::test]
    async fn load_ignores_a_malformed_record() {
        let backend = MemoryStorage::new();
        {
            let mut writer = backend.clone();
            writer
                .write(STATE_STORAGE_KEY, "{not json at all")
                .unwrap();
        }

        let startup = AccessibilityConfig::startup(None);
        let store = SettingsStore::new(Box::new(backend), startup);
        store.load().await;
        assert_eq!(store.current(), startup);
    }

    #[tokio::test]
    async fn memory_state_is_authoritative_when_writes_fail() {
        let store = SettingsStore::new(
            Box::new(MemoryStorage::failing_writes()),
            AccessibilityConfig::default(),
        );

        let next = sample();
        store.update(next);
        assert_eq!(store.current(), next);
        // A later load finds nothing persisted but the session state
        // is already what the caller asked for.
        store.load().await;
        assert_eq!(store.current(), next);
    }

    #[tokio::test]
    async fn out_of_range_persisted_values_are_accepted() {
        // Corrupted ranges are not validated; only the cyclic steppers
        // produce values, so anything structurally valid is taken as-is.
        let backend = MemoryStorage::new();
        {
            let mut writer = backend.clone();
            writer
                .write(
                    STATE_STORAGE_KEY,
                    r#"{"theme":"dark","letterSpacing":9.5,"lineHeight":7,"textAlign":"left"}"#,
                )
                .unwrap();
        }

        let store = SettingsStore::new(Box::new(backend), AccessibilityConfig::default());
        store.load().await;
        assert_eq!(store.current().letter_spacing, 9.5);
        assert_eq!(store.current().line_height, 7);
    }
}
