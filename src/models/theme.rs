use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::platform::storage::PreferenceStorage;

/// Light or dark colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode `{0}`")]
pub struct UnknownThemeMode(pub String);

impl FromStr for ThemeMode {
    type Err = UnknownThemeMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownThemeMode(other.to_string())),
        }
    }
}

/// Handle returned by [`ThemeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(ThemeMode)>;

/// Site-wide theme flag. One writer (`toggle`), any number of subscribers.
pub struct ThemeStore {
    mode: Cell<ThemeMode>,
    storage: Box<dyn PreferenceStorage>,
    key: String,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_id: Cell<u64>,
}

impl ThemeStore {
    /// Restore the persisted preference from `storage`, defaulting to light
    pub fn load(storage: Box<dyn PreferenceStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let mode = match storage.read(&key) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|e: UnknownThemeMode| {
                tracing::warn!("ignoring stored theme: {e}");
                ThemeMode::default()
            }),
            Ok(None) => ThemeMode::default(),
            Err(e) => {
                tracing::warn!("could not read theme preference: {e}");
                ThemeMode::default()
            }
        };

        tracing::debug!(%mode, "theme store initialized");

        Self {
            mode: Cell::new(mode),
            storage,
            key,
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn current(&self) -> ThemeMode {
        self.mode.get()
    }

    /// Flip the mode, persist it, then notify subscribers synchronously
    pub fn toggle(&self) -> ThemeMode {
        let mode = self.mode.get().toggled();
        self.mode.set(mode);

        if let Err(e) = self.storage.write(&self.key, mode.as_str()) {
            tracing::warn!("could not persist theme preference: {e}");
        }

        // Snapshot so callbacks may (un)subscribe without a double borrow
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(mode);
        }

        mode
    }

    pub fn subscribe(&self, callback: impl Fn(ThemeMode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::platform::storage::MemoryStorage;

    const KEY: &str = "theme";

    struct FailingStorage;

    impl PreferenceStorage for FailingStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "denied".to_string(),
            })
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota".to_string(),
            })
        }
    }

    #[test]
    fn test_defaults_to_light_without_preference() {
        let store = ThemeStore::load(Box::new(MemoryStorage::new()), KEY);
        assert_eq!(store.current(), ThemeMode::Light);
    }

    #[test]
    fn test_restores_persisted_dark() {
        let store = ThemeStore::load(Box::new(MemoryStorage::with_entry(KEY, "dark")), KEY);
        assert_eq!(store.current(), ThemeMode::Dark);
    }

    #[test]
    fn test_garbage_preference_falls_back_to_light() {
        let store = ThemeStore::load(Box::new(MemoryStorage::with_entry(KEY, "sepia")), KEY);
        assert_eq!(store.current(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_twice_restores_and_persists_last_value() {
        let storage = MemoryStorage::new();
        let store = ThemeStore::load(Box::new(storage.clone()), KEY);

        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(storage.get(KEY).as_deref(), Some("dark"));

        assert_eq!(store.toggle(), ThemeMode::Light);
        assert_eq!(store.current(), ThemeMode::Light);
        assert_eq!(storage.get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_subscribers_notified_synchronously() {
        let store = ThemeStore::load(Box::new(MemoryStorage::new()), KEY);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        store.subscribe(move |mode| sink.borrow_mut().push(mode));

        store.toggle();
        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark]);
        store.toggle();
        assert_eq!(*seen.borrow(), vec![ThemeMode::Dark, ThemeMode::Light]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = ThemeStore::load(Box::new(MemoryStorage::new()), KEY);
        let calls = Rc::new(Cell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| counter.set(counter.get() + 1));
        store.toggle();

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_storage_failure_does_not_block_toggle() {
        let store = ThemeStore::load(Box::new(FailingStorage), KEY);
        assert_eq!(store.current(), ThemeMode::Light);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.current(), ThemeMode::Dark);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("Dark".parse::<ThemeMode>().is_err());
    }
}
