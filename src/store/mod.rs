//! Event store
//!
//! The store is the single owner of the event collection. It composes the
//! repository (authoritative collection + persistence), the filter engine
//! (category and date criteria over the collection), the registration ledger
//! (capacity-checked signups) and the category index. View-layer consumers
//! call in and re-query; nothing is pushed to them except through the
//! explicitly registered hooks.

pub mod categories;
pub mod filters;
pub mod ledger;
pub mod repository;
pub mod seed;

pub use filters::{CategoryFilter, FilterState, PRIMARY_CATEGORIES};

use std::fmt;

use tracing::info;

use crate::config::Settings;
use crate::models::Event;
use crate::storage::{JsonFileStorage, StorageBackend};
use crate::utils::errors::Result;

/// Callback hooks for optional view-layer collaborators.
///
/// The store never reaches out to globally-named modules; interested
/// collaborators register here instead.
#[derive(Default)]
pub struct StoreHooks {
    /// Fired after a mutation that may have changed the category set;
    /// receives the current non-primary categories.
    pub on_categories_changed: Option<Box<dyn Fn(&[String])>>,
}

/// The event store: canonical event collection, filter state and
/// registration ledger behind one explicit instance.
pub struct EventStore<S: StorageBackend> {
    storage: S,
    events_key: String,
    events: Vec<Event>,
    filters: FilterState,
    filtered: Vec<i64>,
    hooks: StoreHooks,
}

impl EventStore<JsonFileStorage> {
    /// Open a store backed by the configured storage directory
    pub fn open(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let storage = JsonFileStorage::open(&settings.storage.path)?;
        Ok(Self::with_namespace(storage, &settings.storage.namespace))
    }
}

impl<S: StorageBackend> EventStore<S> {
    /// Create a store over `storage` using the default key namespace
    pub fn new(storage: S) -> Self {
        Self::with_namespace(storage, "sportspot")
    }

    /// Create a store over `storage` with an explicit key namespace
    pub fn with_namespace(storage: S, namespace: &str) -> Self {
        let mut store = Self {
            storage,
            events_key: format!("{}_events", namespace),
            events: Vec::new(),
            filters: FilterState::default(),
            filtered: Vec::new(),
            hooks: StoreHooks::default(),
        };
        store.load();
        store.apply_filters();
        info!(events = store.events.len(), "Event store initialized");
        store
    }

    /// Register a callback fired when the category set may have changed
    pub fn on_categories_changed(&mut self, hook: impl Fn(&[String]) + 'static) {
        self.hooks.on_categories_changed = Some(Box::new(hook));
    }

    /// All events in insertion order
    pub fn all_events(&self) -> &[Event] {
        &self.events
    }

    /// Mutable access to the persistence backend
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn notify_categories_changed(&self) {
        if let Some(hook) = &self.hooks.on_categories_changed {
            hook(&self.other_categories());
        }
    }
}

impl<S: StorageBackend> fmt::Debug for EventStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStore")
            .field("events_key", &self.events_key)
            .field("events", &self.events.len())
            .field("filters", &self.filters)
            .finish_non_exhaustive()
    }
}
