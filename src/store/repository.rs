//! Repository operations
//!
//! The authoritative event collection and its persistence lifecycle: load
//! with seed fallback and normalization, create/update/delete, lookups, and
//! the write-with-cleanup-retry policy.

use chrono::Local;
use tracing::{debug, error, info, warn};

use crate::models::{CreateEventRequest, Event, UpdateEventRequest};
use crate::storage::{StorageBackend, LEGACY_KEYS};
use crate::utils::errors::{Result, SportSpotError};
use crate::utils::logging::{log_event_action, log_storage_operation};

use super::{seed, EventStore};

impl<S: StorageBackend> EventStore<S> {
    /// Load the persisted collection, falling back to the seed set when the
    /// stored payload is absent or unreadable.
    pub(super) fn load(&mut self) {
        self.events = match self.storage.read(&self.events_key) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Event>>(&payload) {
                Ok(events) => {
                    info!(count = events.len(), "Loaded events from storage");
                    events
                }
                Err(e) => {
                    warn!(error = %e, "Stored events are unreadable, using seed data");
                    seed::seed_events()
                }
            },
            Ok(None) => {
                debug!("No stored events, using seed data");
                seed::seed_events()
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored events, using seed data");
                seed::seed_events()
            }
        };

        for event in &mut self.events {
            event.normalize();
        }
    }

    /// Look up an event by id
    pub fn lookup(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events starting strictly after the current moment, soonest first.
    /// Events whose time string is unreadable never count as upcoming.
    pub fn upcoming_events(&self, limit: Option<usize>) -> Vec<&Event> {
        let now = Local::now().naive_local();
        let mut upcoming: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.starts_at().map_or(false, |starts_at| starts_at > now))
            .collect();
        upcoming.sort_by_key(|e| e.starts_at());

        if let Some(limit) = limit {
            upcoming.truncate(limit);
        }
        upcoming
    }

    /// Create a new event. New events always start with an empty ledger.
    pub fn add_event(&mut self, request: CreateEventRequest) -> Result<Event> {
        if request.max_participants == 0 {
            return Err(SportSpotError::InvalidInput(
                "maxParticipants must be greater than zero".to_string(),
            ));
        }

        let id = self.next_id();
        let event = Event {
            id,
            title: request.title,
            date: request.date,
            time: request.time,
            location: request.location,
            category: request.category,
            description: request.description,
            participants: 0,
            max_participants: request.max_participants,
            initial_participants: Some(0),
            registered_participants: Vec::new(),
            image_id: request.image_id,
            image_data: request.image_data,
        };

        self.events.push(event.clone());
        let persisted = self.persist();
        self.apply_filters();
        info!(event_id = id, title = %event.title, "Event created");
        persisted?;
        Ok(event)
    }

    /// Update an existing event, preserving its registration history.
    pub fn update_event(&mut self, request: UpdateEventRequest) -> Result<Event> {
        if request.max_participants == 0 {
            return Err(SportSpotError::InvalidInput(
                "maxParticipants must be greater than zero".to_string(),
            ));
        }

        let index = self
            .events
            .iter()
            .position(|e| e.id == request.id)
            .ok_or(SportSpotError::EventNotFound {
                event_id: request.id,
            })?;

        let existing = &self.events[index];
        let registered_participants = existing.registered_participants.clone();
        let initial_participants = existing.initial_participants.unwrap_or(existing.participants);

        // Inline image data replaces and clears any stored reference; with no
        // new image at all, the stored reference carries forward.
        let image_id = if request.image_data.is_some() {
            None
        } else {
            request.image_id.or_else(|| existing.image_id.clone())
        };

        let participants = initial_participants + registered_participants.len() as u32;
        let event = Event {
            id: request.id,
            title: request.title,
            date: request.date,
            time: request.time,
            location: request.location,
            category: request.category,
            description: request.description,
            participants,
            max_participants: request.max_participants,
            initial_participants: Some(initial_participants),
            registered_participants,
            image_id,
            image_data: request.image_data,
        };

        self.events[index] = event.clone();
        let persisted = self.persist();
        self.apply_filters();
        self.notify_categories_changed();
        info!(event_id = request.id, "Event updated");
        persisted?;
        Ok(event)
    }

    /// Delete an event by id. Deleting an unknown id is a no-op that still
    /// succeeds.
    pub fn delete_event(&mut self, id: i64) -> Result<()> {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;

        let persisted = self.persist();
        self.apply_filters();

        if removed {
            log_event_action(id, "delete", None);
        } else {
            debug!(event_id = id, "Delete for unknown event, nothing removed");
        }
        persisted
    }

    fn next_id(&self) -> i64 {
        self.events.iter().map(|e| e.id).max().map_or(1, |max| max + 1)
    }

    /// Write the collection to storage. On failure, clears leftover legacy
    /// keys and retries once. In-memory state is never rolled back; a
    /// `Persistence` error tells the caller memory and storage have diverged.
    pub(super) fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string(&self.events)?;

        if let Err(first) = self.storage.write(&self.events_key, &payload) {
            warn!(error = %first, "Storage write failed, clearing legacy keys and retrying");
            for key in LEGACY_KEYS {
                if let Err(e) = self.storage.remove(key) {
                    debug!(key = key, error = %e, "Legacy key cleanup failed");
                }
            }

            if let Err(retry) = self.storage.write(&self.events_key, &payload) {
                error!(error = %retry, "Storage write failed after cleanup");
                log_storage_operation("write", &self.events_key, false);
                return Err(SportSpotError::Persistence(retry.to_string()));
            }
        }

        log_storage_operation("write", &self.events_key, true);
        Ok(())
    }
}
