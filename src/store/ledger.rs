//! Registration ledger
//!
//! Per-event registration records and the single capacity-admission
//! checkpoint in the system. Capacity is enforced here and nowhere else.

use chrono::Utc;
use tracing::warn;

use crate::models::{Registration, RegistrationRequest};
use crate::storage::StorageBackend;
use crate::utils::errors::{Result, SportSpotError};
use crate::utils::logging::log_registration;

use super::EventStore;

impl<S: StorageBackend> EventStore<S> {
    /// Register a participant for an event.
    ///
    /// A rejected registration leaves the ledger untouched.
    pub fn register_participant(
        &mut self,
        event_id: i64,
        request: RegistrationRequest,
    ) -> Result<Registration> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == event_id)
            .ok_or(SportSpotError::EventNotFound { event_id })?;

        let event = &mut self.events[index];
        // Ledger fields may be absent on records persisted by older builds
        event.normalize();

        let current = event.participant_count();
        if current >= event.max_participants {
            warn!(
                event_id = event_id,
                participants = current,
                max_participants = event.max_participants,
                "Registration rejected, event is full"
            );
            return Err(SportSpotError::CapacityExceeded { event_id });
        }

        let registration = request.into_registration(Utc::now());
        event.registered_participants.push(registration.clone());
        event.participants = event.participant_count();
        log_registration(event_id, event.participants, event.max_participants);

        let persisted = self.persist();
        self.apply_filters();
        persisted?;
        Ok(registration)
    }

    /// Registrations for an event, in signup order. Unknown ids read as empty.
    pub fn participants_for(&self, event_id: i64) -> &[Registration] {
        self.lookup(event_id)
            .map(|e| e.registered_participants.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::NaiveDate;

    use crate::models::CreateEventRequest;
    use crate::storage::MemoryStorage;

    use super::*;

    fn store_with_capacity(max_participants: u32) -> (EventStore<MemoryStorage>, i64) {
        let mut storage = MemoryStorage::new();
        storage.preload("sportspot_events", "[]");
        let mut store = EventStore::new(storage);
        let event = store
            .add_event(CreateEventRequest {
                title: "River Run".to_string(),
                date: NaiveDate::from_ymd_opt(2099, 7, 15).unwrap(),
                time: "08:00".to_string(),
                location: "Riverside Park".to_string(),
                category: "running".to_string(),
                description: "A 10K run".to_string(),
                max_participants,
                image_id: None,
                image_data: None,
            })
            .unwrap();
        let id = event.id;
        (store, id)
    }

    fn participant(name: &str) -> RegistrationRequest {
        RegistrationRequest {
            full_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "912345678".to_string(),
            age: 30,
            experience: "beginner".to_string(),
            comments: String::new(),
        }
    }

    #[test]
    fn test_registration_increments_count_and_stamps_date() {
        let (mut store, id) = store_with_capacity(5);

        let registration = store.register_participant(id, participant("Ana Silva")).unwrap();
        assert_eq!(registration.full_name, "Ana Silva");

        let event = store.lookup(id).unwrap();
        assert_eq!(event.participants, 1);
        assert_eq!(event.registered_participants.len(), 1);
        assert_eq!(event.registered_participants[0], registration);
    }

    #[test]
    fn test_full_event_rejects_registration() {
        let (mut store, id) = store_with_capacity(1);

        store.register_participant(id, participant("Ana Silva")).unwrap();
        let err = store
            .register_participant(id, participant("Rui Costa"))
            .unwrap_err();

        assert_matches!(err, SportSpotError::CapacityExceeded { event_id } if event_id == id);
        let event = store.lookup(id).unwrap();
        assert_eq!(event.participants, 1);
        assert_eq!(event.registered_participants.len(), 1);
    }

    #[test]
    fn test_unknown_event_is_reported() {
        let (mut store, _) = store_with_capacity(1);
        let err = store.register_participant(99, participant("Ana Silva")).unwrap_err();
        assert_matches!(err, SportSpotError::EventNotFound { event_id: 99 });
    }

    #[test]
    fn test_duplicate_identities_are_allowed() {
        let (mut store, id) = store_with_capacity(5);

        store.register_participant(id, participant("Ana Silva")).unwrap();
        store.register_participant(id, participant("Ana Silva")).unwrap();

        assert_eq!(store.participants_for(id).len(), 2);
    }

    #[test]
    fn test_participants_for_unknown_event_is_empty() {
        let (store, _) = store_with_capacity(1);
        assert!(store.participants_for(99).is_empty());
    }
}
