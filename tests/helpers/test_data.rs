//! Test data helpers for creating stores, events and registrations

use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;

use SportSpot::models::{CreateEventRequest, Event, RegistrationRequest, UpdateEventRequest};
use SportSpot::storage::MemoryStorage;
use SportSpot::EventStore;

/// Calendar date helper for fixed test dates
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Create-event request with sensible defaults
pub fn create_request(title: &str, category: &str, event_date: NaiveDate) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        date: event_date,
        time: "10:00".to_string(),
        location: "Parque Verde".to_string(),
        category: category.to_string(),
        description: format!("{} in the park", title),
        max_participants: 20,
        image_id: None,
        image_data: None,
    }
}

/// Update request mirroring an existing event's editable fields
pub fn update_request_from(event: &Event) -> UpdateEventRequest {
    UpdateEventRequest {
        id: event.id,
        title: event.title.clone(),
        date: event.date,
        time: event.time.clone(),
        location: event.location.clone(),
        category: event.category.clone(),
        description: event.description.clone(),
        max_participants: event.max_participants,
        image_id: None,
        image_data: None,
    }
}

/// Registration request with generated participant data
pub fn registration_request() -> RegistrationRequest {
    RegistrationRequest {
        full_name: Name().fake(),
        email: SafeEmail().fake(),
        phone: PhoneNumber().fake(),
        age: (16..70).fake(),
        experience: "beginner".to_string(),
        comments: String::new(),
    }
}

/// A store over fresh in-memory storage; loads the built-in seed set
pub fn seeded_store() -> EventStore<MemoryStorage> {
    EventStore::new(MemoryStorage::new())
}

/// A store over in-memory storage holding an empty collection
pub fn empty_store() -> EventStore<MemoryStorage> {
    let mut storage = MemoryStorage::new();
    storage.preload("sportspot_events", "[]");
    EventStore::new(storage)
}
