//! Event model

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::datetime::combine_date_time;

/// A schedulable activity with capacity and category metadata.
///
/// `participants` is derived state: after normalization it always equals
/// `initial_participants + registered_participants.len()`. Stored values are
/// never trusted across loads; [`Event::normalize`] recomputes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    /// Wall-clock start time, "HH:MM"
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub participants: u32,
    pub max_participants: u32,
    /// Participant count that predates ledger-tracked registrations.
    /// Records persisted before the ledger existed lack this field; it is
    /// filled in once by `normalize` and never recomputed afterwards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_participants: Option<u32>,
    #[serde(default)]
    pub registered_participants: Vec<Registration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl Event {
    /// Repair ledger fields on records written by older builds and recompute
    /// the derived participant count. Idempotent.
    pub fn normalize(&mut self) {
        let initial = *self.initial_participants.get_or_insert(self.participants);
        self.participants = initial + self.registered_participants.len() as u32;
    }

    /// Live participant count derived from the ledger fields.
    ///
    /// Callers must normalize the event first; un-normalized legacy records
    /// have no `initial_participants` and would read as ledger-only.
    pub fn participant_count(&self) -> u32 {
        self.initial_participants.unwrap_or(0) + self.registered_participants.len() as u32
    }

    /// Whether the event has reached its capacity
    pub fn is_full(&self) -> bool {
        self.participant_count() >= self.max_participants
    }

    /// Combined start timestamp, `None` when the time string is unreadable
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        combine_date_time(self.date, &self.time)
    }

    /// Normalized comparison key for the category. Display casing is
    /// preserved in `category`; all comparisons go through this key.
    pub fn category_key(&self) -> String {
        self.category.to_lowercase()
    }

    /// Resolve which image the event should display
    pub fn image_source(&self) -> ImageSource<'_> {
        if let Some(data) = &self.image_data {
            ImageSource::Inline(data)
        } else if let Some(id) = &self.image_id {
            ImageSource::Asset(id)
        } else {
            ImageSource::Placeholder
        }
    }
}

/// Display source for an event image. Inline data has priority over a stored
/// asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// Inline-encoded image payload
    Inline(&'a str),
    /// Reference to a pre-seeded image asset
    Asset(&'a str),
    /// No image, the view shows a placeholder
    Placeholder,
}

/// One participant's signup record against an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub experience: String,
    pub comments: String,
    pub registration_date: DateTime<Utc>,
}

/// Participant intake data as submitted by the registration form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub experience: String,
    #[serde(default)]
    pub comments: String,
}

impl RegistrationRequest {
    /// Stamp the intake data into a ledger record
    pub fn into_registration(self, registration_date: DateTime<Utc>) -> Registration {
        Registration {
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            age: self.age,
            experience: self.experience,
            comments: self.comments,
            registration_date,
        }
    }
}

/// Payload for creating a new event.
///
/// Carries no participant fields: new events always start with an empty
/// ledger regardless of what the caller intends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub max_participants: u32,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub image_data: Option<String>,
}

/// Payload for updating an existing event.
///
/// Registration history is not part of the payload; the repository preserves
/// it from the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub max_participants: u32,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub image_data: Option<String>,
}
