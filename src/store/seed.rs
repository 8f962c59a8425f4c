//! Built-in seed events
//!
//! Used when persistence is empty or unreadable on first load. Six example
//! events spanning six categories.

use chrono::NaiveDate;

use crate::models::Event;

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

#[allow(clippy::too_many_arguments)]
fn seed_event(
    id: i64,
    title: &str,
    date: NaiveDate,
    time: &str,
    location: &str,
    category: &str,
    description: &str,
    participants: u32,
    max_participants: u32,
    image_id: &str,
) -> Event {
    Event {
        id,
        title: title.to_string(),
        date,
        time: time.to_string(),
        location: location.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        participants,
        max_participants,
        initial_participants: None,
        registered_participants: Vec::new(),
        image_id: Some(image_id.to_string()),
        image_data: None,
    }
}

/// The example events shown on a fresh install. Callers normalize them like
/// any other loaded record.
pub fn seed_events() -> Vec<Event> {
    vec![
        seed_event(
            1,
            "Mondego River Run",
            seed_date(2025, 7, 15),
            "08:00",
            "Parque Verde do Mondego",
            "running",
            "Join us for a scenic 10K run along the beautiful Mondego River. \
             Perfect for runners of all levels with stunning views of historic Coimbra.",
            45,
            100,
            "running-event-1",
        ),
        seed_event(
            2,
            "FC Coimbra Tournament",
            seed_date(2025, 7, 20),
            "14:00",
            "Complexo Desportivo Municipal",
            "soccer",
            "Annual amateur soccer tournament featuring local teams. \
             Come support your favorite squad or join as a player!",
            128,
            160,
            "soccer-event-2",
        ),
        seed_event(
            3,
            "Cycling Through History",
            seed_date(2025, 7, 25),
            "09:30",
            "Universidade de Coimbra",
            "cycling",
            "Explore Coimbra's historic sites on two wheels! \
             A guided cycling tour through the university and old town.",
            22,
            30,
            "cycling-event-3",
        ),
        seed_event(
            4,
            "Beach Volleyball Championship",
            seed_date(2025, 8, 1),
            "16:00",
            "Praia Fluvial de Palheiros",
            "volleyball",
            "Summer beach volleyball tournament by the river. \
             Teams of 4, prizes for winners, and fun for everyone!",
            32,
            48,
            "volleyball-event-4",
        ),
        seed_event(
            5,
            "Morning Yoga in the Park",
            seed_date(2025, 7, 28),
            "07:00",
            "Jardim Botânico",
            "Yoga",
            "Start your day with peaceful yoga session in the beautiful Botanical Garden. \
             All levels welcome.",
            18,
            25,
            "yoga-event-5",
        ),
        seed_event(
            6,
            "University Sports Day",
            seed_date(2025, 8, 5),
            "10:00",
            "Campus da UC",
            "Multi-Sport",
            "Multi-sport event for students and faculty. \
             Athletics, swimming, tennis, and more!",
            156,
            200,
            "multi-sport-event-6",
        ),
    ]
}
