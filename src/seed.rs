//! First-run sample notes.
//!
//! A fixed catalog of ten places scattered a few hundred meters around an
//! origin. Offsets are pairwise distinct so the markers never stack.

use chrono::{DateTime, Local};

use crate::entity::{format_note_date, sample_note_id, Note};

/// (title, description, latitude offset, longitude offset)
pub const SAMPLE_CATALOG: [(&str, &str, f64, f64); 10] = [
    ("Coffee Shop", "Great coffee and wifi for working", 0.001, 0.001),
    ("Park Bench", "Nice spot for reading and relaxation", -0.002, 0.003),
    ("Restaurant", "Amazing pasta and friendly service", 0.003, -0.001),
    ("Grocery Store", "Don't forget to buy milk and bread", -0.001, -0.002),
    ("Gym", "Workout schedule: Mon, Wed, Fri", 0.002, 0.002),
    ("Library", "Quiet study area on second floor", -0.003, 0.001),
    ("Bus Stop", "Route 42 stops here every 15 minutes", 0.001, -0.003),
    ("Pharmacy", "Pick up prescription on Tuesday", -0.002, -0.001),
    ("ATM", "24/7 access, no fees for my bank", 0.003, 0.003),
    ("Meetup Spot", "Weekly book club meets here Thursday 7pm", -0.001, 0.002),
];

/// Build the sample batch around (`latitude`, `longitude`) stamped with today's date.
/// Touches no storage.
pub fn generate_seed_notes(latitude: f64, longitude: f64) -> Vec<Note> {
    generate_seed_notes_at(latitude, longitude, &Local::now())
}

pub fn generate_seed_notes_at(latitude: f64, longitude: f64, now: &DateTime<Local>) -> Vec<Note> {
    let millis = now.timestamp_millis();
    let date = format_note_date(now);

    SAMPLE_CATALOG
        .iter()
        .enumerate()
        .map(|(index, (title, description, d_lat, d_lng))| Note {
            id: sample_note_id(millis, index),
            latitude: latitude + d_lat,
            longitude: longitude + d_lng,
            title: title.to_string(),
            description: description.to_string(),
            date: Some(date.clone()),
            image_uri: None,
        })
        .collect()
}
