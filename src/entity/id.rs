// src/entity/id.rs
//! Note identifiers.
//!
//! User notes get `note-{unix millis}-{9 random hex chars}` so two notes
//! created in the same millisecond still differ. Sample notes get
//! `sample-{unix millis}-{index}`, unique within a batch by index.

use chrono::Utc;
use uuid::Uuid;

const RANDOM_SUFFIX_LEN: usize = 9;

pub fn new_note_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "note-{}-{}",
        Utc::now().timestamp_millis(),
        &suffix[..RANDOM_SUFFIX_LEN]
    )
}

pub fn sample_note_id(millis: i64, index: usize) -> String {
    format!("sample-{}-{}", millis, index)
}
