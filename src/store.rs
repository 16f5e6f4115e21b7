//! The note store: single owner of the persisted note collection.
//!
//! Every mutation is a read-modify-write of the whole collection under
//! [`NOTES_KEY`]. Mutations hold one async mutex for the full cycle, so two
//! overlapping calls never both start from the same snapshot.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Local};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::entity::{NewNote, Note, NotePatch};
use crate::error::{NoteMapError, Result};
use crate::seed::generate_seed_notes_at;
use crate::storage::KvBackend;

pub const NOTES_KEY: &str = "@notemap_notes";
pub const SEED_FLAG_KEY: &str = "@notemap_sample_notes_generated";

/// Highest envelope version this build can read. Writes are always a bare array.
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Deserialize)]
struct NotesEnvelope {
    version: u32,
    notes: Vec<Note>,
}

/// Result of [`NoteStore::seed_once`].
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    Seeded(Vec<Note>),
    AlreadySeeded,
}

pub struct NoteStore<B> {
    backend: Arc<B>,
    write_lock: Arc<Mutex<()>>,
}

impl<B> Clone for NoteStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<B: KvBackend> NoteStore<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the full collection. A missing key is an empty collection;
    /// an unparseable value is [`NoteMapError::CorruptState`].
    pub async fn load_notes(&self) -> Result<Vec<Note>> {
        let raw = match self.backend.get(NOTES_KEY).await? {
            Some(raw) => raw,
            None => {
                debug!("no stored notes yet");
                return Ok(Vec::new());
            }
        };

        let notes = match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => notes,
            Err(bare_err) => match serde_json::from_str::<NotesEnvelope>(&raw) {
                Ok(envelope) if envelope.version > SCHEMA_VERSION => {
                    return Err(NoteMapError::UnsupportedSchemaVersion {
                        found: envelope.version,
                        supported: SCHEMA_VERSION,
                    });
                }
                Ok(envelope) => envelope.notes,
                Err(envelope_err) => {
                    // Report against the shape the value was trying to be.
                    let err = if raw.trim_start().starts_with('{') {
                        envelope_err
                    } else {
                        bare_err
                    };
                    return Err(NoteMapError::CorruptState(err.to_string()));
                }
            },
        };

        if let Some(dup) = find_duplicate_id(&notes) {
            return Err(NoteMapError::CorruptState(format!(
                "duplicate note id '{}'",
                dup
            )));
        }

        debug!(count = notes.len(), "loaded notes");
        Ok(notes)
    }

    /// Overwrite the stored collection with `notes`.
    pub async fn save_notes(&self, notes: &[Note]) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.write_notes(notes).await
    }

    pub async fn get_note(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.load_notes().await?.into_iter().find(|n| n.id == id))
    }

    /// Append a new note with a fresh id and return it.
    pub async fn create_note(&self, data: NewNote) -> Result<Note> {
        let _guard = self.write_lock.lock().await;

        let mut notes = self.load_notes().await?;
        let mut note = data.clone().into_note();
        while notes.iter().any(|n| n.id == note.id) {
            note = data.clone().into_note();
        }

        notes.push(note.clone());
        self.write_notes(&notes).await?;

        info!(id = %note.id, title = %note.title, "created note");
        Ok(note)
    }

    /// Merge `patch` over the note with `id` and return the merged note.
    pub async fn update_note(&self, id: &str, patch: NotePatch) -> Result<Note> {
        let _guard = self.write_lock.lock().await;

        let mut notes = self.load_notes().await?;
        let note = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NoteMapError::NotFound(id.to_string()))?;

        patch.apply(note);
        let updated = note.clone();
        self.write_notes(&notes).await?;

        info!(id = %updated.id, "updated note");
        Ok(updated)
    }

    /// Remove the note with `id`. Returns `None` when it was already gone.
    pub async fn delete_note(&self, id: &str) -> Result<Option<Note>> {
        let _guard = self.write_lock.lock().await;

        let mut notes = self.load_notes().await?;
        let Some(pos) = notes.iter().position(|n| n.id == id) else {
            debug!(id, "delete of absent note ignored");
            return Ok(None);
        };

        let removed = notes.remove(pos);
        self.write_notes(&notes).await?;

        info!(id = %removed.id, "deleted note");
        Ok(Some(removed))
    }

    pub async fn has_seeded(&self) -> Result<bool> {
        Ok(self.backend.get(SEED_FLAG_KEY).await?.as_deref() == Some("true"))
    }

    pub async fn mark_seeded(&self) -> Result<()> {
        self.backend.set(SEED_FLAG_KEY, "true".to_string()).await
    }

    /// Append the sample batch around (`latitude`, `longitude`) unless a
    /// previous run already did.
    ///
    /// Notes are written before the flag. If the flag write fails the notes
    /// stay and the next call seeds again: at-least-once, never lost.
    pub async fn seed_once(&self, latitude: f64, longitude: f64) -> Result<SeedOutcome> {
        let _guard = self.write_lock.lock().await;

        if self.has_seeded().await? {
            debug!("sample notes already generated");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let mut notes = self.load_notes().await?;

        // A re-run after a lost flag write may land in the same millisecond.
        let mut now = Local::now();
        let mut samples = generate_seed_notes_at(latitude, longitude, &now);
        while samples.iter().any(|s| notes.iter().any(|n| n.id == s.id)) {
            now += Duration::milliseconds(1);
            samples = generate_seed_notes_at(latitude, longitude, &now);
        }

        notes.extend(samples.iter().cloned());
        self.write_notes(&notes).await?;

        if let Err(e) = self.mark_seeded().await {
            warn!(error = %e, "sample notes written but seed flag was not; next start will seed again");
            return Err(e);
        }

        info!(count = samples.len(), latitude, longitude, "generated sample notes");
        Ok(SeedOutcome::Seeded(samples))
    }

    async fn write_notes(&self, notes: &[Note]) -> Result<()> {
        // JSON has no NaN/inf; serde_json would write `null` and the
        // collection would no longer load.
        if let Some(bad) = notes
            .iter()
            .find(|n| !n.latitude.is_finite() || !n.longitude.is_finite())
        {
            return Err(NoteMapError::StorageWrite(format!(
                "note '{}' has a non-finite coordinate ({}, {})",
                bad.id, bad.latitude, bad.longitude
            )));
        }

        let json = serde_json::to_string(notes)
            .map_err(|e| NoteMapError::StorageWrite(format!("serialize notes: {}", e)))?;
        self.backend.set(NOTES_KEY, json).await?;
        debug!(count = notes.len(), "saved notes");
        Ok(())
    }
}

fn find_duplicate_id(notes: &[Note]) -> Option<String> {
    let mut seen = HashSet::with_capacity(notes.len());
    notes
        .iter()
        .find(|n| !seen.insert(n.id.as_str()))
        .map(|n| n.id.clone())
}
