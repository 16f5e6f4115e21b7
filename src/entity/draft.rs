// src/entity/draft.rs
//! Editor-side normalization. The store persists whatever it is given, so
//! callers run raw form input through [`NoteDraft::normalize`] first.

use chrono::{DateTime, Local};

use super::NewNote;
use crate::error::{NoteMapError, Result};

pub const DEFAULT_DESCRIPTION: &str = "No description";

/// Display format for note dates (day/month/year).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

pub fn format_note_date(now: &DateTime<Local>) -> String {
    now.format(DATE_FORMAT).to_string()
}

/// Raw note form input.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub description: String,
    pub date: Option<String>,
    pub image_uri: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl NoteDraft {
    pub fn normalize(self) -> Result<NewNote> {
        self.normalize_at(&Local::now())
    }

    pub fn normalize_at(self, now: &DateTime<Local>) -> Result<NewNote> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(NoteMapError::InvalidNote("title is required".to_string()));
        }

        let date = match self.date {
            Some(d) if d.trim().is_empty() => {
                return Err(NoteMapError::InvalidNote("date is required".to_string()))
            }
            Some(d) => d.trim().to_string(),
            None => format_note_date(now),
        };

        validate_coordinates(self.latitude, self.longitude)?;

        let description = match self.description.trim() {
            "" => DEFAULT_DESCRIPTION.to_string(),
            d => d.to_string(),
        };

        let image_uri = self
            .image_uri
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Ok(NewNote {
            latitude: self.latitude,
            longitude: self.longitude,
            title: title.to_string(),
            description,
            date: Some(date),
            image_uri,
        })
    }
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(NoteMapError::InvalidNote(format!(
            "latitude {} out of range [-90, 90]",
            latitude
        )));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(NoteMapError::InvalidNote(format!(
            "longitude {} out of range [-180, 180]",
            longitude
        )));
    }
    Ok(())
}
