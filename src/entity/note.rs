// src/entity/note.rs
use serde::{Deserialize, Serialize};

use super::id::new_note_id;

/// A short text/image note pinned to a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

/// Everything a note carries except its id, which the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

impl NewNote {
    pub fn new(title: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            title: title.into(),
            description: String::new(),
            date: None,
            image_uri: None,
        }
    }

    /// Attach a fresh id.
    pub fn into_note(self) -> Note {
        self.with_id(new_note_id())
    }

    pub fn with_id(self, id: String) -> Note {
        Note {
            id,
            latitude: self.latitude,
            longitude: self.longitude,
            title: self.title,
            description: self.description,
            date: self.date,
            image_uri: self.image_uri,
        }
    }
}

/// Field-level patch for an existing note. Absent fields are left alone.
/// The id is not patchable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: Option<Option<String>>,      // Some(None) to clear, Some(Some(s)) to set
    pub image_uri: Option<Option<String>>, // Some(None) to clear, Some(Some(s)) to set
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow merge onto `note`.
    pub fn apply(self, note: &mut Note) {
        if let Some(title) = self.title {
            note.title = title;
        }
        if let Some(description) = self.description {
            note.description = description;
        }
        if let Some(latitude) = self.latitude {
            note.latitude = latitude;
        }
        if let Some(longitude) = self.longitude {
            note.longitude = longitude;
        }
        if let Some(date) = self.date {
            note.date = date;
        }
        if let Some(image_uri) = self.image_uri {
            note.image_uri = image_uri;
        }
    }
}
