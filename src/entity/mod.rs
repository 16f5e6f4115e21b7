mod draft;
mod id;
mod note;

pub use draft::{
    format_note_date, validate_coordinates, NoteDraft, DATE_FORMAT, DEFAULT_DESCRIPTION,
};
pub use id::{new_note_id, sample_note_id};
pub use note::{NewNote, Note, NotePatch};
