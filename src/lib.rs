pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod seed;
pub mod storage;
pub mod store;

pub use config::Config;
pub use entity::{NewNote, Note, NoteDraft, NotePatch};
pub use error::{NoteMapError, Result};
pub use seed::generate_seed_notes;
pub use storage::{FileBackend, KvBackend, MemoryBackend};
pub use store::{NoteStore, SeedOutcome};
