//! Backing key-value stores for note persistence.
//!
//! The note store only ever talks to a [`KvBackend`]: string keys, string
//! values, whole-value replacement. [`MemoryBackend`] serves tests and
//! embedding hosts; [`FileBackend`] keeps one file per key on local disk.

mod backend;
mod file;
mod memory;

pub use backend::KvBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;
