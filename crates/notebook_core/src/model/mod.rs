//! Note domain model.
//!
//! # Responsibility
//! - Define the note value shared by notebooks, the tag index and the API.
//! - Provide the epoch-millisecond clock used for note timestamps.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - `created` is assigned once and never changes.

pub mod note;
