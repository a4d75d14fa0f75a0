//! Note value type.
//!
//! # Responsibility
//! - Hold one note's content and metadata as an owned snapshot.
//! - Produce the body-less metadata view used by notebook listings.
//!
//! # Invariants
//! - `id` and `created` are fixed for the note lifetime.
//! - `last_modified` stays `None` until the first update or delete.
//! - Snapshots handed to callers are clones; editing one never reaches the
//!   owning notebook or its tag index.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier of one note inside its notebook.
pub type NoteId = Uuid;

/// Unix epoch milliseconds.
pub type Timestamp = i64;

/// One note as stored by a notebook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable id assigned at creation.
    pub id: NoteId,
    pub title: String,
    /// Cleared to an empty string in listing views.
    pub body: String,
    /// Tags in caller order. Duplicates are kept but index only once.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Creation time in epoch milliseconds.
    pub created: Timestamp,
    /// Time of the last update or delete, in epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,
}

impl Note {
    /// Builds a fresh note with a generated id and `created = now`.
    pub fn new(draft: NoteDraft) -> Self {
        Self::with_id(Uuid::new_v4(), draft, now_epoch_ms())
    }

    /// Builds a note with caller-provided identity and creation time.
    pub fn with_id(id: NoteId, draft: NoteDraft, created: Timestamp) -> Self {
        Self {
            id,
            title: draft.title,
            body: draft.body,
            tags: draft.tags,
            created,
            last_modified: None,
        }
    }

    /// Returns a copy of this note with `body` cleared.
    pub fn metadata(&self) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            body: String::new(),
            tags: self.tags.clone(),
            created: self.created,
            last_modified: self.last_modified,
        }
    }

    /// Returns whether the tag list carries `tag` (exact match).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|value| value == tag)
    }
}

/// Caller-supplied note content for create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            tags,
        }
    }
}

/// Identity returned by note creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedNote {
    pub id: NoteId,
    pub created: Timestamp,
}

/// Current wall-clock time in epoch milliseconds.
///
/// Clocks set before the epoch read as `0`.
pub fn now_epoch_ms() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
