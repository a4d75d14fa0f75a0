//! Tag → note-id secondary index.
//!
//! # Responsibility
//! - Map each tag name to the ids of notes currently carrying it.
//! - Apply reconciliation diffs produced by [`TagDiff`].
//!
//! # Invariants
//! - Ids under one tag are unique and kept in insertion order.
//! - A tag entry with no ids is removed, never left empty.
//! - The index stores ids only; the note's own `tags` field is authoritative.

use crate::index::reconcile::TagDiff;
use crate::model::note::NoteId;
use std::collections::BTreeMap;

/// Derived tag index owned by one notebook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    entries: BTreeMap<String, Vec<NoteId>>,
}

impl TagIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `id` under `tag` unless already present.
    ///
    /// Returns `true` when the index changed.
    pub fn add_note_id(&mut self, tag: &str, id: NoteId) -> bool {
        let ids = self.entries.entry(tag.to_string()).or_default();
        if ids.contains(&id) {
            return false;
        }
        ids.push(id);
        true
    }

    /// Removes `id` from `tag`, dropping the entry once it is empty.
    ///
    /// Returns `true` when the index changed.
    pub fn remove_note_id(&mut self, tag: &str, id: NoteId) -> bool {
        let Some(ids) = self.entries.get_mut(tag) else {
            return false;
        };
        let Some(position) = ids.iter().position(|current| *current == id) else {
            return false;
        };
        ids.remove(position);
        if ids.is_empty() {
            self.entries.remove(tag);
        }
        true
    }

    /// Applies `diff` for note `id`: removals first, then additions.
    pub fn apply(&mut self, diff: &TagDiff, id: NoteId) {
        for tag in &diff.remove {
            self.remove_note_id(tag, id);
        }
        for tag in &diff.add {
            self.add_note_id(tag, id);
        }
    }

    /// Returns ids under `tag`, or an empty slice when the tag is unknown.
    pub fn note_ids(&self, tag: &str) -> &[NoteId] {
        self.entries.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, tag: &str, id: NoteId) -> bool {
        self.note_ids(tag).contains(&id)
    }

    /// Iterates `(tag, ids)` pairs sorted by tag name.
    pub fn tags(&self) -> impl Iterator<Item = (&str, &[NoteId])> + '_ {
        self.entries
            .iter()
            .map(|(tag, ids)| (tag.as_str(), ids.as_slice()))
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
