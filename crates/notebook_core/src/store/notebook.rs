//! One named notebook: notes plus their tag index.
//!
//! # Responsibility
//! - Create, read, list, update and delete notes.
//! - Keep the tag index in lockstep with every note mutation.
//!
//! # Invariants
//! - A note id is under tag `t` iff that note's `tags` contains `t`.
//! - Failed operations leave notes and index untouched.
//! - Notes are only exposed as owned snapshots, never by `&mut`.
//! - Listing order is creation order.

use crate::index::reconcile::TagDiff;
use crate::index::tag_index::TagIndex;
use crate::model::note::{now_epoch_ms, CreatedNote, Note, NoteDraft, NoteId};
use crate::store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Tag name with the number of notes carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSummary {
    pub name: String,
    pub note_count: usize,
}

#[derive(Debug)]
struct NoteSlot {
    sequence: u64,
    note: Note,
}

/// Named collection of notes with a derived tag index.
#[derive(Debug)]
pub struct Notebook {
    name: String,
    notes: HashMap<NoteId, NoteSlot>,
    // Creation sequence → id, for deterministic listing.
    order: BTreeMap<u64, NoteId>,
    next_sequence: u64,
    tag_index: TagIndex,
    // Set once the notebook leaves the store; stale handles see it.
    removed: bool,
}

impl Notebook {
    /// Creates an empty notebook.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: HashMap::new(),
            order: BTreeMap::new(),
            next_sequence: 0,
            tag_index: TagIndex::new(),
            removed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// True once the owning store has deleted this notebook.
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    pub(crate) fn mark_removed(&mut self) {
        self.removed = true;
    }

    /// Read-only view of the derived tag index.
    pub fn tag_index(&self) -> &TagIndex {
        &self.tag_index
    }

    /// Creates one note and indexes each distinct tag once.
    ///
    /// # Errors
    /// - `RequiredFieldMissing("title")` when `title` is empty.
    /// - `RequiredFieldMissing("body")` when `body` is empty.
    pub fn create_note(&mut self, draft: NoteDraft) -> StoreResult<CreatedNote> {
        require_non_empty(&draft.title, "title")?;
        require_non_empty(&draft.body, "body")?;

        let note = Note::new(draft);
        let created = CreatedNote {
            id: note.id,
            created: note.created,
        };
        self.insert(note);
        Ok(created)
    }

    /// Returns the full note including its body.
    pub fn get_note(&self, id: NoteId) -> StoreResult<Note> {
        self.notes
            .get(&id)
            .map(|slot| slot.note.clone())
            .ok_or(StoreError::NoteNotFound(id))
    }

    /// Lists body-less note views in creation order.
    ///
    /// An empty `tag_filter` lists every note. Otherwise the result is the
    /// union of notes carrying any requested tag, each note at most once.
    pub fn list_notes(&self, tag_filter: &[String]) -> Vec<Note> {
        if tag_filter.is_empty() {
            return self
                .order
                .values()
                .filter_map(|id| self.notes.get(id))
                .map(|slot| slot.note.metadata())
                .collect();
        }

        let mut matched = BTreeSet::new();
        for tag in tag_filter {
            for id in self.tag_index.note_ids(tag) {
                if let Some(slot) = self.notes.get(id) {
                    matched.insert(slot.sequence);
                }
            }
        }

        matched
            .into_iter()
            .filter_map(|sequence| self.order.get(&sequence))
            .filter_map(|id| self.notes.get(id))
            .map(|slot| slot.note.metadata())
            .collect()
    }

    /// Replaces title, body and tags of an existing note.
    ///
    /// Only tags that differ between the stored and the new list touch the
    /// index. `created` is preserved; `last_modified` is set to now.
    pub fn update_note(&mut self, id: NoteId, draft: NoteDraft) -> StoreResult<Note> {
        let slot = self
            .notes
            .get_mut(&id)
            .ok_or(StoreError::NoteNotFound(id))?;

        let diff = TagDiff::between(&slot.note.tags, &draft.tags);
        self.tag_index.apply(&diff, id);

        let note = &mut slot.note;
        note.title = draft.title;
        note.body = draft.body;
        note.tags = draft.tags;
        note.last_modified = Some(now_epoch_ms());
        Ok(note.clone())
    }

    /// Removes a note and every index entry referencing it.
    ///
    /// Returns the note as it was, with `last_modified` set to the deletion
    /// time.
    pub fn delete_note(&mut self, id: NoteId) -> StoreResult<Note> {
        let slot = self.notes.remove(&id).ok_or(StoreError::NoteNotFound(id))?;
        self.order.remove(&slot.sequence);
        self.tag_index
            .apply(&TagDiff::removal_of(&slot.note.tags), id);

        let mut snapshot = slot.note;
        snapshot.last_modified = Some(now_epoch_ms());
        Ok(snapshot)
    }

    /// Lists tags present in this notebook, sorted by name.
    pub fn list_tags(&self) -> Vec<TagSummary> {
        self.tag_index
            .tags()
            .map(|(name, ids)| TagSummary {
                name: name.to_string(),
                note_count: ids.len(),
            })
            .collect()
    }

    fn insert(&mut self, note: Note) {
        let id = note.id;
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.tag_index.apply(&TagDiff::insertion_of(&note.tags), id);
        self.order.insert(sequence, id);
        self.notes.insert(id, NoteSlot { sequence, note });
    }
}

fn require_non_empty(value: &str, field: &'static str) -> StoreResult<()> {
    if value.is_empty() {
        return Err(StoreError::RequiredFieldMissing(field));
    }
    Ok(())
}
