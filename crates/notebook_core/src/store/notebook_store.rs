//! Process-wide notebook registry.
//!
//! # Responsibility
//! - Own notebooks keyed by name and resolve them for every operation.
//! - Serialize mutations per notebook while letting reads run in parallel.
//!
//! # Invariants
//! - Notebooks are only created by `create_notebook`, never implicitly.
//! - Each notebook sits behind its own `RwLock` guarding notes and index
//!   together; the name map has a separate `RwLock`.
//! - Deleting a notebook discards its notes and tag index with it.
//! - An operation on a deleted notebook fails with `NotebookNotFound`, even
//!   through a handle resolved before the deletion.

use crate::model::note::{CreatedNote, Note, NoteDraft, NoteId};
use crate::store::notebook::{Notebook, TagSummary};
use crate::store::{StoreError, StoreResult};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle to one notebook.
pub type NotebookHandle = Arc<RwLock<Notebook>>;

/// In-memory store of all notebooks.
///
/// Constructed once by the host and shared by reference or `Arc`.
#[derive(Debug, Default)]
pub struct NotebookStore {
    notebooks: RwLock<BTreeMap<String, NotebookHandle>>,
}

impl NotebookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty notebook under `name`.
    ///
    /// # Errors
    /// - `RequiredFieldMissing("name")` when `name` is empty.
    /// - `NotebookAlreadyExists` when `name` is taken.
    pub fn create_notebook(&self, name: &str) -> StoreResult<()> {
        if name.is_empty() {
            return Err(StoreError::RequiredFieldMissing("name"));
        }

        let mut notebooks = self.write_map()?;
        if notebooks.contains_key(name) {
            return Err(StoreError::NotebookAlreadyExists(name.to_string()));
        }
        notebooks.insert(
            name.to_string(),
            Arc::new(RwLock::new(Notebook::new(name))),
        );
        Ok(())
    }

    /// Returns the shared handle for `name`.
    pub fn get_notebook(&self, name: &str) -> StoreResult<NotebookHandle> {
        self.read_map()?
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotebookNotFound(name.to_string()))
    }

    /// Removes a notebook with all of its notes.
    ///
    /// Returns the number of notes discarded.
    pub fn delete_notebook(&self, name: &str) -> StoreResult<usize> {
        let mut notebooks = self.write_map()?;
        let handle = notebooks
            .get(name)
            .ok_or_else(|| StoreError::NotebookNotFound(name.to_string()))?;

        // Map lock held: no new operation can resolve this handle.
        let discarded = {
            let mut notebook = handle
                .write()
                .map_err(|_| StoreError::LockPoisoned("notebook"))?;
            notebook.mark_removed();
            notebook.len()
        };
        notebooks.remove(name);
        Ok(discarded)
    }

    /// Sorted names of all notebooks.
    pub fn notebook_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.read_map()?.keys().cloned().collect())
    }

    pub fn create_note(&self, notebook_name: &str, draft: NoteDraft) -> StoreResult<CreatedNote> {
        self.write_notebook(notebook_name, |notebook| notebook.create_note(draft))
    }

    pub fn get_note(&self, notebook_name: &str, id: NoteId) -> StoreResult<Note> {
        self.read_notebook(notebook_name, |notebook| notebook.get_note(id))
    }

    pub fn list_notes(&self, notebook_name: &str, tag_filter: &[String]) -> StoreResult<Vec<Note>> {
        self.read_notebook(notebook_name, |notebook| {
            Ok(notebook.list_notes(tag_filter))
        })
    }

    pub fn update_note(
        &self,
        notebook_name: &str,
        id: NoteId,
        draft: NoteDraft,
    ) -> StoreResult<Note> {
        self.write_notebook(notebook_name, |notebook| notebook.update_note(id, draft))
    }

    pub fn delete_note(&self, notebook_name: &str, id: NoteId) -> StoreResult<Note> {
        self.write_notebook(notebook_name, |notebook| notebook.delete_note(id))
    }

    pub fn list_tags(&self, notebook_name: &str) -> StoreResult<Vec<TagSummary>> {
        self.read_notebook(notebook_name, |notebook| Ok(notebook.list_tags()))
    }

    /// Runs `op` under the notebook's shared lock.
    pub fn read_notebook<T>(
        &self,
        name: &str,
        op: impl FnOnce(&Notebook) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let handle = self.get_notebook(name)?;
        let notebook = handle
            .read()
            .map_err(|_| StoreError::LockPoisoned("notebook"))?;
        if notebook.is_removed() {
            return Err(StoreError::NotebookNotFound(name.to_string()));
        }
        op(&notebook)
    }

    /// Runs `op` under the notebook's exclusive lock.
    fn write_notebook<T>(
        &self,
        name: &str,
        op: impl FnOnce(&mut Notebook) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let handle = self.get_notebook(name)?;
        let mut notebook = handle
            .write()
            .map_err(|_| StoreError::LockPoisoned("notebook"))?;
        if notebook.is_removed() {
            return Err(StoreError::NotebookNotFound(name.to_string()));
        }
        op(&mut notebook)
    }

    fn read_map(&self) -> StoreResult<RwLockReadGuard<'_, BTreeMap<String, NotebookHandle>>> {
        self.notebooks
            .read()
            .map_err(|_| StoreError::LockPoisoned("notebook map"))
    }

    fn write_map(&self) -> StoreResult<RwLockWriteGuard<'_, BTreeMap<String, NotebookHandle>>> {
        self.notebooks
            .write()
            .map_err(|_| StoreError::LockPoisoned("notebook map"))
    }
}
