//! In-memory notebook storage engine.
//!
//! # Responsibility
//! - Own notebooks, their notes, and each notebook's tag index.
//! - Return typed failures for every rejected operation.
//!
//! # Invariants
//! - Notes and tag index are mutated together under one notebook lock.
//! - The engine never logs, retries, or aborts; callers decide.

use crate::model::note::NoteId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod notebook;
pub mod notebook_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure classes surfaced to transport layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    RequiredFieldMissing,
    Internal,
}

/// Storage engine error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Notebook name is already taken.
    NotebookAlreadyExists(String),
    /// No notebook with this name.
    NotebookNotFound(String),
    /// No note with this id in the resolved notebook.
    NoteNotFound(NoteId),
    /// Required input field is empty; carries the field name.
    RequiredFieldMissing(&'static str),
    /// A lock was poisoned by a panicking holder.
    LockPoisoned(&'static str),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotebookAlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NotebookNotFound(_) | Self::NoteNotFound(_) => ErrorKind::NotFound,
            Self::RequiredFieldMissing(_) => ErrorKind::RequiredFieldMissing,
            Self::LockPoisoned(_) => ErrorKind::Internal,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotebookAlreadyExists(name) => {
                write!(f, "notebook with name `{name}` already exists")
            }
            Self::NotebookNotFound(name) => write!(f, "notebook with name `{name}` does not exist"),
            Self::NoteNotFound(id) => write!(f, "note with id `{id}` does not exist"),
            Self::RequiredFieldMissing(field) => write!(f, "{field} cannot be empty"),
            Self::LockPoisoned(scope) => write!(f, "{scope} lock poisoned"),
        }
    }
}

impl Error for StoreError {}
