//! Tag indexing and reconciliation.
//!
//! # Responsibility
//! - Keep the derived tag → note-id index for one notebook.
//! - Compute minimal tag diffs so updates touch only changed entries.

pub mod reconcile;
pub mod tag_index;
