//! In-memory notebook store with tag indexing.
//! This crate is the single source of truth for notebook, note and tag
//! index invariants.

pub mod api;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;

pub use api::{dispatch, reject_undecodable, ApiError, ApiRequest, ApiResponse, ApiStatus};
pub use index::reconcile::TagDiff;
pub use index::tag_index::TagIndex;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{CreatedNote, Note, NoteDraft, NoteId, Timestamp};
pub use store::notebook::{Notebook, TagSummary};
pub use store::notebook_store::{NotebookHandle, NotebookStore};
pub use store::{ErrorKind, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
