//! Response envelopes produced by [`dispatch`](crate::api::dispatch).

use crate::model::note::{Note, NoteId, Timestamp};
use crate::store::notebook::TagSummary;
use serde::Serialize;

/// Protocol-level outcome class for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiStatus {
    Ok,
    /// Target already exists.
    Conflict,
    /// Request was well-formed transport but rejected by the store.
    ClientError,
    InternalError,
}

/// Envelope written back to the transport for every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponse {
    pub status: ApiStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<ResponseBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(body: ResponseBody) -> Self {
        Self {
            status: ApiStatus::Ok,
            body: Some(body),
            error: None,
        }
    }

    pub fn failure(status: ApiStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            body: None,
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == ApiStatus::Ok
    }
}

/// Success payloads, serialized without a variant tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    CreateNotebook(CreateNotebookResponse),
    GetNotebook(GetNotebookResponse),
    DeleteNotebook(DeleteNotebookResponse),
    ListNotebooks(ListNotebooksResponse),
    CreateNote(CreateNoteResponse),
    GetNote(GetNoteResponse),
    UpdateNote(UpdateNoteResponse),
    DeleteNote(DeleteNoteResponse),
    ListTags(ListTagsResponse),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateNotebookResponse {
    pub name: String,
}

/// Notes are metadata views with `body` cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetNotebookResponse {
    pub name: String,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteNotebookResponse {
    pub name: String,
    pub deleted_notes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListNotebooksResponse {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateNoteResponse {
    pub id: NoteId,
    pub created: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetNoteResponse {
    pub note: Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateNoteResponse {
    pub note: Note,
}

/// Snapshot of the note right before removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteNoteResponse {
    pub note: Note,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTagsResponse {
    pub notebook_name: String,
    pub tags: Vec<TagSummary>,
}
