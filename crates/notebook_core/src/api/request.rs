//! Request envelopes accepted by [`dispatch`](crate::api::dispatch).
//!
//! On the wire every request is one JSON object whose `op` field selects
//! the operation, for example
//! `{"op":"create_note","notebook_name":"nb","title":"t","body":"b","tags":["x"]}`.

use serde::{Deserialize, Serialize};

/// One transport request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ApiRequest {
    CreateNotebook(CreateNotebookRequest),
    GetNotebook(GetNotebookRequest),
    DeleteNotebook(DeleteNotebookRequest),
    ListNotebooks(ListNotebooksRequest),
    CreateNote(CreateNoteRequest),
    GetNote(GetNoteRequest),
    UpdateNote(UpdateNoteRequest),
    DeleteNote(DeleteNoteRequest),
    ListTags(ListTagsRequest),
}

impl ApiRequest {
    /// Stable operation name used in log events.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::CreateNotebook(_) => "create_notebook",
            Self::GetNotebook(_) => "get_notebook",
            Self::DeleteNotebook(_) => "delete_notebook",
            Self::ListNotebooks(_) => "list_notebooks",
            Self::CreateNote(_) => "create_note",
            Self::GetNote(_) => "get_note",
            Self::UpdateNote(_) => "update_note",
            Self::DeleteNote(_) => "delete_note",
            Self::ListTags(_) => "list_tags",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNotebookRequest {
    pub name: String,
}

/// Lists a notebook's notes; `tags` filters by union when non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetNotebookRequest {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteNotebookRequest {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListNotebooksRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNoteRequest {
    pub notebook_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Note ids travel as strings and are parsed during dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetNoteRequest {
    pub notebook_name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNoteRequest {
    pub notebook_name: String,
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteNoteRequest {
    pub notebook_name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListTagsRequest {
    pub notebook_name: String,
}
