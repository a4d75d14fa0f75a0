//! Request routing onto the notebook store.
//!
//! # Responsibility
//! - Run each decoded request as exactly one store operation.
//! - Emit one log event per request carrying names, ids and counts only.
//!
//! # Invariants
//! - Never panics; every failure is returned as an `ApiResponse`.
//! - Note bodies and titles never reach the log.

use crate::api::request::{ApiRequest, CreateNoteRequest, GetNotebookRequest, UpdateNoteRequest};
use crate::api::response::{
    ApiResponse, CreateNoteResponse, CreateNotebookResponse, DeleteNoteResponse,
    DeleteNotebookResponse, GetNoteResponse, GetNotebookResponse, ListNotebooksResponse,
    ListTagsResponse, ResponseBody, UpdateNoteResponse,
};
use crate::api::ApiError;
use crate::logging::sanitize_message;
use crate::model::note::{NoteDraft, NoteId};
use crate::store::notebook_store::NotebookStore;
use log::{info, warn};
use uuid::Uuid;

const MAX_LOGGED_NAME_CHARS: usize = 64;

/// Serves one request against `store`.
///
/// Every outcome, success or failure, is returned as an [`ApiResponse`].
pub fn dispatch(store: &NotebookStore, request: ApiRequest) -> ApiResponse {
    let op = request.op_name();
    let notebook = sanitize_message(request_notebook(&request), MAX_LOGGED_NAME_CHARS);

    match serve(store, request) {
        Ok((body, detail)) => {
            info!("event={op} module=api status=ok notebook={notebook}{detail}");
            ApiResponse::ok(body)
        }
        Err(err) => {
            warn!(
                "event={op} module=api status=error kind={} notebook={notebook}",
                err.kind_label()
            );
            ApiResponse::from(&err)
        }
    }
}

/// Builds the response for a request line the transport could not decode.
pub fn reject_undecodable(details: impl Into<String>) -> ApiResponse {
    let err = ApiError::InvalidRequest(details.into());
    warn!(
        "event=decode_request module=api status=error kind={}",
        err.kind_label()
    );
    ApiResponse::from(&err)
}

// Success body plus metadata-only detail appended to the log event.
type Served = (ResponseBody, String);

fn serve(store: &NotebookStore, request: ApiRequest) -> Result<Served, ApiError> {
    match request {
        ApiRequest::CreateNotebook(req) => {
            store.create_notebook(&req.name)?;
            Ok((
                ResponseBody::CreateNotebook(CreateNotebookResponse { name: req.name }),
                String::new(),
            ))
        }
        ApiRequest::GetNotebook(GetNotebookRequest { name, tags }) => {
            let notes = store.list_notes(&name, &tags)?;
            let detail = format!(" filter_tags={} notes={}", tags.len(), notes.len());
            Ok((
                ResponseBody::GetNotebook(GetNotebookResponse { name, notes }),
                detail,
            ))
        }
        ApiRequest::DeleteNotebook(req) => {
            let deleted_notes = store.delete_notebook(&req.name)?;
            Ok((
                ResponseBody::DeleteNotebook(DeleteNotebookResponse {
                    name: req.name,
                    deleted_notes,
                }),
                format!(" deleted_notes={deleted_notes}"),
            ))
        }
        ApiRequest::ListNotebooks(_) => {
            let names = store.notebook_names()?;
            let detail = format!(" notebooks={}", names.len());
            Ok((
                ResponseBody::ListNotebooks(ListNotebooksResponse { names }),
                detail,
            ))
        }
        ApiRequest::CreateNote(CreateNoteRequest {
            notebook_name,
            title,
            body,
            tags,
        }) => {
            let created = store.create_note(&notebook_name, NoteDraft::new(title, body, tags))?;
            Ok((
                ResponseBody::CreateNote(CreateNoteResponse {
                    id: created.id,
                    created: created.created,
                }),
                format!(" note_id={}", created.id),
            ))
        }
        ApiRequest::GetNote(req) => {
            let id = parse_note_id(&req.id)?;
            let note = store.get_note(&req.notebook_name, id)?;
            Ok((
                ResponseBody::GetNote(GetNoteResponse { note }),
                format!(" note_id={id}"),
            ))
        }
        ApiRequest::UpdateNote(UpdateNoteRequest {
            notebook_name,
            id,
            title,
            body,
            tags,
        }) => {
            let id = parse_note_id(&id)?;
            let note = store.update_note(&notebook_name, id, NoteDraft::new(title, body, tags))?;
            Ok((
                ResponseBody::UpdateNote(UpdateNoteResponse { note }),
                format!(" note_id={id}"),
            ))
        }
        ApiRequest::DeleteNote(req) => {
            let id = parse_note_id(&req.id)?;
            let note = store.delete_note(&req.notebook_name, id)?;
            Ok((
                ResponseBody::DeleteNote(DeleteNoteResponse { note }),
                format!(" note_id={id}"),
            ))
        }
        ApiRequest::ListTags(req) => {
            let tags = store.list_tags(&req.notebook_name)?;
            let detail = format!(" tags={}", tags.len());
            Ok((
                ResponseBody::ListTags(ListTagsResponse {
                    notebook_name: req.notebook_name,
                    tags,
                }),
                detail,
            ))
        }
    }
}

fn request_notebook(request: &ApiRequest) -> &str {
    match request {
        ApiRequest::CreateNotebook(req) => &req.name,
        ApiRequest::GetNotebook(req) => &req.name,
        ApiRequest::DeleteNotebook(req) => &req.name,
        ApiRequest::ListNotebooks(_) => "-",
        ApiRequest::CreateNote(req) => &req.notebook_name,
        ApiRequest::GetNote(req) => &req.notebook_name,
        ApiRequest::UpdateNote(req) => &req.notebook_name,
        ApiRequest::DeleteNote(req) => &req.notebook_name,
        ApiRequest::ListTags(req) => &req.notebook_name,
    }
}

fn parse_note_id(value: &str) -> Result<NoteId, ApiError> {
    Uuid::parse_str(value.trim()).map_err(|_| ApiError::InvalidNoteId(value.to_string()))
}
