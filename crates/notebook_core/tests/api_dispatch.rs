use notebook_core::api::ResponseBody;
use notebook_core::{dispatch, ApiRequest, ApiResponse, ApiStatus, NotebookStore};
use serde_json::{json, Value};

fn send(store: &NotebookStore, request: Value) -> ApiResponse {
    let request: ApiRequest = serde_json::from_value(request).expect("request should decode");
    dispatch(store, request)
}

fn send_json(store: &NotebookStore, request: Value) -> Value {
    serde_json::to_value(send(store, request)).expect("response should encode")
}

fn create_note_id(store: &NotebookStore, title: &str, tags: &[&str]) -> String {
    let response = send_json(
        store,
        json!({
            "op": "create_note",
            "notebook_name": "nb",
            "title": title,
            "body": format!("{title} body"),
            "tags": tags,
        }),
    );
    assert_eq!(response["status"], "ok");
    assert!(response["body"]["created"].as_i64().unwrap_or_default() > 0);
    response["body"]["id"]
        .as_str()
        .expect("id should be a string")
        .to_string()
}

#[test]
fn create_notebook_then_conflict() {
    let store = NotebookStore::new();

    let created = send_json(&store, json!({"op": "create_notebook", "name": "nb"}));
    assert_eq!(created, json!({"status": "ok", "body": {"name": "nb"}}));

    let conflict = send_json(&store, json!({"op": "create_notebook", "name": "nb"}));
    assert_eq!(conflict["status"], "conflict");
    assert!(conflict.get("body").is_none());
    assert!(conflict["error"]
        .as_str()
        .unwrap_or_default()
        .contains("already exists"));
}

#[test]
fn note_lifecycle_over_requests() {
    let store = NotebookStore::new();
    send(&store, json!({"op": "create_notebook", "name": "nb"}));
    let id = create_note_id(&store, "first", &["a", "b"]);

    let fetched = send_json(
        &store,
        json!({"op": "get_note", "notebook_name": "nb", "id": id}),
    );
    assert_eq!(fetched["status"], "ok");
    assert_eq!(fetched["body"]["note"]["body"], "first body");
    assert_eq!(fetched["body"]["note"]["tags"], json!(["a", "b"]));
    assert!(fetched["body"]["note"].get("last_modified").is_none());

    let updated = send_json(
        &store,
        json!({
            "op": "update_note",
            "notebook_name": "nb",
            "id": id,
            "title": "first v2",
            "body": "rewritten",
            "tags": ["b", "c"],
        }),
    );
    assert_eq!(updated["status"], "ok");
    assert_eq!(updated["body"]["note"]["title"], "first v2");
    assert_eq!(
        updated["body"]["note"]["created"],
        fetched["body"]["note"]["created"]
    );
    assert!(updated["body"]["note"]["last_modified"].is_i64());

    let tags = send_json(&store, json!({"op": "list_tags", "notebook_name": "nb"}));
    assert_eq!(
        tags["body"]["tags"],
        json!([
            {"name": "b", "note_count": 1},
            {"name": "c", "note_count": 1},
        ])
    );

    let deleted = send_json(
        &store,
        json!({"op": "delete_note", "notebook_name": "nb", "id": id}),
    );
    assert_eq!(deleted["status"], "ok");
    assert_eq!(deleted["body"]["note"]["body"], "rewritten");
    assert!(deleted["body"]["note"]["last_modified"].is_i64());

    let gone = send_json(
        &store,
        json!({"op": "get_note", "notebook_name": "nb", "id": id}),
    );
    assert_eq!(gone["status"], "client_error");
}

#[test]
fn get_notebook_filters_by_union_and_strips_bodies() {
    let store = NotebookStore::new();
    send(&store, json!({"op": "create_notebook", "name": "nb"}));
    let a = create_note_id(&store, "A", &["x"]);
    let b = create_note_id(&store, "B", &["y"]);

    let response = send(
        &store,
        json!({"op": "get_notebook", "name": "nb", "tags": ["x", "y"]}),
    );
    let Some(ResponseBody::GetNotebook(listing)) = response.body else {
        panic!("expected notebook listing");
    };
    assert_eq!(listing.name, "nb");
    let ids: Vec<String> = listing.notes.iter().map(|note| note.id.to_string()).collect();
    assert_eq!(ids, vec![a, b]);
    assert!(listing.notes.iter().all(|note| note.body.is_empty()));

    let unmatched = send_json(
        &store,
        json!({"op": "get_notebook", "name": "nb", "tags": ["z"]}),
    );
    assert_eq!(
        unmatched,
        json!({"status": "ok", "body": {"name": "nb", "notes": []}})
    );

    let unfiltered = send_json(&store, json!({"op": "get_notebook", "name": "nb"}));
    assert_eq!(unfiltered["body"]["notes"].as_array().map(Vec::len), Some(2));
    assert_eq!(unfiltered["body"]["notes"][0]["body"], "");
}

#[test]
fn missing_required_fields_are_client_errors() {
    let store = NotebookStore::new();
    send(&store, json!({"op": "create_notebook", "name": "nb"}));

    let no_title = send_json(
        &store,
        json!({"op": "create_note", "notebook_name": "nb", "body": "b"}),
    );
    assert_eq!(no_title["status"], "client_error");
    assert_eq!(no_title["error"], "title cannot be empty");

    let no_body = send_json(
        &store,
        json!({"op": "create_note", "notebook_name": "nb", "title": "t", "body": ""}),
    );
    assert_eq!(no_body["error"], "body cannot be empty");

    let listing = send_json(&store, json!({"op": "get_notebook", "name": "nb"}));
    assert_eq!(listing["body"]["notes"], json!([]));
}

#[test]
fn unknown_notebook_is_client_error() {
    let store = NotebookStore::new();
    let response = send(
        &store,
        json!({"op": "create_note", "notebook_name": "ghost", "title": "t", "body": "b"}),
    );
    assert_eq!(response.status, ApiStatus::ClientError);
    assert_eq!(
        response.error.as_deref(),
        Some("notebook with name `ghost` does not exist")
    );
}

#[test]
fn notebook_enumeration_and_deletion() {
    let store = NotebookStore::new();
    for name in ["b", "a"] {
        send(&store, json!({"op": "create_notebook", "name": name}));
    }
    let listed = send_json(&store, json!({"op": "list_notebooks"}));
    assert_eq!(listed["body"]["names"], json!(["a", "b"]));

    let deleted = send_json(&store, json!({"op": "delete_notebook", "name": "a"}));
    assert_eq!(
        deleted,
        json!({"status": "ok", "body": {"name": "a", "deleted_notes": 0}})
    );
    let again = send_json(&store, json!({"op": "delete_notebook", "name": "a"}));
    assert_eq!(again["status"], "client_error");
}

#[test]
fn unknown_op_does_not_decode() {
    let decoded = serde_json::from_value::<ApiRequest>(json!({"op": "drop_everything"}));
    assert!(decoded.is_err());
    let missing_field = serde_json::from_value::<ApiRequest>(json!({"op": "get_note", "id": "x"}));
    assert!(missing_field.is_err());
}
