use notebook_core::{NoteDraft, NotebookStore, StoreError};
use std::collections::BTreeSet;
use std::sync::{Arc, Barrier};
use std::thread;

const WRITERS: usize = 4;
const NOTES_PER_WRITER: usize = 50;

#[test]
fn concurrent_writers_keep_index_consistent() {
    let store = Arc::new(NotebookStore::new());
    store.create_notebook("shared").unwrap();

    let writers: Vec<_> = (0..WRITERS)
        .map(|writer| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let own_tag = format!("writer-{writer}");
                for idx in 0..NOTES_PER_WRITER {
                    let created = store
                        .create_note(
                            "shared",
                            NoteDraft::new(
                                format!("note {idx}"),
                                "body",
                                vec!["common".to_string(), own_tag.clone()],
                            ),
                        )
                        .unwrap();
                    if idx % 2 == 0 {
                        store
                            .update_note(
                                "shared",
                                created.id,
                                NoteDraft::new("edited", "body", vec![own_tag.clone()]),
                            )
                            .unwrap();
                    }
                    if idx % 5 == 0 {
                        store.delete_note("shared", created.id).unwrap();
                    }
                }
            })
        })
        .collect();

    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..200 {
                let ids: Vec<_> = store
                    .list_notes("shared", &["common".to_string()])
                    .unwrap()
                    .into_iter()
                    .map(|note| note.id)
                    .collect();
                let unique: BTreeSet<_> = ids.iter().copied().collect();
                assert_eq!(unique.len(), ids.len());
            }
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    reader.join().unwrap();

    // Per writer: 10 of 50 deleted; 20 surviving odd indices keep `common`.
    let notes = store.list_notes("shared", &[]).unwrap();
    assert_eq!(notes.len(), WRITERS * 40);
    let common = store.list_notes("shared", &["common".to_string()]).unwrap();
    assert_eq!(common.len(), WRITERS * 20);

    store
        .read_notebook("shared", |notebook| {
            for note in notebook.list_notes(&[]) {
                for tag in &note.tags {
                    assert!(notebook.tag_index().contains(tag, note.id));
                }
            }
            let indexed: usize = notebook.tag_index().tags().map(|(_, ids)| ids.len()).sum();
            let tagged: usize = notebook
                .list_notes(&[])
                .iter()
                .map(|note| note.tags.iter().collect::<BTreeSet<_>>().len())
                .sum();
            assert_eq!(indexed, tagged);
            Ok(())
        })
        .unwrap();
}

#[test]
fn delete_notebook_counts_every_acknowledged_create() {
    for round in 0..200 {
        let store = Arc::new(NotebookStore::new());
        store.create_notebook("nb").unwrap();
        let start = Arc::new(Barrier::new(WRITERS + 1));

        let writers: Vec<_> = (0..WRITERS)
            .map(|_| {
                let store = Arc::clone(&store);
                let start = Arc::clone(&start);
                thread::spawn(move || {
                    start.wait();
                    let mut acknowledged = 0;
                    for idx in 0..NOTES_PER_WRITER {
                        match store.create_note(
                            "nb",
                            NoteDraft::new(format!("note {idx}"), "body", Vec::new()),
                        ) {
                            Ok(_) => acknowledged += 1,
                            Err(err) => {
                                assert_eq!(err, StoreError::NotebookNotFound("nb".to_string()));
                                break;
                            }
                        }
                    }
                    acknowledged
                })
            })
            .collect();

        start.wait();
        let discarded = store.delete_notebook("nb").unwrap();
        let acknowledged: usize = writers
            .into_iter()
            .map(|writer| writer.join().unwrap())
            .sum();

        assert_eq!(acknowledged, discarded, "round {round}");
        assert!(store.get_notebook("nb").is_err());
    }
}
