mod helpers;

use std::sync::Arc;

use stowage_core::{CandidateFile, UploadPolicy};
use stowage_storage::{LocalGateway, StorageGateway};
use stowage_uploader::UploadSession;

use helpers::ScriptedGateway;

fn jpeg(name: &str, size: usize) -> CandidateFile {
    CandidateFile::new(name, "image/jpeg", vec![0u8; size])
}

fn jpeg_session(gateway: Arc<ScriptedGateway>) -> UploadSession {
    let policy = UploadPolicy::new(1000, vec!["image/jpeg".to_string()]);
    UploadSession::new(policy, gateway)
}

#[tokio::test]
async fn test_two_valid_files_upload_in_input_order() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut session = jpeg_session(gateway.clone());

    let report = session
        .submit_batch(vec![jpeg("first.jpg", 100), jpeg("second.jpg", 200)])
        .await;

    assert_eq!(report.uploaded, 2);
    assert_eq!(report.failed, 0);
    assert!(session.errors().is_empty());
    assert!(!session.is_uploading());

    // Gateway invoked exactly twice, in input order.
    let keys = gateway.put_keys();
    assert_eq!(keys.len(), 2);
    assert!(keys[0].ends_with("-first.jpg"));
    assert!(keys[1].ends_with("-second.jpg"));

    let names: Vec<_> = session.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["first.jpg", "second.jpg"]);
}

#[tokio::test]
async fn test_uploaded_file_carries_key_url_and_size() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut session = jpeg_session(gateway.clone());

    session.submit_batch(vec![jpeg("photo.jpg", 123)]).await;

    let uploaded = &session.files()[0];
    assert_eq!(uploaded.id, gateway.put_keys()[0]);
    assert_eq!(uploaded.url, format!("http://storage.test/{}", uploaded.id));
    assert_eq!(uploaded.size_bytes, 123);
    assert!(gateway.object(&uploaded.id).is_some());
}

#[tokio::test]
async fn test_rejected_file_is_skipped_but_batch_continues() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut session = jpeg_session(gateway.clone());

    let batch = vec![
        jpeg("a.jpg", 100),
        CandidateFile::new("b.gif", "image/gif", vec![0u8; 100]),
        jpeg("c.jpg", 100),
    ];
    let report = session.submit_batch(batch).await;

    assert_eq!(report.uploaded, 2);
    assert_eq!(report.failed, 1);

    let names: Vec<_> = session.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a.jpg", "c.jpg"]);

    assert_eq!(session.errors().len(), 1);
    assert_eq!(session.errors()[0].file.name, "b.gif");

    // The rejected file never reached the gateway.
    assert_eq!(gateway.put_keys().len(), 2);
}

#[tokio::test]
async fn test_accepted_files_accumulate_across_batches() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut session = jpeg_session(gateway.clone());

    session.submit_batch(vec![jpeg("one.jpg", 10)]).await;
    session.submit_batch(vec![jpeg("two.jpg", 10)]).await;

    let names: Vec<_> = session.files().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["one.jpg", "two.jpg"]);
}

#[tokio::test]
async fn test_error_collection_reflects_only_the_latest_batch() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut session = jpeg_session(gateway.clone());

    session
        .submit_batch(vec![CandidateFile::new("bad.gif", "image/gif", vec![0u8; 10])])
        .await;
    assert_eq!(session.errors().len(), 1);

    session.submit_batch(vec![jpeg("good.jpg", 10)]).await;
    assert!(session.errors().is_empty());
    assert_eq!(session.files().len(), 1);
}

#[tokio::test]
async fn test_progress_reports_start_then_completion() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut session = jpeg_session(gateway.clone());

    let mut events: Vec<(String, u8)> = Vec::new();
    session
        .submit_batch_with_progress(
            vec![jpeg("a.jpg", 10), jpeg("b.jpg", 10)],
            |file, percent| events.push((file.name.clone(), percent)),
        )
        .await;

    assert_eq!(
        events,
        vec![
            ("a.jpg".to_string(), 0),
            ("a.jpg".to_string(), 100),
            ("b.jpg".to_string(), 0),
            ("b.jpg".to_string(), 100),
        ]
    );
}

#[tokio::test]
async fn test_no_progress_for_rejected_files() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut session = jpeg_session(gateway.clone());

    let mut events: Vec<(String, u8)> = Vec::new();
    session
        .submit_batch_with_progress(
            vec![CandidateFile::new("bad.gif", "image/gif", vec![0u8; 10])],
            |file, percent| events.push((file.name.clone(), percent)),
        )
        .await;

    assert!(events.is_empty());
}

#[tokio::test]
async fn test_same_named_files_get_distinct_keys() {
    let gateway = Arc::new(ScriptedGateway::new());
    let mut session = jpeg_session(gateway.clone());

    session
        .submit_batch(vec![jpeg("photo.jpg", 10), jpeg("photo.jpg", 10)])
        .await;

    assert_eq!(session.files().len(), 2);
    assert_ne!(session.files()[0].id, session.files()[1].id);
    assert_eq!(gateway.object_count(), 2);
}

#[tokio::test]
async fn test_end_to_end_with_local_gateway() {
    let dir = tempfile::tempdir().unwrap();
    let gateway = Arc::new(
        LocalGateway::new(dir.path(), "http://localhost:3000/media".to_string())
            .await
            .unwrap(),
    );

    let source = dir.path().join("note.txt");
    tokio::fs::write(&source, b"stowed content").await.unwrap();
    let candidate = CandidateFile::from_path(&source).await.unwrap();

    let mut session = UploadSession::new(UploadPolicy::any_type(1024), gateway.clone());
    let report = session.submit_batch(vec![candidate]).await;

    assert_eq!(report.uploaded, 1);
    let uploaded = &session.files()[0];
    assert_eq!(uploaded.name, "note.txt");
    assert!(uploaded.url.starts_with("http://localhost:3000/media/"));

    let stored = gateway.download(&uploaded.id).await.unwrap();
    assert_eq!(&stored[..], b"stowed content");
}
