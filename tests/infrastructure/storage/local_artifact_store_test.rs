use bytes::Bytes;

use echolingo::application::ports::{ArtifactStore, ArtifactStoreError};
use echolingo::domain::{ArtifactId, AudioCodec};
use echolingo::infrastructure::storage::LocalArtifactStore;

fn create_test_store() -> (tempfile::TempDir, LocalArtifactStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalArtifactStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_stored_audio_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();

    let content = Bytes::from_static(b"mp3 audio payload");
    let artifact = store.store(content.clone(), AudioCodec::Mp3).await.unwrap();

    let fetched = store.fetch(&artifact.id).await.unwrap();
    assert_eq!(fetched, content);
}

#[tokio::test]
async fn given_stored_audio_when_storing_then_id_and_url_carry_the_codec_extension() {
    let (_dir, store) = create_test_store();

    let artifact = store
        .store(Bytes::from_static(b"audio"), AudioCodec::Mp3)
        .await
        .unwrap();

    assert!(artifact.id.as_str().ends_with(".mp3"));
    assert_eq!(artifact.url, format!("/artifact/{}", artifact.id));
    assert_eq!(artifact.id.content_type(), "audio/mpeg");
}

#[tokio::test]
async fn given_concurrent_stores_when_storing_then_ids_never_collide() {
    let (_dir, store) = create_test_store();

    let mut artifacts = Vec::new();
    for i in 0..20 {
        let artifact = store
            .store(Bytes::from(format!("payload {}", i)), AudioCodec::Mp3)
            .await
            .unwrap();
        artifacts.push(artifact);
    }

    let mut ids: Vec<_> = artifacts.iter().map(|a| a.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}

#[tokio::test]
async fn given_unknown_id_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();

    let id = ArtifactId::parse("20260101_0000_deadbeef.mp3").unwrap();
    let result = store.fetch(&id).await;

    assert!(matches!(result, Err(ArtifactStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_stored_audio_when_deleting_then_fetch_returns_not_found() {
    let (_dir, store) = create_test_store();

    let artifact = store
        .store(Bytes::from_static(b"audio"), AudioCodec::Mp3)
        .await
        .unwrap();
    store.delete(&artifact.id).await.unwrap();

    let result = store.fetch(&artifact.id).await;
    assert!(matches!(result, Err(ArtifactStoreError::NotFound(_))));
}

#[test]
fn given_traversal_attempt_when_parsing_artifact_id_then_rejected() {
    assert!(ArtifactId::parse("../secrets.txt").is_none());
    assert!(ArtifactId::parse("a/b.mp3").is_none());
    assert!(ArtifactId::parse("").is_none());
    assert!(ArtifactId::parse("20260101_0000_deadbeef.mp3").is_some());
}
