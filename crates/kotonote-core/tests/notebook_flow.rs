//! End-to-end notebook flow over the file store
//!
//! Drives the session API the way the frontends do: populate, add,
//! delete, quiz draw, then reload in a fresh session and check the two
//! sides converged.

use kotonote_core::{AppConfig, Backend, JsonFileStore, NotebookSession};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::tempdir;

#[tokio::test]
async fn test_full_add_delete_reload_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sentences.json");

    // First session: build up a small notebook
    let mut session = NotebookSession::new(Box::new(JsonFileStore::new(&path)));
    session.entries().await.unwrap();

    session.add("駅はどこですか", "역이 어디예요").await.unwrap();
    session.add("これをください", "이거 주세요").await.unwrap();
    session.add("また明日", "내일 봐요").await.unwrap();
    assert_eq!(session.len(), 3);

    // Delete the middle row; neighbors keep their order
    let removed = session.remove_at(1).await.unwrap();
    assert_eq!(removed.source_text, "これをください");

    let entries = session.entries().await.unwrap();
    assert_eq!(entries[0].record.source_text, "駅はどこですか");
    assert_eq!(entries[1].record.source_text, "また明日");

    // Quiz draws always come from the surviving list
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let drawn = session.pick_random(&mut rng).unwrap();
        assert_ne!(drawn.record.source_text, "これをください");
    }

    // Second session over the same file sees identical ordered content
    let mut reloaded = NotebookSession::new(Box::new(JsonFileStore::new(&path)));
    let entries = reloaded.entries().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].record.target_text, "역이 어디예요");
    assert_eq!(entries[1].record.target_text, "내일 봐요");
}

#[tokio::test]
async fn test_config_selected_store_feeds_session() {
    let home = tempdir().unwrap();
    let config = AppConfig {
        backend: Backend::File { path: None },
        ..Default::default()
    };
    config.save(home.path()).unwrap();

    let store = AppConfig::load(home.path())
        .open_store(home.path())
        .await
        .unwrap();

    let mut session = NotebookSession::new(store);
    session.add("初めまして", "처음 뵙겠습니다").await.unwrap();

    // The default data file landed inside the home directory
    assert!(home.path().join("sentences.json").exists());

    session.invalidate();
    assert_eq!(session.entries().await.unwrap().len(), 1);
}
