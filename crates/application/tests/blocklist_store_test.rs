use mailguard_application::services::BlocklistStore;
use std::sync::Arc;

mod helpers;
use helpers::MockBlocklistSource;

#[tokio::test]
async fn test_load_parses_lines_lowercased() {
    let source = Arc::new(MockBlocklistSource::with_text(
        "# disposable providers\nMailinator.COM\ntrashmail.net\n\n  spaced.org  \n",
    ));
    let store = BlocklistStore::new(source);
    store.load().await;

    assert_eq!(store.len(), 3);
    assert!(store.contains("mailinator.com"));
    assert!(store.contains("trashmail.net"));
    assert!(store.contains("spaced.org"));
    assert!(!store.contains("example.com"));
}

#[tokio::test]
async fn test_unreadable_source_yields_empty_set() {
    let store = BlocklistStore::new(Arc::new(MockBlocklistSource::unreadable()));
    store.load().await;

    assert!(store.is_empty());
    assert!(!store.contains("anything.com"));
}

#[tokio::test]
async fn test_reload_swaps_snapshot() {
    let source = Arc::new(MockBlocklistSource::with_text("old.com\n"));
    let store = BlocklistStore::new(source.clone());
    store.load().await;

    assert!(store.contains("old.com"));

    source.set_text("new.com\n");
    store.reload().await;

    assert!(store.contains("new.com"));
    assert!(!store.contains("old.com"));
}

#[tokio::test]
async fn test_store_is_empty_before_first_load() {
    let store = BlocklistStore::new(Arc::new(MockBlocklistSource::with_text("a.com\n")));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_concurrent_lookups_during_reload() {
    let source = Arc::new(MockBlocklistSource::with_text("stable.com\n"));
    let store = Arc::new(BlocklistStore::new(source));
    store.load().await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..100 {
                let _ = store.contains("stable.com");
            }
        }));
    }
    store.reload().await;
    for handle in handles {
        handle.await.unwrap();
    }

    assert!(store.contains("stable.com"));
}
