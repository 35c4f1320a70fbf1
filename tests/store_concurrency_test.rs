//! Concurrent access to the feedback store

mod common;

use common::create_test_store;
use feedback_monitor_core::{FeedbackSubmission, FeedbackType};
use std::collections::HashSet;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_collects_lose_nothing() {
    let (_dir, store) = create_test_store();
    let store = Arc::new(store);

    let mut handles = Vec::new();
    for i in 0..32 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            let kind = if i % 2 == 0 { "bug_report" } else { "feature_request" };
            store
                .collect(FeedbackSubmission::new(
                    format!("user{}", i),
                    kind,
                    format!("Concurrent feedback number {}", i),
                ))
                .await
                .expect("collect should succeed")
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let record = handle.await.expect("task panicked");
        assert!(ids.insert(record.feedback_id));
    }

    let all = store.list(None).await;
    assert_eq!(all.len(), 32);
    assert_eq!(
        all.iter().map(|r| r.feedback_id).collect::<HashSet<_>>(),
        ids
    );
    assert_eq!(store.list(Some(FeedbackType::BugReport)).await.len(), 16);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reads_during_writes_see_whole_collections() {
    let (_dir, store) = create_test_store();
    let store = Arc::new(store);

    let writer = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            for i in 0..20 {
                store
                    .collect(FeedbackSubmission::new(
                        "writer",
                        "general_feedback",
                        format!("Sequential feedback {}", i),
                    ))
                    .await
                    .expect("collect should succeed");
            }
        })
    };

    let reader = {
        let store = Arc::clone(&store);
        tokio::spawn(async move {
            let mut last = 0;
            for _ in 0..50 {
                let len = store.list(None).await.len();
                assert!(len >= last, "store shrank from {} to {}", last, len);
                last = len;
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
    assert_eq!(store.len().await, 20);
}
