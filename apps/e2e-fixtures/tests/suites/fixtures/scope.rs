use std::panic::AssertUnwindSafe;

use e2e_fixtures::{FixtureError, InsertUserOptions, LoginOptions};
use futures::FutureExt;

use crate::support::browser::RecordingContext;
use crate::support::harness::{count_sessions, count_users, test_harness};

/// Test: a passing scope returns its value and leaves no users behind
#[tokio::test]
async fn test_scope_flushes_after_success() -> Result<(), FixtureError> {
    let harness = test_harness().await;

    let user_id = harness
        .scope(|h| async move {
            let user = h
                .login_page(&RecordingContext::new(), LoginOptions::default())
                .await?;
            assert!(h.registry().contains(user.id));
            assert_eq!(count_users(h).await, 1);
            Ok::<_, FixtureError>(user.id)
        })
        .await?;

    assert!(!harness.registry().contains(user_id));
    assert_eq!(count_users(&harness).await, 0);
    assert_eq!(count_sessions(&harness).await, 0);
    Ok(())
}

/// Test: a failing scope still flushes and returns the body's error
#[tokio::test]
async fn test_scope_flushes_after_error() {
    let harness = test_harness().await;

    let err = harness
        .scope(|h| async move {
            h.insert_new_user(InsertUserOptions::default()).await?;
            h.insert_new_user(InsertUserOptions::default()).await?;
            Err::<(), _>(FixtureError::config("assertion in test body failed"))
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("assertion in test body failed"));
    assert!(harness.registry().is_empty());
    assert_eq!(count_users(&harness).await, 0);
}

/// Test: a panicking scope flushes before the panic continues
#[tokio::test]
async fn test_scope_flushes_after_panic() {
    let harness = test_harness().await;

    let outcome = AssertUnwindSafe(harness.scope(|h| async move {
        let user = h.insert_new_user(InsertUserOptions::default()).await?;
        assert!(user.id < 0, "test body panicked");
        Ok::<_, FixtureError>(())
    }))
    .catch_unwind()
    .await;

    let payload = outcome.expect_err("panic must propagate out of scope");
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    assert!(message.contains("test body panicked"), "{message}");
    assert!(harness.registry().is_empty());
    assert_eq!(count_users(&harness).await, 0);
}

/// Test: consecutive scopes on one harness each start clean
#[tokio::test]
async fn test_consecutive_scopes_are_isolated() -> Result<(), FixtureError> {
    let harness = test_harness().await;

    for _ in 0..2 {
        harness
            .scope(|h| async move {
                assert!(h.registry().is_empty());
                assert_eq!(count_users(h).await, 0);
                h.insert_new_user(InsertUserOptions::default()).await?;
                Ok::<_, FixtureError>(())
            })
            .await?;
    }

    assert_eq!(harness.registry().batches_issued(), 2);
    Ok(())
}
