use e2e_fixtures::adapters::users_sea::{self, UserCreate};
use e2e_fixtures::db::with_txn;
use e2e_fixtures::{FixtureError, InsertUserOptions, LoginOptions};
use test_support::{unique_email, unique_username};

use crate::support::browser::RecordingContext;
use crate::support::harness::{count_sessions, count_users, test_harness};

/// Test: flushing an empty registry issues no delete and does not fail
#[tokio::test]
async fn test_empty_flush_is_a_noop() -> Result<(), FixtureError> {
    let harness = test_harness().await;

    let (a, b) = tokio::join!(harness.flush(), harness.flush());

    assert_eq!(a?, 0);
    assert_eq!(b?, 0);
    assert_eq!(harness.registry().batches_issued(), 0);
    Ok(())
}

/// Test: one batch delete removes every registered user and their sessions
#[tokio::test]
async fn test_flush_deletes_registered_users() -> Result<(), FixtureError> {
    let harness = test_harness().await;
    for _ in 0..3 {
        harness.insert_new_user(InsertUserOptions::default()).await?;
    }
    harness
        .login_page(&RecordingContext::new(), LoginOptions::default())
        .await?;
    assert_eq!(count_users(&harness).await, 4);
    assert_eq!(count_sessions(&harness).await, 1);

    let deleted = harness.flush().await?;

    assert_eq!(deleted, 4);
    assert_eq!(harness.registry().batches_issued(), 1);
    assert!(harness.registry().is_empty());
    assert_eq!(count_users(&harness).await, 0);
    assert_eq!(count_sessions(&harness).await, 0);

    assert_eq!(harness.flush().await?, 0);
    assert_eq!(harness.registry().batches_issued(), 1);
    Ok(())
}

/// Test: rows not created through the factory survive a flush
#[tokio::test]
async fn test_flush_leaves_unregistered_users() -> Result<(), FixtureError> {
    let harness = test_harness().await;
    let username = unique_username("outsider");
    let outsider = UserCreate::new(username.clone(), unique_email("outsider"), "not-a-hash");
    with_txn(harness.db(), move |txn| {
        Box::pin(async move {
            users_sea::create_user_with_password(txn, outsider).await?;
            Ok::<_, FixtureError>(())
        })
    })
    .await?;
    harness.insert_new_user(InsertUserOptions::default()).await?;

    assert_eq!(harness.flush().await?, 1);

    assert_eq!(count_users(&harness).await, 1);
    assert!(users_sea::find_user_by_username(harness.db(), &username)
        .await?
        .is_some());
    Ok(())
}
