use e2e_fixtures::adapters::users_sea::{self, UserCreate};
use e2e_fixtures::db::with_txn;
use e2e_fixtures::{FixtureError, InsertUserOptions, NotFoundKind, UserDataGenerator};
use test_support::{unique_email, unique_username};

use crate::support::harness::{count_users, test_harness};

/// Test: every created user is registered for cleanup right away
#[tokio::test]
async fn test_insert_new_user_registers_id() -> Result<(), FixtureError> {
    let harness = test_harness().await;

    let first = harness.insert_new_user(InsertUserOptions::default()).await?;
    let second = harness.insert_new_user(InsertUserOptions::default()).await?;

    assert!(harness.registry().contains(first.id));
    assert!(harness.registry().contains(second.id));
    assert_eq!(harness.registry().len(), 2);
    assert_ne!(first.username, second.username);
    assert_eq!(first.email, format!("{}@example.com", first.username));
    assert!(!first.name.is_empty());
    assert_eq!(count_users(&harness).await, 2);

    assert_eq!(harness.find_user(first.id).await?, first);
    Ok(())
}

/// Test: an explicit password is what gets hashed
#[tokio::test]
async fn test_explicit_password_is_stored() -> Result<(), FixtureError> {
    let harness = test_harness().await;

    let user = harness
        .insert_new_user(InsertUserOptions::with_password("secret123"))
        .await?;

    assert!(harness.verify_user_password(&user.username, "secret123").await?);
    assert!(!harness.verify_user_password(&user.username, &user.username).await?);
    Ok(())
}

/// Test: without a password the username doubles as one
#[tokio::test]
async fn test_default_password_is_username() -> Result<(), FixtureError> {
    let harness = test_harness().await;

    let user = harness.insert_new_user(InsertUserOptions::default()).await?;

    assert!(harness.verify_user_password(&user.username, &user.username).await?);
    assert!(!harness.verify_user_password(&user.username, "secret123").await?);
    Ok(())
}

/// Test: a uniqueness collision surfaces as the database error and registers nothing
#[tokio::test]
async fn test_unique_violation_propagates_unchanged() -> Result<(), FixtureError> {
    let harness = test_harness()
        .await
        .with_generator(UserDataGenerator::new(Some(9)));
    let predicted = UserDataGenerator::new(Some(9)).next_user();

    let squatter = UserCreate::new(predicted.username, unique_email("squatter"), "not-a-hash");
    let existing = with_txn(harness.db(), move |txn| {
        Box::pin(async move {
            Ok::<_, FixtureError>(users_sea::create_user_with_password(txn, squatter).await?)
        })
    })
    .await?;

    let err = harness
        .insert_new_user(InsertUserOptions::default())
        .await
        .expect_err("username collision must fail");

    assert!(matches!(err, FixtureError::Db(_)), "got {err:?}");
    assert!(err.is_unique_violation());
    assert!(harness.registry().is_empty());
    assert!(!harness.registry().contains(existing.id));
    assert_eq!(count_users(&harness).await, 1);
    Ok(())
}

/// Test: every stored user has a display name, defaulting to the username
#[tokio::test]
async fn test_user_name_is_always_stored() -> Result<(), FixtureError> {
    let harness = test_harness().await;
    let generated = harness.insert_new_user(InsertUserOptions::default()).await?;

    let username = unique_username("nameless");
    let dto = UserCreate::new(username.clone(), unique_email("nameless"), "not-a-hash");
    let direct = with_txn(harness.db(), move |txn| {
        Box::pin(async move {
            Ok::<_, FixtureError>(users_sea::create_user_with_password(txn, dto).await?)
        })
    })
    .await?;

    assert_eq!(direct.name, username);
    assert_eq!(harness.find_user(direct.id).await?.name, username);
    assert!(generated.name.contains(' '));
    assert_eq!(harness.find_user(generated.id).await?.name, generated.name);
    Ok(())
}

/// Test: find_user on a missing id is a hard NotFound
#[tokio::test]
async fn test_find_missing_user_is_not_found() {
    let harness = test_harness().await;

    let err = harness.find_user(424_242).await.unwrap_err();
    assert!(matches!(
        err,
        FixtureError::NotFound {
            kind: NotFoundKind::User,
            ..
        }
    ));
}

/// Test: delete_user_by_username removes the row and unregisters it
#[tokio::test]
async fn test_delete_user_by_username() -> Result<(), FixtureError> {
    let harness = test_harness().await;
    let user = harness.insert_new_user(InsertUserOptions::default()).await?;

    harness.delete_user_by_username(&user.username).await?;

    assert_eq!(count_users(&harness).await, 0);
    assert!(!harness.registry().contains(user.id));

    let again = harness.delete_user_by_username(&user.username).await;
    assert!(again.unwrap_err().is_not_found());
    Ok(())
}

/// Test: verify_user_password on an unknown username is NotFound
#[tokio::test]
async fn test_verify_password_unknown_user() {
    let harness = test_harness().await;

    let err = harness
        .verify_user_password("nobody_here", "whatever")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
