use e2e_fixtures::adapters::sessions_sea;
use e2e_fixtures::{
    CookieSameSite, FixtureError, InsertUserOptions, LoginOptions, NotFoundKind, SESSION_TTL,
};
use time::{Duration, OffsetDateTime};

use crate::support::browser::RecordingContext;
use crate::support::harness::{count_sessions, count_users, harness_with, test_config, test_harness};

/// Test: login without a user creates one user, one session and a cookie that decodes to it
#[tokio::test]
async fn test_login_creates_user_session_and_cookie() -> Result<(), FixtureError> {
    let harness = test_harness().await;
    let context = RecordingContext::new();

    let user = harness.login_page(&context, LoginOptions::default()).await?;

    assert_eq!(count_users(&harness).await, 1);
    assert_eq!(count_sessions(&harness).await, 1);
    assert!(harness.registry().contains(user.id));

    let cookie = context.single_cookie();
    assert_eq!(cookie.name, "_session");
    assert_eq!(cookie.url, "http://localhost:3000/");
    assert_eq!(cookie.same_site, CookieSameSite::Lax);
    assert!(cookie.http_only);
    assert!(!cookie.secure);

    let decoded = harness.codec().read_session(&cookie.value)?;
    let session_id = decoded.session_id().expect("session id in cookie");
    let session = sessions_sea::find_session_by_id(harness.db(), session_id)
        .await?
        .expect("session row");
    assert_eq!(session.user_id, user.id);

    let expected = OffsetDateTime::now_utc() + SESSION_TTL;
    assert!((session.expiration_date - expected).abs() < Duration::minutes(1));
    Ok(())
}

/// Test: login as an existing user reuses it and mints a fresh session each time
#[tokio::test]
async fn test_login_as_existing_user() -> Result<(), FixtureError> {
    let harness = test_harness().await;
    let existing = harness.insert_new_user(InsertUserOptions::default()).await?;

    let first = RecordingContext::new();
    let second = RecordingContext::new();
    let user = harness
        .login_page(&first, LoginOptions::as_user(existing.id))
        .await?;
    harness
        .login_page(&second, LoginOptions::as_user(existing.id))
        .await?;

    assert_eq!(user, existing);
    assert_eq!(count_users(&harness).await, 1);
    assert_eq!(
        sessions_sea::count_sessions_for_user(harness.db(), existing.id).await?,
        2
    );
    assert_ne!(first.single_cookie().value, second.single_cookie().value);
    Ok(())
}

/// Test: an unknown user id is NotFound and leaves no session or cookie behind
#[tokio::test]
async fn test_login_unknown_user_is_not_found() {
    let harness = test_harness().await;
    let context = RecordingContext::new();

    let err = harness
        .login_page(&context, LoginOptions::as_user(987_654))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FixtureError::NotFound {
            kind: NotFoundKind::User,
            ..
        }
    ));
    assert_eq!(count_sessions(&harness).await, 0);
    assert_eq!(count_users(&harness).await, 0);
    assert!(context.cookies().is_empty());
}

/// Test: production config marks the cookie secure and scopes it to the configured port
#[tokio::test]
async fn test_login_in_production_sets_secure() -> Result<(), FixtureError> {
    let harness = harness_with(test_config().with_production(true).with_port(4100)).await;
    let context = RecordingContext::new();

    harness.login_page(&context, LoginOptions::default()).await?;

    let cookie = context.single_cookie();
    assert!(cookie.secure);
    assert_eq!(cookie.url, "http://localhost:4100/");
    Ok(())
}

/// Test: an explicit base URL overrides the configured one
#[tokio::test]
async fn test_login_with_explicit_base_url() -> Result<(), FixtureError> {
    let harness = harness_with(test_config().with_base_url("http://app.internal:8080/")).await;
    let context = RecordingContext::new();

    harness
        .login_page(
            &context,
            LoginOptions::default().with_base_url("http://127.0.0.1:5173/"),
        )
        .await?;

    assert_eq!(context.single_cookie().url, "http://127.0.0.1:5173/");
    Ok(())
}

/// Test: a driver refusing the cookie fails the login
#[tokio::test]
async fn test_login_surfaces_driver_errors() {
    let harness = test_harness().await;

    let err = harness
        .login_page(&RecordingContext::rejecting(), LoginOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FixtureError::Browser(_)), "got {err:?}");
}
