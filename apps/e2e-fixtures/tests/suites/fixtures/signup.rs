use e2e_fixtures::{FixtureError, SIGNUP_PASSWORD_PHRASE};

use crate::support::harness::{count_signup_passwords, test_harness};

/// Test: setting the signup password twice leaves exactly one matching record
#[tokio::test]
async fn test_set_signup_password_is_idempotent() -> Result<(), FixtureError> {
    let harness = test_harness().await;

    harness.set_signup_password().await?;
    harness.set_signup_password().await?;

    assert_eq!(count_signup_passwords(&harness).await, 1);
    assert!(harness.verify_signup_password(SIGNUP_PASSWORD_PHRASE).await?);
    assert!(!harness.verify_signup_password("horses are lame").await?);
    Ok(())
}

/// Test: no gate record means nothing verifies
#[tokio::test]
async fn test_verify_without_gate() -> Result<(), FixtureError> {
    let harness = test_harness().await;

    assert_eq!(count_signup_passwords(&harness).await, 0);
    assert!(!harness.verify_signup_password(SIGNUP_PASSWORD_PHRASE).await?);
    Ok(())
}
