use backend::auth::TokenKind;
use backend::DomainError;

use crate::support::build_test_harness;
use crate::support::factory::{claims_for, PASSWORD};

#[tokio::test]
async fn login_issues_a_pair_for_the_stored_identity() {
    let harness = build_test_harness().await;
    let profile = harness.register("login").await;

    let pair = harness
        .state
        .auth
        .login(&profile.username, PASSWORD)
        .await
        .unwrap();

    assert_eq!(
        harness.state.tokens.verify(&pair.access_token, TokenKind::Access),
        Ok(claims_for(&profile))
    );
    assert_eq!(
        harness.state.tokens.verify(&pair.refresh_token, TokenKind::Refresh),
        Ok(claims_for(&profile))
    );
}

#[tokio::test]
async fn unknown_user_is_not_found() {
    let harness = build_test_harness().await;

    assert_eq!(
        harness.state.auth.login("nobody", PASSWORD).await,
        Err(DomainError::UserNotFound)
    );
}

#[tokio::test]
async fn wrong_password_is_invalid_credentials() {
    let harness = build_test_harness().await;
    let profile = harness.register("login").await;

    assert_eq!(
        harness.state.auth.login(&profile.username, "wrong").await,
        Err(DomainError::InvalidCredentials)
    );
}

#[tokio::test]
async fn blank_fields_are_validation_errors() {
    let harness = build_test_harness().await;

    assert!(matches!(
        harness.state.auth.login("", PASSWORD).await,
        Err(DomainError::Validation(_))
    ));
    assert!(matches!(
        harness.state.auth.login("someone", "").await,
        Err(DomainError::Validation(_))
    ));
}
